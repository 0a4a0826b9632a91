use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the caller's profile
    Show,
    /// Create or replace the caller's profile
    Setup {
        #[arg(long)]
        name: String,
        /// Student, Management or Marketer
        #[arg(long)]
        role: String,
    },
}
