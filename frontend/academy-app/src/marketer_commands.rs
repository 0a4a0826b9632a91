use clap::Subcommand;

#[derive(Subcommand)]
pub enum MarketerCommands {
    /// List all marketers
    List,
    /// The caller's referral stats
    Stats,
    /// Change the caller's marketer name
    Rename { name: String },
    /// Record one referral for the caller
    Referral,
}
