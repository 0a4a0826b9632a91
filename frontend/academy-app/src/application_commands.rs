use clap::Subcommand;

#[derive(Subcommand)]
pub enum ApplicationCommands {
    /// Submit an admission application
    Submit {
        #[arg(long)]
        student_name: String,
        #[arg(long)]
        father_name: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        contact_number: String,
        /// Course ID (basic, advanced, super)
        #[arg(long)]
        course: String,
        #[arg(long)]
        referred_by: Option<String>,
    },
    /// List applications, optionally filtered
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get one application by ID
    Get { id: u64 },
}
