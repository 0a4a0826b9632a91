use clap::Subcommand;

#[derive(Subcommand)]
pub enum StudentCommands {
    /// List all students
    List,
    /// Change the caller's student name
    Rename { name: String },
}
