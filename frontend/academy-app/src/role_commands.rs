use clap::Subcommand;

#[derive(Subcommand)]
pub enum RoleCommands {
    /// The caller's access role
    Get,
    /// Whether the caller is an admin
    IsAdmin,
    /// Assign an access role (admin, user, guest) to a principal
    Assign { principal: String, role: String },
}
