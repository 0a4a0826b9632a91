//! academy - terminal front-end for the midbrain academy.
//!
//! Every command prints JSON on stdout; notifications and logs go to stderr.

pub mod application_commands;
pub mod cli;
pub mod commands;
pub mod course_commands;
pub mod error;
pub mod logger;
pub mod marketer_commands;
pub mod profile_commands;
pub mod role_commands;
pub mod runner;
pub mod student_commands;


pub use cli::Cli;
pub use error::{AppError, Result as AppResult};
pub use runner::{ScreenView, run, screen_view};
