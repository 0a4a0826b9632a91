use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "academy")]
#[command(about = "Midbrain academy front-end: role dashboards, enrollment and applications")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config.toml and ACADEMY_BACKEND_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
