//! academy - Midbrain academy front-end CLI
//!
//! # Examples
//!
//! ```bash
//! # What would the app show right now?
//! academy screen --pretty
//!
//! # Log in and create a profile
//! academy login
//! academy profile setup --name "Ann" --role Student
//!
//! # Enroll in a course
//! academy course enroll basic
//! ```

use academy_app::{AppResult, Cli, logger, run};
use academy_client::HttpBackendFactory;
use academy_config::Config;
use academy_session::{AppContext, FileIdentityProvider, NotificationLevel};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = execute(cli).await;

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> AppResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.backend.url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let identity = Arc::new(FileIdentityProvider::new(config.identity_path()?));
    let backends = Arc::new(HttpBackendFactory::new(
        &config.backend.url,
        Duration::from_secs(config.backend.timeout_secs),
    ));
    let ctx = AppContext::from_config(&config, identity, backends);
    ctx.initialize().await?;

    let result = run(&ctx, cli.command).await;

    for notification in ctx.notifier().drain() {
        let label = match notification.level {
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        eprintln!("[{label}] {}", notification.message);
    }

    result
}
