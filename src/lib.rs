pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod log;
pub mod notify;
pub mod providers;
pub mod store;

use anyhow::Result;
use tracing::{debug, info};

pub use cli::funds::FundsViewOptions;

/// Top-level application commands, mapped from the CLI.
pub enum AppCommand {
    Funds(FundsViewOptions),
    Portfolio,
    Buy { fund_id: String, amount: f64 },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Fondo starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let api = providers::rest::RestApi::new(&config.api.base_url);

    match command {
        AppCommand::Funds(options) => cli::funds::run(&api, &options, &config).await,
        AppCommand::Portfolio => cli::portfolio::run(&api, &config).await,
        AppCommand::Buy { fund_id, amount } => cli::buy::run(&api, &fund_id, amount).await,
    }
}
