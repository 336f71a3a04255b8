use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fondo::api::FundSortKey;
use fondo::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fondo::AppCommand {
    fn from(cmd: Commands) -> fondo::AppCommand {
        match cmd {
            Commands::Funds {
                sort,
                desc,
                page,
                page_size,
            } => fondo::AppCommand::Funds(fondo::FundsViewOptions {
                sort,
                descending: desc,
                page,
                items_per_page: page_size,
            }),
            Commands::Portfolio => fondo::AppCommand::Portfolio,
            Commands::Buy { fund_id, amount } => fondo::AppCommand::Buy { fund_id, amount },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Browse the funds table
    Funds {
        /// Sort by this column
        #[arg(long, value_enum)]
        sort: Option<FundSortKey>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Page to display (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Funds per page
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Display the portfolio grouped by category
    Portfolio,
    /// Buy fund units for an amount of money
    Buy {
        /// Fund identifier
        fund_id: String,
        /// Amount of money to invest
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fondo::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = fondo::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
api:
  base_url: "http://localhost:3000"

currency: "EUR"
items_per_page: 10
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
