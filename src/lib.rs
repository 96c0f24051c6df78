pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::ConversionService;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Commands runnable against a loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    Rates {
        base: Option<String>,
    },
    Currencies {
        base: Option<String>,
    },
    Interactive,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("xrate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let service = ConversionService::new(providers::from_config(&config)?);
    let base_or_default = |base: Option<String>| {
        base.map(|b| cli::normalize_code(&b))
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| config.base_currency.clone())
    };

    match command {
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&service, amount, &from, &to).await
        }
        AppCommand::Rates { base } => {
            cli::rates::run(
                &service,
                &base_or_default(base),
                config.popular_currencies.as_slice(),
            )
            .await
        }
        AppCommand::Currencies { base } => {
            cli::currencies::run(&service, &base_or_default(base)).await
        }
        AppCommand::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            cli::interactive::run(&service, &config, stdin, std::io::stdout()).await
        }
    }
}
