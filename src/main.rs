use anyhow::Result;
use clap::{Parser, Subcommand};
use xrate::core::log::init_logging;

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

impl From<Commands> for xrate::AppCommand {
    fn from(cmd: Commands) -> xrate::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                xrate::AppCommand::Convert { amount, from, to }
            }
            Commands::Rates { base } => xrate::AppCommand::Rates { base },
            Commands::Currencies { base } => xrate::AppCommand::Currencies { base },
            Commands::Interactive => xrate::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount from one currency to another
    Convert {
        /// Amount to convert
        amount: f64,
        /// Source currency code, e.g. USD
        from: String,
        /// Target currency code, e.g. EUR
        to: String,
    },
    /// Display exchange rates of popular currencies
    Rates {
        /// Base currency, defaults to the configured one
        base: Option<String>,
    },
    /// List all available currencies
    Currencies {
        /// Base currency, defaults to the configured one
        base: Option<String>,
    },
    /// Start the interactive menu (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let command = cli.command.unwrap_or(Commands::Interactive);
    let result = match command {
        Commands::Setup => xrate::cli::setup::setup(),
        cmd => xrate::run_command(cmd.into(), cli.config_path.as_deref()).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
