use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod registry;

use commands::Command;
use registry::AppRegistry;
use shared_config::AppConfig;
use shared_models::AppError;

#[derive(Parser, Debug)]
#[command(name = "hospital-portal", version)]
#[command(about = "Patient portal and admin panel for the demo hospital", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file; overrides HOSPITAL_STORE_PATH.
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<Vec<String>> {
    let mut config = AppConfig::from_env();
    if let Some(path) = cli.store {
        config = config.with_store_path(path);
    }

    info!("Using store at {}", config.store_path.display());
    let registry = AppRegistry::open(&config)?;
    Ok(commands::execute(&registry, cli.command)?)
}

fn main() -> ExitCode {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_err) => eprintln!("{}", app_err.user_message()),
                None => {
                    error!("{:#}", err);
                    eprintln!("{:#}", err);
                }
            }
            ExitCode::FAILURE
        }
    }
}
