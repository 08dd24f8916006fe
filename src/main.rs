use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{ConfigCommand, GroceryCommand, MealPlanCommand};
use config::Config;
use larder_core::{FileStore, GroceryListManager, MealPlanManager, PersistError, MEAL_PLAN_KEY};

#[derive(Parser)]
#[command(name = "larder")]
#[command(version)]
#[command(about = "Grocery list and meal planner", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the grocery list
    Grocery(GroceryCommand),

    /// Plan meals by day, week or month
    Plan(MealPlanCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "larder=warn,larder_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for config commands
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;
    tracing::debug!(data_dir = %config.data_dir.value.display(), "loaded configuration");

    match cli.command {
        Some(Commands::Grocery(cmd)) => {
            let store = FileStore::new(config.data_dir.value.clone());
            let mut manager = GroceryListManager::new(store);
            let hint = "Run 'larder grocery reset' to start a new list.";
            check_loaded(manager.load().await, cmd.needs_intact_store(), hint)?;
            cmd.run(&mut manager, &config).await?;
        }
        Some(Commands::Plan(cmd)) => {
            let store = FileStore::new(config.data_dir.value.clone());
            let hint = format!(
                "Fix or move aside {} to continue.",
                store.path(MEAL_PLAN_KEY).display()
            );
            let mut manager = MealPlanManager::new(store);
            check_loaded(manager.load().await, cmd.is_write(), &hint)?;
            cmd.run(&mut manager, &config).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli_config_path)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Decide whether a command may run after loading its document.
///
/// Reads carry on from the empty default with a warning. Writes stop, since
/// they would replace the stored document with the empty default.
fn check_loaded(
    loaded: Result<(), PersistError>,
    writes: bool,
    corrupt_hint: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match loaded {
        Ok(()) => Ok(()),
        Err(e) if !writes => {
            eprintln!("Warning: {}", e);
            Ok(())
        }
        Err(e) if e.is_corrupt_document() => Err(format!("{}. {}", e, corrupt_hint).into()),
        Err(e) => Err(e.into()),
    }
}
