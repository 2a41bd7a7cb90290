//! CulinarySeoul dashboard CLI - brand selection from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use culinary_core::DashboardConfig;

mod adapters;
mod commands;
mod logging;
mod state;

use state::AppState;

#[derive(Parser)]
#[command(name = "culinary")]
#[command(about = "CulinarySeoul dashboard - brand selection", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Brand directory and selection
    Brands {
        #[command(subcommand)]
        action: BrandsAction,
    },
}

#[derive(Subcommand)]
enum BrandsAction {
    /// List brands available to this session
    List,
    /// Show the active brand
    Current,
    /// Switch the active brand
    Switch {
        /// Brand identifier
        brand_id: String,
        /// Route currently displayed (drives navigation after the switch)
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Reload the directory, keeping the selection when it still exists
    Refresh,
    /// Forget the persisted selection
    Forget,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (for development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DashboardConfig::from_env()?;
    let _log_guard = logging::init_tracing(&config.data_dir.join("logs"), cli.verbose);

    let current_path = match &cli.command {
        Commands::Brands {
            action: BrandsAction::Switch { path, .. },
        } => path.as_str(),
        _ => "/",
    };
    let mut state = AppState::new(&config, current_path)?;

    let result = match &cli.command {
        Commands::Brands { action } => match action {
            BrandsAction::List => commands::brands::list(&state, cli.json).await,
            BrandsAction::Current => commands::brands::current(&state, cli.json).await,
            BrandsAction::Switch { brand_id, .. } => {
                commands::brands::switch(&state, brand_id, cli.json).await
            }
            BrandsAction::Refresh => commands::brands::refresh(&state).await,
            BrandsAction::Forget => commands::brands::forget(&state).await,
        },
    };

    state.flush_events();
    result
}
