use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands {
    pub mod login;
    pub mod logout;
    pub mod messages;
    pub mod supplies;
}
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod storage_config;
}
mod render;
mod setup {
    pub mod dependency_injection;
}

use cli::{Cli, Commands};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Console Entry Point
///
/// Initializes the application, wires dependencies, restores persisted
/// state, and dispatches the requested command.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse the command line
    let cli = Cli::parse();

    // 4. Load configuration
    let config = AppConfig::from_env();

    // 5. Wire dependencies and restore the local mirror
    let container = DependencyContainer::new(&config)?;

    // 6. Run the requested command
    match cli.command {
        Commands::Login { username, password } => {
            commands::login::run(&container, username, password).await
        }
        Commands::Logout => commands::logout::run(&container).await,
        Commands::List { offline } => commands::supplies::list(&container, offline).await,
        Commands::Show { id } => commands::supplies::show(&container, id).await,
        Commands::Add(args) => commands::supplies::add(&container, args).await,
        Commands::Edit(args) => commands::supplies::edit(&container, args).await,
        Commands::Remove { id } => commands::supplies::remove(&container, id).await,
    }
}
