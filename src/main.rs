use dotenvy::dotenv;
use inventory_buddy::cli::{Shell, Terminal};
use inventory_buddy::config;
use inventory_buddy::core::Catalog;
use inventory_buddy::errors::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 2. Load the application configuration (defaults when the file is absent)
    let config_path = config::config_path()?;
    let app_config = config::load_or_default(&config_path)?;

    // 3. Initialize tracing; stderr keeps log lines out of the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if config_path.exists() {
        info!("Loaded configuration from {}.", config_path.display());
    } else {
        info!(
            "No configuration file at {}, using defaults.",
            config_path.display()
        );
    }

    // 4. Register the configured products
    let mut catalog = Catalog::new();
    catalog.extend_from_seeds(&app_config.products);

    // 5. Run the shell on the process terminal
    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock(), app_config);
    let (catalog, _) = Shell::new(catalog, terminal)
        .run()
        .inspect_err(|e| error!("Shell stopped with an error: {}", e))?;

    info!(
        "Session ended with {} product(s), total stock value {:.2}.",
        catalog.len(),
        catalog.total_inventory_value()
    );
    Ok(())
}
