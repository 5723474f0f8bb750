/// Application settings loading from config.toml
pub mod app;

/// Startup product definitions from config.toml
pub mod products;

pub use app::{AppConfig, config_path, load_config, load_or_default};
pub use products::ProductSeed;
