pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use commands::listing_commands::{
    get_dir_listing, get_dir_listing_async, get_dir_listing_with,
};
pub use config::ListingConfig;
pub use error::AppError;
pub use models::dir_entry::{EntryInfo, FilePermission};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
