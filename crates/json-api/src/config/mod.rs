//! Server configuration module

use clap::Parser;

use crate::config::{
    discounts::DiscountsConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
    store::StoreSettings,
};

pub(crate) mod discounts;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod store;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Persistence settings.
    #[command(flatten)]
    pub store: StoreSettings,

    /// Initial discount settings.
    #[command(flatten)]
    pub discounts: DiscountsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
