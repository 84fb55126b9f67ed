//! Errors raised by the storefront host.
//!
//! Rendering itself cannot fail; everything here comes from configuration,
//! sockets or the filesystem.

use std::path::PathBuf;

/// Errors that can occur while starting, serving or exporting the storefront.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Configuration could not be assembled or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The listener could not bind to the configured address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// A rendered page could not be written during export.
    #[error("Failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
