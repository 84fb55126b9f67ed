//! Equipment Configurator Storefront
//!
//! Server-rendered storefront pages for an enterprise equipment
//! configuration product: a landing page framed by a shared header and footer.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving the landing page, static assets and a
//!   not-found fallback
//! - **UI**: Leptos SSR components rendered to plain HTML strings
//! - **Clock**: Injected year source for the footer copyright
//! - **Export**: Optional one-shot write of the rendered pages to disk
//!
//! # Modules
//!
//! - [`config`]: CLI, environment and file configuration
//! - [`clock`]: Time sources
//! - [`export`]: Static export
//! - [`server`]: Router and handlers
//! - [`ui`]: Components, layout and pages

// Nested SSR view types exceed the default query depth.
#![recursion_limit = "256"]
// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Year source for the footer
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }
}
