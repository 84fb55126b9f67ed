//! Shared page chrome.

mod footer;
mod header;
mod shell;

pub use footer::{Footer, copyright_notice};
pub use header::Header;
pub use shell::PageShell;
