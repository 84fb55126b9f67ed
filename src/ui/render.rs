//! Page rendering entry point.

use leptos::prelude::*;

use super::document::Document;
use super::pages::{LandingPage, NotFoundPage};
use crate::clock::Clock;

/// Pages this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Hero and section cards at `/`.
    Landing,
    /// Fallback for every unhandled path.
    NotFound,
}

impl Page {
    /// Document title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Equipment Configurator",
            Self::NotFound => "Page not found - Equipment Configurator",
        }
    }

    /// File name used when exporting the page.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::NotFound => "404.html",
        }
    }
}

/// Render a complete HTML document, reading the footer year from `clock`.
///
/// # Example
///
/// ```rust
/// use equipment_storefront::clock::FixedClock;
/// use equipment_storefront::ui::render::{Page, render_page};
///
/// let html = render_page(Page::Landing, &FixedClock(2031));
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("2031"));
/// ```
pub fn render_page(page: Page, clock: &dyn Clock) -> String {
    let year = clock.current_year();
    let title = page.title();

    let html = match page {
        Page::Landing => view! {
            <Document title=title>
                <LandingPage year=year/>
            </Document>
        }
        .to_html(),
        Page::NotFound => view! {
            <Document title=title>
                <NotFoundPage year=year/>
            </Document>
        }
        .to_html(),
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
