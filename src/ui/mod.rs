//! UI components and pages.
//!
//! Leptos SSR components rendered to static HTML strings. Nothing here
//! hydrates or holds reactive state.
//!
//! # Structure
//!
//! - [`routes`]: Brand, home path and product sections
//! - [`components`]: Reusable building blocks
//! - [`layout`]: Header, footer and the page shell
//! - [`pages`]: Landing and not-found pages
//! - [`render`]: Page to HTML document

pub mod components;
pub mod document;
pub mod layout;
pub mod pages;
pub mod render;
pub mod routes;

#[cfg(test)]
mod test_support;
