//! Reusable UI building blocks, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Card`]: White panel container
//! - [`ButtonLink`]: Anchor with button styling
//! - [`NavLink`]: Muted text link

mod button;
mod card;
mod nav_link;

pub use button::ButtonLink;
pub use card::Card;
pub use nav_link::{NAV_LINK_CLASS, NavLink};
