//! Full pages, each composed inside the page shell.

mod home;
mod not_found;

pub use home::LandingPage;
pub use not_found::NotFoundPage;
