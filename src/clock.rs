//! Time sources for rendering.
//!
//! The footer's copyright year is the only value in the storefront that is not
//! a literal. Handlers read it through a [`Clock`] held in application state,
//! so rendering stays a function of its explicit inputs and tests can pin the
//! year without touching the system clock.

use chrono::{Datelike, Local};
use std::fmt;

/// Source of the current calendar year.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Calendar year at the moment of the call.
    fn current_year(&self) -> i32;
}

/// Reads the local system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
