//! Route table shared by the header, footer and landing page.
//!
//! Only `/` is served by this crate. The section paths are link targets whose
//! pages live elsewhere.

/// Brand name shown in the header, footer and document titles.
pub const BRAND: &str = "Equipment Configurator";

/// Path of the landing page.
pub const HOME_PATH: &str = "/";

/// Product sections linked from the navigation and summarized on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Equipment component catalog.
    Components,
    /// Saved equipment configurations.
    Configurations,
    /// Quotations generated from configurations.
    Quotations,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 3] = [Self::Components, Self::Configurations, Self::Quotations];

    /// Route path of the section.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Components => "/components",
            Self::Configurations => "/configurations",
            Self::Quotations => "/quotations",
        }
    }

    /// Link text and card heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Components => "Components",
            Self::Configurations => "Configurations",
            Self::Quotations => "Quotations",
        }
    }

    /// One-line description used on the landing page card.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Components => {
                "Browse and select from our extensive catalog of equipment components"
            }
            Self::Configurations => "Create and manage your equipment configurations",
            Self::Quotations => "Generate detailed quotations for your configurations",
        }
    }
}
