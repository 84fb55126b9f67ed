//! Plain text navigation link.

use leptos::prelude::*;

/// Muted link that takes the brand color on hover.
pub const NAV_LINK_CLASS: &str = "text-gray-600 hover:text-primary-600";

/// Text link to another route.
#[component]
pub fn NavLink(
    /// Link destination.
    href: &'static str,
    /// CSS classes, replacing the default muted style.
    #[prop(default = NAV_LINK_CLASS)]
    class: &'static str,
    /// Link content.
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class>
            {children()}
        </a>
    }
}
