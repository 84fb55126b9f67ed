//! Anchor styled as a button.

use leptos::prelude::*;

const BUTTON_CLASSES: &str = "inline-flex items-center justify-center rounded-lg px-4 py-2 \
                              font-medium bg-primary-600 text-white hover:bg-primary-700";

/// Navigation link rendered as a filled brand-colored button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ButtonLink href="/">
///         "Go Home"
///     </ButtonLink>
/// }
/// ```
#[component]
pub fn ButtonLink(
    /// Link destination.
    href: &'static str,
    /// Link content.
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=BUTTON_CLASSES>
            {children()}
        </a>
    }
}
