//! Page shell layout component.

use leptos::prelude::*;

use super::{Footer, Header};

/// Consistent page chrome around a single content region.
///
/// Provides:
/// - Header with brand and section navigation
/// - Main content region
/// - Footer with the copyright year
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <PageShell year=2031>
///         <p>"Page content"</p>
///     </PageShell>
/// }
/// ```
#[component]
pub fn PageShell(
    /// Year passed through to the footer.
    year: i32,
    /// Page-specific content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header/>
            <main id="content" class="flex-grow container mx-auto px-4 py-8">
                {children()}
            </main>
            <Footer year=year/>
        </div>
    }
}
