//! Card container.

use leptos::prelude::*;

/// White panel with rounded corners and a light shadow.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="p-6">
///         <h2>"Title"</h2>
///         <p>"Content goes here"</p>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("bg-white rounded-lg shadow-sm {class}")
        .trim_end()
        .to_string();

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
