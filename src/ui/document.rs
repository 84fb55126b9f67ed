//! Root document component - the complete HTML page.

use leptos::prelude::*;

/// Stylesheet served from the static directory.
pub const STYLESHEET_PATH: &str = "/static/app.css";

/// `<html>` wrapper with the shared `<head>`.
#[component]
pub fn Document(
    /// Contents of `<title>`.
    title: &'static str,
    /// Body content.
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Enterprise equipment configuration platform for complex systems"
                />
                <title>{title}</title>
                <link rel="stylesheet" href=STYLESHEET_PATH/>
            </head>
            <body class="bg-gray-100 text-gray-900 antialiased">
                {children()}
            </body>
        </html>
    }
}
