//! Site footer.

use leptos::prelude::*;

use crate::ui::components::NavLink;
use crate::ui::routes::{BRAND, Section};

const HEADING_CLASS: &str = "text-lg font-semibold text-gray-900 mb-4";

const CONTACT_LINES: [&str; 3] = [
    "Email: support@example.com",
    "Phone: (555) 123-4567",
    "Address: 123 Business St",
];

/// Copyright notice for the given year.
pub fn copyright_notice(year: i32) -> String {
    format!("\u{a9} {year} {BRAND}. All rights reserved.")
}

/// About, quick links and contact columns above a copyright line.
///
/// The year is an explicit input; callers take it from a
/// [`Clock`](crate::clock::Clock) at render time.
#[component]
pub fn Footer(
    /// Calendar year printed in the copyright notice.
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="bg-gray-50 border-t">
            <div class="container mx-auto px-4 py-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class=HEADING_CLASS>"About Us"</h3>
                        <p class="text-gray-600">
                            "Enterprise equipment configuration platform for complex systems."
                        </p>
                    </div>
                    <div>
                        <h3 class=HEADING_CLASS>"Quick Links"</h3>
                        <ul class="space-y-2">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <NavLink href=section.path()>{section.label()}</NavLink>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h3 class=HEADING_CLASS>"Contact"</h3>
                        <ul class="space-y-2">
                            {CONTACT_LINES
                                .into_iter()
                                .map(|line| view! { <li class="text-gray-600">{line}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t text-center text-gray-600">
                    <p>{copyright_notice(year)}</p>
                </div>
            </div>
        </footer>
    }
}
