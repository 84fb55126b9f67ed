//! Site header.

use leptos::prelude::*;

use crate::ui::components::NavLink;
use crate::ui::routes::{BRAND, HOME_PATH, Section};

/// Navigation bar with the brand link and one link per section.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm">
            <nav class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <NavLink href=HOME_PATH class="text-2xl font-bold text-primary-600">
                        {BRAND}
                    </NavLink>
                    <div class="flex items-center space-x-6">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! { <NavLink href=section.path()>{section.label()}</NavLink> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </nav>
        </header>
    }
}
