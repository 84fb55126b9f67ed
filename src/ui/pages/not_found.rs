use leptos::prelude::*;

use crate::ui::components::ButtonLink;
use crate::ui::layout::PageShell;
use crate::ui::routes::HOME_PATH;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage(year: i32) -> impl IntoView {
    view! {
        <PageShell year=year>
            <div class="flex flex-col items-center justify-center py-20">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"404"</h1>
                <p class="text-gray-600 mb-6">"Page not found"</p>
                <ButtonLink href=HOME_PATH>
                    "Go Home"
                </ButtonLink>
            </div>
        </PageShell>
    }
}
