//! Landing page: hero plus one feature card per section.

use leptos::prelude::*;

use crate::ui::components::Card;
use crate::ui::layout::PageShell;
use crate::ui::routes::Section;

/// Landing page wrapped in the shared page shell.
#[component]
pub fn LandingPage(
    /// Year shown in the footer.
    year: i32,
) -> impl IntoView {
    view! {
        <PageShell year=year>
            <div class="text-center">
                <Hero/>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <FeatureCard section=section/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </PageShell>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <h1 class="text-4xl font-bold text-gray-900 mb-6">
            "Enterprise Equipment Configuration"
        </h1>
        <p class="text-xl text-gray-600 mb-8">
            "Configure complex equipment systems with our intuitive platform"
        </p>
    }
}

/// Summary card for one section.
#[component]
fn FeatureCard(section: Section) -> impl IntoView {
    view! {
        <Card class="p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{section.label()}</h2>
            <p class="text-gray-600">{section.summary()}</p>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::element_texts;

    fn render(year: i32) -> String {
        view! { <LandingPage year=year/> }.to_html()
    }

    #[test]
    fn renders_hero() {
        let html = render(2031);
        assert!(html.contains(">Enterprise Equipment Configuration</h1>"));
        assert!(html.contains("Configure complex equipment systems with our intuitive platform"));
    }

    #[test]
    fn renders_three_cards_in_order() {
        let html = render(2031);
        assert_eq!(
            element_texts(&html, "<h2", "</h2>"),
            ["Components", "Configurations", "Quotations"]
        );
        assert_eq!(html.matches("bg-white rounded-lg shadow-sm p-6").count(), 3);
        for section in Section::ALL {
            assert!(html.contains(section.summary()));
        }
    }

    #[test]
    fn wraps_content_in_page_shell() {
        let html = render(2031);
        let header = html.find("<header").expect("header");
        let hero = html.find("<h1").expect("hero");
        let footer = html.find("<footer").expect("footer");
        assert!(header < hero && hero < footer);
    }

    #[test]
    fn renders_identically_for_the_same_year() {
        assert_eq!(render(2031), render(2031));
    }
}
