use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config::TrackerConfig;
use crate::content::{SectionKind, SiteContent};
use crate::navigation::hooks::{use_section_tracker, SectionNav};
use crate::navigation::registry::SectionRegistry;
use crate::pages::purchase::{PaymentSection, PricingSection};
use crate::pages::showcase::*;
use crate::theme::{use_theme, Theme};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
}

/// One anchor per navigation entry, in page order.
pub fn build_registry(content: &SiteContent) -> SectionRegistry<NodeRef> {
    let mut registry = SectionRegistry::new();
    for section in &content.sections {
        registry.register(section.kind.id(), section.title.as_str(), NodeRef::default());
    }
    registry
}

fn section_class(kind: SectionKind, index: usize, theme: Theme) -> Classes {
    if kind == SectionKind::Hero {
        return classes!("relative");
    }
    let background = if index % 2 == 1 {
        theme.pick("bg-gray-800", "bg-white")
    } else {
        theme.pick("bg-gray-900", "bg-gray-50")
    };
    classes!("py-20", background)
}

fn render_section(kind: SectionKind, content: Rc<SiteContent>) -> Html {
    match kind {
        SectionKind::Hero => html! { <HeroSection {content} /> },
        SectionKind::Modules => html! { <ModulesSection {content} /> },
        SectionKind::Nve => html! { <NveSection {content} /> },
        SectionKind::LibertyCity => html! { <LibertyCitySection {content} /> },
        SectionKind::Terrain => html! { <TerrainSection {content} /> },
        SectionKind::Performance => html! { <PerformanceSection {content} /> },
        SectionKind::Physics => html! { <PhysicsSection {content} /> },
        SectionKind::Roleplay => html! { <RoleplaySection {content} /> },
        SectionKind::RdePev => html! { <RdePevSection {content} /> },
        SectionKind::Police => html! { <PoliceSection {content} /> },
        SectionKind::Updates => html! { <UpdatesSection {content} /> },
        SectionKind::Modifiers => html! { <ModifiersSection {content} /> },
        SectionKind::Pricing => html! { <PricingSection {content} /> },
        SectionKind::Payment => html! { <PaymentSection {content} /> },
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let theme = use_theme();
    let content = props.content.clone();

    let registry = use_memo(|content| build_registry(content), content.clone());
    let nav = use_section_tracker(registry.clone(), TrackerConfig::default());

    // Start at the top on first mount
    let order = registry.ordered_identifiers().join(", ");
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            debug!("Home mounted with sections [{}]", order);
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<SectionNav> context={nav}>
            <div class={classes!(
                "min-h-screen", "flex", "flex-col", "transition-colors", "duration-300",
                theme.pick("bg-gray-900 text-gray-100", "bg-gray-50 text-gray-900"),
            )}>
                <Header brand={content.brand.clone()} />
                <main class="flex-grow pt-16">
                    { for registry.entries().zip(content.sections.iter()).enumerate().map(|(index, (section, nav_section))| html! {
                        <section
                            key={section.id.clone()}
                            id={section.id.clone()}
                            ref={section.anchor().clone()}
                            class={section_class(nav_section.kind, index, theme)}
                        >
                            { render_section(nav_section.kind, content.clone()) }
                        </section>
                    }) }
                </main>
                <Footer brand={content.brand.clone()} />
            </div>
            <BackToTop />
        </ContextProvider<SectionNav>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_navigation_order() {
        let content = SiteContent::load().unwrap();
        let registry = build_registry(&content);
        let ids = registry.ordered_identifiers();
        assert_eq!(ids.len(), content.sections.len());
        assert_eq!(ids.first(), Some(&"hero"));
        assert_eq!(ids.last(), Some(&"payment"));
        let liberty = registry.entries().find(|s| s.id == "libertyCity");
        assert_eq!(liberty.map(|s| s.title.as_str()), Some("新版自由城"));
    }

    #[test]
    fn sections_alternate_backgrounds() {
        let odd = section_class(SectionKind::Modules, 1, Theme::Dark);
        let even = section_class(SectionKind::Nve, 2, Theme::Dark);
        assert!(odd.contains("bg-gray-800"));
        assert!(even.contains("bg-gray-900"));
        assert!(!section_class(SectionKind::Hero, 0, Theme::Dark).contains("py-20"));
    }
}
