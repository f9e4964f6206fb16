//! Building blocks shared by the home page sections.

use yew::prelude::*;

use crate::content::{Accent, Highlight, Intro, LabeledPoint, Pillar, Showcase};
use crate::theme::{use_theme, Theme};

/// Card surface for the current theme.
pub fn card_class(theme: Theme) -> &'static str {
    theme.pick("bg-gray-800 border border-gray-700", "bg-white border border-gray-100")
}

pub fn muted_class(theme: Theme) -> &'static str {
    theme.pick("text-gray-300", "text-gray-600")
}

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub intro: Intro,
}

#[function_component(SectionIntro)]
pub fn section_intro(props: &IntroProps) -> Html {
    let theme = use_theme();
    html! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{ props.intro.heading.clone() }</h2>
            if !props.intro.lead.is_empty() {
                <p class={classes!("text-lg", "max-w-3xl", "mx-auto", muted_class(theme))}>
                    { props.intro.lead.clone() }
                </p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BulletListProps {
    pub items: Vec<String>,
    #[prop_or_default]
    pub accent: Accent,
}

#[function_component(BulletList)]
pub fn bullet_list(props: &BulletListProps) -> Html {
    let theme = use_theme();
    html! {
        <ul class="space-y-2">
            { for props.items.iter().map(|item| html! {
                <li class="flex items-start">
                    <i class={classes!("fa-solid", "fa-circle", "text-xs", "mt-2", "mr-2", props.accent.text())}></i>
                    <span class={classes!("text-sm", muted_class(theme))}>{ item.clone() }</span>
                </li>
            }) }
        </ul>
    }
}

fn labeled_point(point: &LabeledPoint, accent: Accent, theme: Theme) -> Html {
    html! {
        <li class="flex items-start">
            <i class={classes!("fa-solid", "fa-check", "mt-1", "mr-2", accent.text())}></i>
            <span class={muted_class(theme)}>
                if !point.label.is_empty() {
                    <span class="font-semibold">{ format!("{}：", point.label) }</span>
                }
                { point.text.clone() }
            </span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct PointsProps {
    pub points: Vec<LabeledPoint>,
    #[prop_or_default]
    pub accent: Accent,
}

#[function_component(LabeledPoints)]
pub fn labeled_points(props: &PointsProps) -> Html {
    let theme = use_theme();
    html! {
        <ul class="space-y-3">
            { for props.points.iter().map(|p| labeled_point(p, props.accent, theme)) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub showcase: Showcase,
    /// Puts the image on the right.
    #[prop_or_default]
    pub flipped: bool,
}

#[function_component(ShowcaseRow)]
pub fn showcase_row(props: &ShowcaseProps) -> Html {
    let theme = use_theme();
    let showcase = &props.showcase;
    html! {
        <div class={classes!("flex", "flex-col", "gap-8", "items-center", if props.flipped { "md:flex-row-reverse" } else { "md:flex-row" })}>
            <div class="md:w-1/2">
                <div class="rounded-2xl overflow-hidden shadow-2xl">
                    <img src={showcase.image.src.clone()} alt={showcase.image.alt.clone()} class="w-full h-auto object-cover" loading="lazy" />
                </div>
            </div>
            <div class="md:w-1/2">
                <h3 class={classes!("text-2xl", "font-bold", "mb-4", showcase.accent.text())}>{ showcase.title.clone() }</h3>
                <p class={classes!("mb-6", muted_class(theme))}>{ showcase.description.clone() }</p>
                <BulletList items={showcase.points.clone()} accent={showcase.accent} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseListProps {
    pub showcases: Vec<Showcase>,
}

/// Showcases stacked with the image side alternating.
#[function_component(ShowcaseList)]
pub fn showcase_list(props: &ShowcaseListProps) -> Html {
    html! {
        <div class="space-y-16">
            { for props.showcases.iter().enumerate().map(|(i, showcase)| html! {
                <ShowcaseRow showcase={showcase.clone()} flipped={i % 2 == 1} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillarProps {
    pub pillar: Pillar,
}

#[function_component(PillarCard)]
pub fn pillar_card(props: &PillarProps) -> Html {
    let theme = use_theme();
    let pillar = &props.pillar;
    html! {
        <div class={classes!("rounded-2xl", "p-6", "h-full", card_class(theme))}>
            <div class="flex items-center mb-4">
                <div class={classes!("w-12", "h-12", "rounded-full", "flex", "items-center", "justify-center", "mr-4", "text-xl", pillar.accent.badge())}>
                    <i class={classes!("fa-solid", pillar.icon.clone())}></i>
                </div>
                <h3 class="text-xl font-bold">{ pillar.title.clone() }</h3>
            </div>
            if !pillar.description.is_empty() {
                <p class={classes!("mb-4", muted_class(theme))}>{ pillar.description.clone() }</p>
            }
            <LabeledPoints points={pillar.points.clone()} accent={pillar.accent} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillarGridProps {
    pub pillars: Vec<Pillar>,
}

#[function_component(PillarGrid)]
pub fn pillar_grid(props: &PillarGridProps) -> Html {
    let columns = if props.pillars.len() == 2 { "lg:grid-cols-2" } else { "lg:grid-cols-3" };
    html! {
        <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-8", columns)}>
            { for props.pillars.iter().map(|pillar| html! { <PillarCard pillar={pillar.clone()} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HighlightsProps {
    pub heading: String,
    pub highlights: Vec<Highlight>,
}

#[function_component(HighlightGrid)]
pub fn highlight_grid(props: &HighlightsProps) -> Html {
    let theme = use_theme();
    html! {
        <div class="mt-16">
            <h3 class="text-2xl font-bold text-center mb-8">{ props.heading.clone() }</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for props.highlights.iter().map(|h| html! {
                    <div class={classes!("rounded-xl", "p-6", "text-center", card_class(theme))}>
                        <div class={classes!("w-14", "h-14", "mx-auto", "rounded-full", "flex", "items-center", "justify-center", "mb-4", "text-2xl", h.accent.badge())}>
                            <i class={classes!("fa-solid", h.icon.clone())}></i>
                        </div>
                        <h4 class="text-lg font-bold mb-2">{ h.title.clone() }</h4>
                        <p class={classes!("text-sm", muted_class(theme))}>{ h.text.clone() }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
