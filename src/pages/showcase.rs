//! Feature sections of the home page, hero to modifiers.

use std::rc::Rc;

use yew::prelude::*;

use crate::components::blocks::{
    card_class, muted_class, BulletList, HighlightGrid, LabeledPoints, PillarGrid, SectionIntro,
    ShowcaseList,
};
use crate::components::performance_chart::PerformanceChart;
use crate::content::{Accent, Comparison, SiteContent};
use crate::navigation::hooks::use_section_nav;
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<SiteContent>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &SectionProps) -> Html {
    let brand = &props.content.brand;
    let hero = &props.content.hero;
    let nav = use_section_nav();
    let go_to = |id: &'static str| {
        nav.as_ref()
            .map(|nav| nav.go_to::<MouseEvent>(id))
            .unwrap_or_default()
    };

    html! {
        <div class="relative min-h-[90vh] flex items-center justify-center overflow-hidden bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900">
            <div class="absolute inset-0 z-0">
                <div class="absolute top-1/4 left-1/4 w-1/2 h-1/2 bg-amber-500/20 rounded-full filter blur-[100px]"></div>
                <div class="absolute bottom-1/4 right-1/4 w-1/3 h-1/3 bg-blue-500/20 rounded-full filter blur-[100px]"></div>
            </div>
            <div class="container mx-auto px-4 py-20 z-10 relative">
                <div class="flex flex-col lg:flex-row items-center">
                    <div class="lg:w-1/2 text-center lg:text-left mb-10 lg:mb-0">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-extrabold mb-6 leading-tight">
                            <img src={brand.hero_logo.clone()} alt={brand.name.clone()} class="w-auto h-auto max-h-[2.2em] object-contain inline-block align-middle" />
                            <span class="text-amber-500 font-black tracking-wider drop-shadow-lg">{ hero.badge.clone() }</span>
                            <br />
                            <span class="text-white drop-shadow-[0_0_8px_rgba(255,255,255,0.8)]">{ hero.headline.clone() }</span>
                        </h1>
                        <p class="text-xl text-gray-300 mb-8 max-w-xl mx-auto lg:mx-0">{ hero.description.clone() }</p>
                        <div class="flex flex-col sm:flex-row justify-center lg:justify-start space-y-4 sm:space-y-0 sm:space-x-4">
                            <button
                                onclick={go_to("payment")}
                                class="px-8 py-3 rounded-full bg-blue-500 text-white font-bold text-lg hover:bg-blue-600 transition-all duration-300 transform hover:scale-105 shadow-xl shadow-blue-500/30"
                            >
                                { brand.buy_label.clone() }
                            </button>
                            <button
                                onclick={go_to("modules")}
                                class="px-8 py-3 rounded-full bg-transparent border-2 border-gray-400 text-white font-bold text-lg hover:border-white transition-all duration-300"
                            >
                                { brand.learn_more_label.clone() }
                            </button>
                            <a
                                href={brand.whitepaper_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-8 py-3 rounded-full bg-transparent border-2 border-amber-500 text-white font-bold text-lg hover:bg-amber-500/20 transition-all duration-300"
                            >
                                { brand.whitepaper_label.clone() }
                            </a>
                        </div>
                        <div class="mt-12 flex flex-wrap justify-center lg:justify-start gap-4">
                            { for hero.checks.iter().map(|check| html! {
                                <div class="flex items-center text-gray-300">
                                    <i class="fa-solid fa-check-circle text-green-500 mr-2"></i>
                                    <span>{ check.clone() }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="lg:w-1/2 relative">
                        <div class="rounded-2xl overflow-hidden shadow-2xl border border-gray-700">
                            <img src={hero.main_image.src.clone()} alt={hero.main_image.alt.clone()} class="w-full h-auto object-cover" />
                        </div>
                        <div class="hidden md:flex gap-4 mt-4">
                            { for hero.inset_images.iter().map(|image| html! {
                                <div class="w-1/2 rounded-xl overflow-hidden shadow-xl border border-gray-700">
                                    <img src={image.src.clone()} alt={image.alt.clone()} class="w-full h-32 object-cover" loading="lazy" />
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <button
                onclick={go_to("modules")}
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-gray-400 hover:text-white transition-colors"
            >
                <span class="text-sm mb-2">{ hero.scroll_hint.clone() }</span>
                <i class="fa-solid fa-chevron-down animate-bounce"></i>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ComparisonProps {
    comparison: Comparison,
}

#[function_component(ComparisonTable)]
fn comparison_table(props: &ComparisonProps) -> Html {
    let theme = use_theme();
    let table = &props.comparison;
    html! {
        <div class="mt-20">
            <h3 class="text-2xl md:text-3xl font-bold text-center mb-8">{ table.heading.clone() }</h3>
            <div class={classes!("overflow-x-auto", "rounded-2xl", card_class(theme))}>
                <table class="w-full text-left">
                    <thead>
                        <tr class={theme.pick("bg-gray-900", "bg-gray-100")}>
                            <th class="p-4 w-1/6">{ table.category_label.clone() }</th>
                            <th class="p-4 w-5/12 text-gray-400">{ table.common_label.clone() }</th>
                            <th class="p-4 w-5/12 text-amber-500">{ table.elite_label.clone() }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for table.rows.iter().map(|row| html! {
                            <tr class={classes!("border-t", theme.pick("border-gray-700", "border-gray-100"))}>
                                <td class="p-4 font-semibold align-top">{ row.category.clone() }</td>
                                <td class={classes!("p-4", "text-sm", "align-top", muted_class(theme))}>
                                    <i class="fa-solid fa-xmark text-red-500 mr-2"></i>{ row.common.clone() }
                                </td>
                                <td class="p-4 text-sm align-top">
                                    <i class="fa-solid fa-check text-green-500 mr-2"></i>{ row.elite.clone() }
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[function_component(ModulesSection)]
pub fn modules_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let modules = &props.content.modules;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={modules.intro.clone()} />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for modules.cards.iter().map(|card| html! {
                    <div key={card.title.clone()} class={classes!("rounded-2xl", "p-6", "hover:shadow-xl", "transition-all", "duration-300", theme.pick("bg-gray-900 border border-gray-700", "bg-gray-50 border border-gray-100"))}>
                        <div class="w-14 h-14 rounded-full flex items-center justify-center mb-6 bg-amber-500/20 text-amber-500 text-2xl">
                            <i class={classes!("fa-solid", card.icon.clone())}></i>
                        </div>
                        <h3 class="text-xl font-bold mb-3">{ card.title.clone() }</h3>
                        <p class={classes!("mb-6", theme.pick("text-gray-400", "text-gray-600"))}>{ card.description.clone() }</p>
                        <BulletList items={card.details.clone()} />
                    </div>
                }) }
            </div>
            <ComparisonTable comparison={modules.comparison.clone()} />
        </div>
    }
}

#[function_component(NveSection)]
pub fn nve_section(props: &SectionProps) -> Html {
    let nve = &props.content.nve;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={nve.intro.clone()} />
            <ShowcaseList showcases={nve.showcases.clone()} />
            <div class="mt-16">
                <PillarGrid pillars={nve.pillars.clone()} />
            </div>
            <HighlightGrid heading={nve.highlights_heading.clone()} highlights={nve.highlights.clone()} />
        </div>
    }
}

#[function_component(LibertyCitySection)]
pub fn liberty_city_section(props: &SectionProps) -> Html {
    let city = &props.content.liberty_city;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={city.intro.clone()} />
            <ShowcaseList showcases={city.showcases.clone()} />
            <div class="mt-16">
                <PillarGrid pillars={city.pillars.clone()} />
            </div>
        </div>
    }
}

#[function_component(TerrainSection)]
pub fn terrain_section(props: &SectionProps) -> Html {
    let terrain = &props.content.terrain;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={terrain.intro.clone()} />
            <ShowcaseList showcases={terrain.systems.clone()} />
        </div>
    }
}

#[function_component(PerformanceSection)]
pub fn performance_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let perf = &props.content.performance;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={perf.intro.clone()} />
            <div class="flex flex-col lg:flex-row items-start gap-12">
                <div class={classes!("lg:w-1/2", "w-full", "rounded-2xl", "p-6", card_class(theme))}>
                    <h3 class="text-xl font-bold mb-4 text-center">{ perf.chart_title.clone() }</h3>
                    <PerformanceChart
                        samples={perf.samples.clone()}
                        y_label={perf.y_axis_label.clone()}
                        standard_label={perf.standard_label.clone()}
                        enhanced_label={perf.enhanced_label.clone()}
                    />
                </div>
                <div class="lg:w-1/2">
                    <h3 class="text-2xl font-bold mb-1 text-amber-500">{ perf.edition_title.clone() }</h3>
                    <p class={classes!("mb-6", muted_class(theme))}>{ perf.edition_subtitle.clone() }</p>
                    <LabeledPoints points={perf.notes.clone()} />
                    <h4 class="text-xl font-bold mt-8 mb-4">{ perf.results_heading.clone() }</h4>
                    <LabeledPoints points={perf.results.clone()} accent={Accent::Green} />
                </div>
            </div>
        </div>
    }
}

#[function_component(PhysicsSection)]
pub fn physics_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let physics = &props.content.physics;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={physics.intro.clone()} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                { for physics.systems.iter().map(|system| html! {
                    <div class={classes!("rounded-2xl", "p-8", card_class(theme))}>
                        <h3 class="text-2xl font-bold mb-2 text-amber-500">{ system.title.clone() }</h3>
                        <p class={classes!("mb-6", muted_class(theme))}>{ system.description.clone() }</p>
                        <div class="space-y-6">
                            { for system.groups.iter().map(|group| html! {
                                <div>
                                    <h4 class="text-lg font-semibold mb-3">{ group.subtitle.clone() }</h4>
                                    <BulletList items={group.points.clone()} />
                                </div>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(RoleplaySection)]
pub fn roleplay_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let roleplay = &props.content.roleplay;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={roleplay.intro.clone()} />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for roleplay.systems.iter().map(|system| html! {
                    <div class={classes!("rounded-2xl", "p-6", card_class(theme))}>
                        <div class="w-12 h-12 rounded-full flex items-center justify-center mb-4 bg-purple-500/20 text-purple-500 text-xl">
                            <i class={classes!("fa-solid", system.icon.clone())}></i>
                        </div>
                        <h3 class="text-xl font-bold mb-2">{ system.title.clone() }</h3>
                        <p class={classes!("mb-4", muted_class(theme))}>{ system.description.clone() }</p>
                        <BulletList items={system.details.clone()} accent={Accent::Purple} />
                    </div>
                }) }
            </div>
            <div class={classes!("mt-12", "rounded-2xl", "p-8", theme.pick("bg-purple-500/10 border border-purple-500/30", "bg-purple-50 border border-purple-100"))}>
                <h3 class="text-2xl font-bold mb-6 text-center">{ roleplay.social_heading.clone() }</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for roleplay.social.iter().map(|item| html! {
                        <div class="flex items-start">
                            <i class="fa-solid fa-heart text-purple-500 mt-1 mr-3"></i>
                            <span class={muted_class(theme)}>{ item.clone() }</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(RdePevSection)]
pub fn rde_pev_section(props: &SectionProps) -> Html {
    let rde = &props.content.rde_pev;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={rde.intro.clone()} />
            <PillarGrid pillars={rde.columns.clone()} />
            <HighlightGrid heading={rde.highlights_heading.clone()} highlights={rde.highlights.clone()} />
        </div>
    }
}

#[function_component(PoliceSection)]
pub fn police_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let police = &props.content.police;
    html! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-3xl md:text-4xl font-bold mb-2">{ police.title.clone() }</h2>
                <span class="inline-block px-3 py-1 rounded-full bg-blue-500/20 text-blue-500 text-sm mb-4">{ police.version.clone() }</span>
                <p class={classes!("text-lg", "max-w-3xl", "mx-auto", muted_class(theme))}>{ police.description.clone() }</p>
            </div>
            <div class="flex flex-col lg:flex-row gap-12">
                <div class="lg:w-1/2">
                    <div class="rounded-2xl overflow-hidden shadow-2xl mb-8">
                        <img src={police.image.src.clone()} alt={police.image.alt.clone()} class="w-full h-auto object-cover" loading="lazy" />
                    </div>
                    <div class={classes!("rounded-2xl", "p-6", card_class(theme))}>
                        <h3 class="text-xl font-bold mb-4">{ police.controls_heading.clone() }</h3>
                        <ul class="space-y-3">
                            { for police.controls.iter().map(|binding| html! {
                                <li class="flex items-center">
                                    <kbd class={classes!("px-3", "py-1", "rounded", "font-mono", "text-sm", "mr-4", "min-w-[4rem]", "text-center", theme.pick("bg-gray-700", "bg-gray-200"))}>
                                        { binding.key.clone() }
                                    </kbd>
                                    <span class={muted_class(theme)}>{ binding.action.clone() }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="lg:w-1/2">
                    <h3 class="text-2xl font-bold mb-6">{ police.features_heading.clone() }</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for police.features.iter().map(|feature| html! {
                            <div class={classes!("rounded-xl", "p-4", card_class(theme))}>
                                <h4 class="font-bold mb-1 text-blue-500">{ feature.name.clone() }</h4>
                                <p class={classes!("text-sm", muted_class(theme))}>{ feature.description.clone() }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(UpdatesSection)]
pub fn updates_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let updates = &props.content.updates;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={updates.intro.clone()} />
            <div class="max-w-4xl mx-auto space-y-8">
                { for updates.logs.iter().enumerate().map(|(i, log)| html! {
                    <div key={log.version.clone()} class={classes!("rounded-2xl", "p-6", "border-l-4", if i == 0 { "border-amber-500" } else { "border-gray-500" }, theme.pick("bg-gray-800", "bg-white"))}>
                        <div class="flex flex-wrap items-center gap-3 mb-2">
                            <h3 class="text-2xl font-bold">{ log.version.clone() }</h3>
                            if i == 0 {
                                <span class="px-2 py-0.5 rounded-full bg-amber-500 text-white text-xs font-bold">{ updates.latest_badge.clone() }</span>
                            }
                            <span class={classes!("text-sm", muted_class(theme))}>{ log.date.clone() }</span>
                        </div>
                        <p class="font-semibold mb-4 text-amber-500">{ log.highlights.clone() }</p>
                        <BulletList items={log.details.clone()} />
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(ModifiersSection)]
pub fn modifiers_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let modifiers = &props.content.modifiers;
    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={modifiers.intro.clone()} />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for modifiers.tools.iter().map(|tool| html! {
                    <div class={classes!("rounded-xl", "p-6", card_class(theme))}>
                        <div class="flex items-center justify-between mb-3">
                            <h3 class="text-lg font-bold">{ tool.name.clone() }</h3>
                            if let Some(hotkey) = &tool.hotkey {
                                <span class="px-2 py-1 rounded bg-amber-500/20 text-amber-500 text-xs">{ hotkey.clone() }</span>
                            }
                        </div>
                        <BulletList items={tool.notes.clone()} />
                    </div>
                }) }
            </div>
        </div>
    }
}
