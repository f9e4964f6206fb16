use yew::prelude::*;

use crate::components::blocks::{card_class, muted_class, BulletList, SectionIntro};
use crate::content::PricingPlan;
use crate::navigation::hooks::use_section_nav;
use crate::pages::showcase::SectionProps;
use crate::theme::use_theme;

/// Amount and term of a plan, e.g. `¥198` and ` / 永久`.
pub fn price_tag(currency: &str, plan: &PricingPlan) -> (String, String) {
    (format!("{}{}", currency, plan.price), format!(" / {}", plan.term))
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let pricing = &props.content.pricing;
    let to_payment = use_section_nav()
        .map(|nav| nav.go_to::<MouseEvent>("payment"))
        .unwrap_or_default();

    html! {
        <div class="container mx-auto px-4">
            <SectionIntro intro={pricing.intro.clone()} />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                { for pricing.plans.iter().map(|plan| {
                    let (amount, term) = price_tag(&pricing.currency, plan);
                    html! {
                        <div key={plan.title.clone()} class={classes!(
                            "relative", "rounded-2xl", "p-8", "flex", "flex-col",
                            if plan.popular { "border-2 border-amber-500 shadow-2xl shadow-amber-500/20" } else { card_class(theme) },
                            plan.popular.then(|| theme.pick("bg-gray-800", "bg-white")),
                        )}>
                            if plan.popular {
                                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full bg-amber-500 text-white text-sm font-bold">
                                    { pricing.popular_badge.clone() }
                                </span>
                            }
                            <h3 class="text-2xl font-bold mb-2">{ plan.title.clone() }</h3>
                            <p class="mb-4">
                                <span class="text-4xl font-extrabold text-amber-500">{ amount }</span>
                                <span class={muted_class(theme)}>{ term }</span>
                            </p>
                            <p class={classes!("mb-6", muted_class(theme))}>{ plan.description.clone() }</p>
                            <div class="flex-grow mb-8">
                                <BulletList items={plan.features.clone()} />
                            </div>
                            <button
                                onclick={to_payment.clone()}
                                class={classes!(
                                    "w-full", "py-3", "rounded-full", "font-bold", "transition-colors", "duration-300",
                                    if plan.popular { "bg-amber-500 hover:bg-amber-600 text-white" } else { "bg-blue-500 hover:bg-blue-600 text-white" },
                                )}
                            >
                                { plan.button_text.clone() }
                            </button>
                        </div>
                    }
                }) }
            </div>
            <div class={classes!("mt-12", "max-w-4xl", "mx-auto", "rounded-2xl", "p-8", card_class(theme))}>
                <h3 class="text-xl font-bold mb-2">
                    <i class="fa-solid fa-shield-halved text-green-500 mr-2"></i>{ pricing.guarantee.title.clone() }
                </h3>
                <p class={classes!("mb-6", muted_class(theme))}>{ pricing.guarantee.text.clone() }</p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for pricing.guarantee.groups.iter().map(|group| html! {
                        <div>
                            <h4 class="font-semibold mb-2">{ group.subtitle.clone() }</h4>
                            <BulletList items={group.points.clone()} />
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(PaymentSection)]
pub fn payment_section(props: &SectionProps) -> Html {
    let theme = use_theme();
    let payment = &props.content.payment;
    let agreement = &payment.agreement;

    html! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-3xl md:text-4xl font-bold">{ payment.heading.clone() }</h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                { for payment.channels.iter().map(|channel| html! {
                    <div class={classes!("rounded-2xl", "p-6", "text-center", card_class(theme))}>
                        <h3 class="text-lg font-bold mb-4">{ channel.title.clone() }</h3>
                        <img src={channel.image.src.clone()} alt={channel.image.alt.clone()} class="w-48 h-48 mx-auto object-contain rounded-lg bg-white p-2" loading="lazy" />
                        <p class={classes!("mt-4", "text-sm", muted_class(theme))}>{ channel.caption.clone() }</p>
                    </div>
                }) }
            </div>
            <div class={classes!("mt-8", "max-w-5xl", "mx-auto", "rounded-2xl", "p-6", card_class(theme))}>
                <h3 class="text-lg font-bold mb-2">
                    <i class="fa-solid fa-store text-amber-500 mr-2"></i>{ payment.marketplace_heading.clone() }
                </h3>
                <p class={muted_class(theme)}>{ payment.marketplace.clone() }</p>
                <p class={classes!("mt-4", "text-sm", muted_class(theme))}>{ payment.instructions.clone() }</p>
            </div>
            <div class={classes!("mt-12", "max-w-5xl", "mx-auto", "rounded-2xl", "p-8", card_class(theme))}>
                <h3 class="text-2xl font-bold text-center mb-8">{ agreement.title.clone() }</h3>
                <div class="space-y-6">
                    { for agreement.clauses.iter().map(|clause| html! {
                        <div>
                            <h4 class="text-lg font-bold mb-2">{ clause.heading.clone() }</h4>
                            <p class={classes!("leading-relaxed", muted_class(theme))}>{ clause.text.clone() }</p>
                        </div>
                    }) }
                    <div class={classes!("p-4", "rounded-xl", theme.pick("bg-amber-500/10 border border-amber-500/30", "bg-amber-50 border border-amber-100"))}>
                        <h4 class="text-xl font-bold mb-2">{ agreement.confirmation.heading.clone() }</h4>
                        <p class={theme.pick("text-gray-200", "text-gray-800")}>{ agreement.confirmation.text.clone() }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn price_tag_splits_amount_and_term() {
        let content = SiteContent::load().unwrap();
        let plans = &content.pricing.plans;
        assert_eq!(
            price_tag(&content.pricing.currency, &plans[0]),
            ("¥168".to_string(), " / 一次性".to_string())
        );
        assert_eq!(
            price_tag(&content.pricing.currency, &plans[1]),
            ("¥198".to_string(), " / 永久".to_string())
        );
    }
}
