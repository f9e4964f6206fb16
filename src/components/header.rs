use yew::prelude::*;

use crate::content::Brand;
use crate::navigation::hooks::use_section_nav;
use crate::theme::{use_theme, Theme, ThemeContext};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
}

fn nav_link_class(active: bool, theme: Theme) -> Classes {
    classes!(
        "text-sm", "font-medium", "transition-all", "duration-300", "relative",
        if active { "text-amber-500" } else { theme.pick("text-gray-300 hover:text-amber-400", "text-gray-600 hover:text-amber-400") }
    )
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let brand = &props.brand;
    let theme = use_theme();
    let theme_ctx = use_context::<ThemeContext>();
    let menu_open = use_state(|| false);
    let nav = use_section_nav();
    let Some(nav) = nav else {
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = Callback::from(move |_: MouseEvent| {
        if let Some(ctx) = &theme_ctx {
            ctx.toggle.emit(());
        }
    });

    let nav_button = |id: &str, title: &str| {
        let onclick = {
            let menu_open = menu_open.clone();
            let scroll_to = nav.scroll_to.clone();
            let id = id.to_string();
            Callback::from(move |_: MouseEvent| {
                menu_open.set(false);
                scroll_to.emit(id.clone());
            })
        };
        let active = nav.is_active(id);
        html! {
            <button
                key={id.to_string()}
                {onclick}
                class={nav_link_class(active, theme)}
            >
                if active {
                    <span class="absolute -bottom-1 left-0 right-0 h-0.5 bg-amber-500 rounded-full shadow-md shadow-amber-500/50"></span>
                }
                { title.to_string() }
            </button>
        }
    };

    html! {
        <header class={classes!(
            "fixed", "w-full", "z-50", "backdrop-blur-md", "border-b", "transition-all", "duration-300",
            theme.pick("bg-gray-900/80 border-gray-800", "bg-white/80 border-gray-200"),
            nav.view.show_back_to_top.then_some("shadow-lg"),
        )}>
            <div class="container mx-auto px-4 py-3 flex flex-wrap items-center justify-between">
                <div class="flex items-center space-x-2">
                    <img src={brand.logo.clone()} alt={brand.name.clone()} class="h-12 md:h-14 object-contain" />
                </div>
                <div class="flex items-center space-x-4 w-full md:w-auto justify-center">
                    <nav class="hidden md:flex items-center space-x-4">
                        { for nav.entries.iter().map(|entry| nav_button(&entry.id, &entry.title)) }
                    </nav>
                    <a
                        href={brand.video_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mx-2 inline-flex items-center px-4 py-2 rounded-full bg-amber-500 text-white font-bold hover:bg-amber-600 transition-colors duration-300 shadow-lg shadow-amber-500/20"
                    >
                        <i class="fa-solid fa-play mr-2 text-xs"></i>{ brand.video_label.clone() }
                    </a>
                </div>
                <div class="flex items-center space-x-4">
                    <button
                        onclick={toggle_theme}
                        aria-label="toggle theme"
                        class={classes!("p-2", "rounded-full", "transition-colors", theme.pick("bg-gray-700 text-gray-200", "bg-gray-200 text-gray-700"))}
                    >
                        <i class={if theme.is_dark() { "fa-solid fa-sun" } else { "fa-solid fa-moon" }}></i>
                    </button>
                    <button
                        onclick={nav.go_to::<MouseEvent>("payment")}
                        class="hidden sm:flex items-center px-4 py-2 rounded-full bg-blue-500 text-white font-medium hover:bg-blue-600 transition-colors duration-300 shadow-lg shadow-blue-500/20"
                    >
                        { brand.buy_label.clone() }
                        <i class="fa-solid fa-arrow-right ml-2 text-sm"></i>
                    </button>
                    <button class={classes!("md:hidden", theme.pick("text-gray-200", "text-gray-700"))} onclick={toggle_menu}>
                        <i class={if *menu_open { "fa-solid fa-xmark text-xl" } else { "fa-solid fa-bars text-xl" }}></i>
                    </button>
                </div>
            </div>
            if *menu_open {
                <nav class={classes!("md:hidden", "flex", "flex-col", "items-start", "gap-3", "px-6", "pb-4", theme.pick("bg-gray-900/95", "bg-white/95"))}>
                    { for nav.entries.iter().map(|entry| nav_button(&entry.id, &entry.title)) }
                </nav>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_is_highlighted_in_both_themes() {
        for theme in [Theme::Dark, Theme::Light] {
            assert!(nav_link_class(true, theme).contains("text-amber-500"));
            assert!(!nav_link_class(false, theme).contains("text-amber-500"));
        }
        assert!(nav_link_class(false, Theme::Light).contains("text-gray-600"));
    }
}
