use yew::prelude::*;

use crate::navigation::hooks::{scroll_to_top, use_section_nav};
use crate::theme::use_theme;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let theme = use_theme();
    let visible = use_section_nav()
        .map(|nav| nav.view.show_back_to_top)
        .unwrap_or(false);

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            {onclick}
            aria-label="回到顶部"
            class={classes!(
                "fixed", "right-6", "bottom-6", "p-3", "rounded-full", "shadow-lg", "z-50",
                "text-white", "transition-all", "duration-300",
                theme.pick("bg-amber-500 hover:bg-amber-600", "bg-blue-500 hover:bg-blue-600"),
                if visible { "opacity-100 scale-100" } else { "opacity-0 scale-50 pointer-events-none" },
            )}
        >
            <i class="fa-solid fa-arrow-up"></i>
        </button>
    }
}
