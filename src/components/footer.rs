use yew::prelude::*;

use crate::content::Brand;
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let theme = use_theme();
    let brand = &props.brand;

    html! {
        <footer class={classes!("py-10", "border-t", theme.pick("bg-gray-900 border-gray-800", "bg-white border-gray-100"))}>
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center space-x-1 mb-4 md:mb-0">
                        <img src={brand.footer_logo.clone()} alt={brand.name.clone()} class="h-7 md:h-8 object-contain" />
                        <span class="text-lg font-bold">{ brand.footer_name.clone() }</span>
                    </div>
                    <div class={classes!("text-sm", "text-center", "md:text-right", theme.pick("text-gray-400", "text-gray-600"))}>
                        <p>{ brand.site_title.clone() }</p>
                        <p class="mt-1">{ brand.copyright.clone() }</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
