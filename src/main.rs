use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod startup;
mod theme;
mod navigation {
    pub mod hooks;
    pub mod registry;
    pub mod tracker;
}
mod components {
    pub mod back_to_top;
    pub mod blocks;
    pub mod error_boundary;
    pub mod footer;
    pub mod header;
    pub mod performance_chart;
}
mod pages {
    pub mod empty;
    pub mod home;
    pub mod purchase;
    pub mod showcase;
}

use components::error_boundary::ErrorBoundary;
use content::SiteContent;
use pages::{empty::Empty, home::Home};
use startup::FallbackScreen;
use theme::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    IndexHtml,
    #[at("/runtime/")]
    Runtime,
    #[at("/other")]
    Other,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Empty,
}

/// The site is a single page; only `/other` has anything else to show.
/// Unknown paths land on the home page rather than a not-found screen.
pub fn page_for(route: &Route) -> Page {
    match route {
        Route::Other => Page::Empty,
        Route::Home | Route::IndexHtml | Route::Runtime | Route::NotFound => Page::Home,
    }
}

fn switch(route: Route, content: &Rc<SiteContent>) -> Html {
    match page_for(&route) {
        Page::Home => {
            info!("Rendering Home page for {:?}", route);
            html! { <Home content={content.clone()} /> }
        }
        Page::Empty => {
            info!("Rendering Empty page");
            html! { <Empty /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let content = props.content.clone();

    html! {
        <ThemeProvider>
            <ErrorBoundary>
                <HashRouter>
                    <Switch<Route> render={move |route: Route| switch(route, &content)} />
                </HashRouter>
            </ErrorBoundary>
        </ThemeProvider>
    }
}

fn main() {
    startup::install_panic_fallback();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    let content = match SiteContent::load() {
        Ok(content) => Rc::new(content),
        Err(err) => {
            error!("Site content rejected: {}", err);
            startup::render_fallback(FallbackScreen::LoadFailed);
            return;
        }
    };

    let root = match startup::mount_point() {
        Ok(root) => root,
        Err(err) => {
            error!("Cannot start: {}", err);
            startup::render_fallback(FallbackScreen::InitFailed);
            return;
        }
    };

    if let Some(window) = web_sys::window() {
        startup::watch_mount(&window);
    }

    info!("Starting application");
    yew::Renderer::<App>::with_root_and_props(root, AppProps { content }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_but_other_renders_home() {
        for path in ["/", "/index.html", "/runtime/", "/anything", "/deep/link"] {
            let route = Route::recognize(path).unwrap_or(Route::NotFound);
            assert_eq!(page_for(&route), Page::Home, "{path}");
        }
        assert_eq!(Route::recognize("/other"), Some(Route::Other));
        assert_eq!(page_for(&Route::Other), Page::Empty);
    }
}
