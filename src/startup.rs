//! Boot-time guards around the Yew app.
//!
//! Anything that goes wrong before or outside of the component tree ends up
//! here as static markup, so the visitor never faces a blank page.

use std::panic;

use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::config::{HASH_RECHECK_DELAY_MS, ROOT_ELEMENT_ID};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount element #{0} not found")]
    MissingMount(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackScreen {
    /// The mount element is missing; written into `<body>`.
    InitFailed,
    /// Content or rendering failed; written into the mount.
    LoadFailed,
    /// The mount is still empty after the page finished loading.
    Loading,
}

const RELOAD_BUTTON: &str = r#"<button class="px-6 py-2 bg-blue-600 hover:bg-blue-700 rounded-full transition-colors" onclick="location.reload()">刷新页面重试</button>"#;

pub fn fallback_markup(screen: FallbackScreen) -> String {
    let shell = "flex flex-col items-center justify-center min-h-screen bg-gray-900 text-white p-4";
    let icon = r#"<i class="fa-solid fa-exclamation-circle text-red-500 text-5xl mb-4"></i>"#;
    match screen {
        FallbackScreen::InitFailed => format!(
            r#"<div class="{shell}">{icon}<h1 class="text-2xl font-bold mb-2">应用无法初始化</h1><p class="text-gray-300 mb-6 text-center">遇到严重错误，无法启动应用。</p>{RELOAD_BUTTON}</div>"#
        ),
        FallbackScreen::LoadFailed => format!(
            r#"<div class="{shell}">{icon}<h1 class="text-2xl font-bold mb-2">应用加载失败</h1><p class="text-gray-300 mb-6 text-center">抱歉，应用无法正常加载。这可能是由于网络问题或浏览器兼容性问题导致的。</p>{RELOAD_BUTTON}</div>"#
        ),
        FallbackScreen::Loading => format!(
            r#"<div class="{shell}"><h1 class="text-2xl font-bold mb-4">页面内容加载中...</h1><div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-amber-500 mb-6"></div>{RELOAD_BUTTON}</div>"#
        ),
    }
}

/// True when the mount rendered nothing visible.
pub fn is_blank(html: &str) -> bool {
    html.trim().is_empty()
}

fn document() -> Result<Document, StartupError> {
    web_sys::window()
        .ok_or(StartupError::NoWindow)?
        .document()
        .ok_or(StartupError::NoDocument)
}

pub fn mount_point() -> Result<Element, StartupError> {
    document()?
        .get_element_by_id(ROOT_ELEMENT_ID)
        .ok_or(StartupError::MissingMount(ROOT_ELEMENT_ID))
}

/// Writes `screen` into the mount, or into `<body>` when there is none.
pub fn render_fallback(screen: FallbackScreen) {
    let markup = fallback_markup(screen);
    match mount_point() {
        Ok(root) if screen != FallbackScreen::InitFailed => root.set_inner_html(&markup),
        _ => match document().ok().and_then(|d| d.body()) {
            Some(body) => body.set_inner_html(&markup),
            None => error!("Nowhere to render the {:?} screen", screen),
        },
    }
}

/// A panic leaves the wasm instance unusable, so after reporting it to the
/// console the page is replaced with the static failure screen.
pub fn install_panic_fallback() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        render_fallback(FallbackScreen::LoadFailed);
    }));
}

fn mount_is_blank() -> bool {
    mount_point()
        .map(|root| is_blank(&root.inner_html()))
        .unwrap_or(false)
}

/// App-lifetime listeners that keep an empty mount from staying empty.
pub fn watch_mount(window: &Window) {
    let on_load = Closure::<dyn FnMut()>::new(|| {
        info!("Page finished loading");
        if mount_is_blank() {
            warn!("Mount is empty after load, showing the loading screen");
            render_fallback(FallbackScreen::Loading);
        }
    });
    if window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("Could not watch the load event");
    }
    on_load.forget();

    let on_hash_change = Closure::<dyn FnMut()>::new(|| {
        if let Some(window) = web_sys::window() {
            info!("Hash changed to {:?}", window.location().hash().unwrap_or_default());
        }
        Timeout::new(HASH_RECHECK_DELAY_MS, || {
            if mount_is_blank() {
                warn!("Mount is empty after navigation, reloading");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
        })
        .forget();
    });
    if window
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("Could not watch hash changes");
    }
    on_hash_change.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_screens_carry_their_messages() {
        let init = fallback_markup(FallbackScreen::InitFailed);
        assert!(init.contains("应用无法初始化"));
        assert!(init.contains("location.reload()"));

        let load = fallback_markup(FallbackScreen::LoadFailed);
        assert!(load.contains("应用加载失败"));
        assert!(load.contains("刷新页面重试"));

        let loading = fallback_markup(FallbackScreen::Loading);
        assert!(loading.contains("页面内容加载中..."));
        assert!(loading.contains("location.reload()"));
    }

    #[test]
    fn whitespace_only_mount_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank("<div></div>"));
    }

    #[test]
    fn missing_mount_names_the_element() {
        assert_eq!(
            StartupError::MissingMount(ROOT_ELEMENT_ID).to_string(),
            "mount element #root not found"
        );
    }
}
