use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::TrackerConfig;
use crate::navigation::registry::SectionRegistry;
use crate::navigation::tracker::{ScrollTracker, ScrollView};

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub id: String,
    pub title: String,
}

/// Navigation state shared with the header, the hero buttons and the
/// back-to-top control.
#[derive(Clone, PartialEq)]
pub struct SectionNav {
    pub entries: Rc<Vec<NavEntry>>,
    pub view: ScrollView,
    pub scroll_to: Callback<String>,
}

impl SectionNav {
    pub fn is_active(&self, id: &str) -> bool {
        self.view.active.as_deref() == Some(id)
    }

    /// Callback that scrolls to `id` when fired, whatever the event.
    pub fn go_to<E: 'static>(&self, id: &'static str) -> Callback<E> {
        let scroll_to = self.scroll_to.clone();
        Callback::from(move |_| scroll_to.emit(id.to_string()))
    }
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Keeps a [`ScrollTracker`] in sync with window scroll events.
#[hook]
pub fn use_section_tracker(
    registry: Rc<SectionRegistry<NodeRef>>,
    config: TrackerConfig,
) -> SectionNav {
    let tracker = use_mut_ref({
        let registry = registry.clone();
        move || ScrollTracker::new(registry, config)
    });
    let view = use_state_eq({
        let tracker = tracker.clone();
        move || tracker.borrow().view()
    });

    let entries = use_memo(
        |registry| {
            registry
                .entries()
                .map(|section| NavEntry {
                    id: section.id.clone(),
                    title: section.title.clone(),
                })
                .collect::<Vec<_>>()
        },
        registry,
    );

    {
        let tracker = tracker.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn FnMut()>::new({
                        let window = window.clone();
                        move || {
                            let scroll_y = window.scroll_y().unwrap_or_default();
                            let next = {
                                let mut tracker = tracker.borrow_mut();
                                if tracker.on_scroll(scroll_y) {
                                    debug!("Active section is now {:?}", tracker.active());
                                }
                                tracker.view()
                            };
                            view.set(next);
                        }
                    });

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not listen to scroll events; section tracking disabled");
                    }

                    // Initial check, the page may be restored mid-scroll
                    let _ = callback
                        .as_ref()
                        .unchecked_ref::<js_sys::Function>()
                        .call0(&JsValue::NULL);

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    debug!("No window available; section tracking stays on its initial state");
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let scroll_to = use_callback(
        move |id: String, _| {
            let target = tracker.borrow().scroll_target(&id);
            match target {
                Some(top) => smooth_scroll_to(top),
                None => debug!("Ignoring navigation to unknown section {}", id),
            }
        },
        (),
    );

    SectionNav {
        entries,
        view: (*view).clone(),
        scroll_to,
    }
}

#[hook]
pub fn use_section_nav() -> Option<SectionNav> {
    use_context::<SectionNav>()
}
