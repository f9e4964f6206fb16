use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ErrorEvent, PromiseRejectionEvent};
use yew::prelude::*;

const UNKNOWN_ERROR: &str = "未知错误";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryAction {
    Capture(String),
    Reset,
}

impl BoundaryState {
    /// The latest capture is the message on screen.
    pub fn apply(&self, action: BoundaryAction) -> BoundaryState {
        match action {
            BoundaryAction::Capture(message) => BoundaryState::Failed { message },
            BoundaryAction::Reset => BoundaryState::Healthy,
        }
    }
}

impl Reducible for BoundaryState {
    type Action = BoundaryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Scroll position when the page first failed, put back after a soft reset.
#[derive(Debug, Default)]
pub struct ScrollMemo(Option<f64>);

impl ScrollMemo {
    /// Later captures happen over the failure screen, so only the first counts.
    pub fn remember(&mut self, scroll_y: f64) {
        self.0.get_or_insert(scroll_y);
    }

    pub fn take(&mut self) -> Option<f64> {
        self.0.take()
    }
}

/// Message shown to the visitor; blank messages become a generic label.
pub fn describe(message: Option<String>) -> String {
    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

fn rejection_message(reason: &JsValue) -> Option<String> {
    match reason.dyn_ref::<js_sys::Error>() {
        Some(err) => Some(String::from(err.message())),
        None => reason.as_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_reducer(BoundaryState::default);
    let memo = use_mut_ref(ScrollMemo::default);

    {
        let dispatcher = state.dispatcher();
        let memo = memo.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_error = Closure::<dyn FnMut(ErrorEvent)>::new({
                        let dispatcher = dispatcher.clone();
                        let memo = memo.clone();
                        let window = window.clone();
                        move |event: ErrorEvent| {
                            event.prevent_default();
                            memo.borrow_mut().remember(window.scroll_y().unwrap_or_default());
                            let message = describe(Some(event.message()));
                            error!("Uncaught error: {}", message);
                            dispatcher.dispatch(BoundaryAction::Capture(message));
                        }
                    });
                    let on_rejection = Closure::<dyn FnMut(PromiseRejectionEvent)>::new({
                        let window = window.clone();
                        move |event: PromiseRejectionEvent| {
                            event.prevent_default();
                            memo.borrow_mut().remember(window.scroll_y().unwrap_or_default());
                            let message = describe(rejection_message(&event.reason()));
                            error!("Unhandled rejection: {}", message);
                            dispatcher.dispatch(BoundaryAction::Capture(message));
                        }
                    });

                    if window
                        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Error boundary could not listen to error events");
                    }
                    if window
                        .add_event_listener_with_callback(
                            "unhandledrejection",
                            on_rejection.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Error boundary could not listen to unhandled rejections");
                    }

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "error",
                            on_error.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "unhandledrejection",
                            on_rejection.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    match &*state {
        BoundaryState::Healthy => html! { <>{ for props.children.iter() }</> },
        BoundaryState::Failed { message } => {
            let retry = {
                let state = state.clone();
                let memo = memo.clone();
                Callback::from(move |_: MouseEvent| {
                    info!("Retrying after error");
                    state.dispatch(BoundaryAction::Reset);
                    let memo = memo.clone();
                    // Wait for the children to mount before scrolling back
                    Timeout::new(0, move || {
                        let resume = memo.borrow_mut().take();
                        if let (Some(scroll_y), Some(window)) = (resume, web_sys::window()) {
                            debug!("Restoring scroll position {}", scroll_y);
                            window.scroll_to_with_x_and_y(0.0, scroll_y);
                        }
                    })
                    .forget();
                })
            };
            let reload = Callback::from(|_: MouseEvent| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });

            html! {
                <div class="fixed inset-0 flex items-center justify-center bg-gray-900/90 z-50 p-4">
                    <div class="bg-gray-800 rounded-xl p-6 max-w-md w-full shadow-2xl border border-gray-700">
                        <div class="text-center">
                            <i class="fa-solid fa-exclamation-circle text-red-500 text-5xl mb-4"></i>
                            <h2 class="text-2xl font-bold mb-2 text-white">{"页面加载过程中遇到问题"}</h2>
                            <p class="text-red-400 mb-4 break-words">{ message.clone() }</p>
                            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                                <button
                                    class="px-6 py-2 bg-blue-600 hover:bg-blue-700 rounded-full transition-colors text-white font-medium"
                                    onclick={retry}
                                >
                                    {"重试"}
                                </button>
                                <button
                                    class="px-6 py-2 bg-gray-700 hover:bg-gray-600 rounded-full transition-colors text-white font-medium"
                                    onclick={reload}
                                >
                                    {"刷新页面"}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_capture_is_shown_and_reset_recovers() {
        let state = BoundaryState::default();
        assert_eq!(state, BoundaryState::Healthy);

        let failed = state.apply(BoundaryAction::Capture("boom".into()));
        assert_eq!(failed, BoundaryState::Failed { message: "boom".into() });

        let again = failed.apply(BoundaryAction::Capture("second".into()));
        assert_eq!(again, BoundaryState::Failed { message: "second".into() });

        assert_eq!(again.apply(BoundaryAction::Reset), BoundaryState::Healthy);
    }

    #[test]
    fn reset_while_healthy_is_a_no_op() {
        let state = Rc::new(BoundaryState::Healthy);
        let next = state.clone().reduce(BoundaryAction::Reset);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_follows_apply() {
        let state = Rc::new(BoundaryState::Healthy);
        let failed = state.reduce(BoundaryAction::Capture("x".into()));
        assert!(matches!(*failed, BoundaryState::Failed { .. }));
        let healthy = failed.reduce(BoundaryAction::Reset);
        assert_eq!(*healthy, BoundaryState::Healthy);
    }

    #[test]
    fn scroll_memo_keeps_the_position_before_the_first_failure() {
        let mut memo = ScrollMemo::default();
        memo.remember(1200.0);
        memo.remember(0.0);
        assert_eq!(memo.take(), Some(1200.0));
        assert_eq!(memo.take(), None);

        memo.remember(300.0);
        assert_eq!(memo.take(), Some(300.0));
    }

    #[test]
    fn blank_messages_get_a_label() {
        assert_eq!(describe(None), UNKNOWN_ERROR);
        assert_eq!(describe(Some("   ".into())), UNKNOWN_ERROR);
        assert_eq!(describe(Some(" oops ".into())), "oops");
    }
}
