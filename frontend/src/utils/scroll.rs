use std::cell::RefCell;
use std::rc::Rc;

use ignite_core::{compute_scroll_state, ScrollConfig, ScrollState};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::dom;

/// Tracks the scroll-derived UI state.
///
/// One `scroll` and one `resize` listener are attached on mount and removed on
/// unmount. The returned state only changes when the computed state does.
#[hook]
pub fn use_scroll_state(config: Rc<ScrollConfig>) -> ScrollState {
    let state = use_state(ScrollState::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let latest = Rc::new(RefCell::new(ScrollState::default()));
                let tick = {
                    let latest = latest.clone();
                    move || {
                        let snapshot = dom::measure_layout(&config);
                        let previous = latest.borrow().active_section.clone();
                        let next = compute_scroll_state(&config, &snapshot, previous.as_deref());
                        if *latest.borrow() != next {
                            *latest.borrow_mut() = next.clone();
                            state.set(next);
                        }
                    }
                };
                let tick = Rc::new(tick);

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let tick = tick.clone();
                        move || tick()
                    });
                    for event in ["scroll", "resize"] {
                        let listener = callback.as_ref().unchecked_ref();
                        if let Err(e) = window.add_event_listener_with_callback(event, listener) {
                            log::error!("Failed to listen for {}: {:?}", event, e);
                        }
                    }
                    // Initial call
                    tick();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            for event in ["scroll", "resize"] {
                                let _ = win.remove_event_listener_with_callback(
                                    event,
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    (*state).clone()
}
