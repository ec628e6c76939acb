use std::cell::Cell;
use std::rc::Rc;

use ignite_core::reveal::{next_visibility, RevealOptions};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Whether the element behind `node` has scrolled into view.
///
/// Each element gets its own observer, disconnected on unmount.
#[hook]
pub fn use_in_view(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node| {
                let shown = Rc::new(Cell::new(false));
                let observer = node.cast::<Element>().and_then(|element| {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                        let options = options.clone();
                        let revealed = revealed.clone();
                        let shown = shown.clone();
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                let next = next_visibility(
                                    shown.get(),
                                    entry.is_intersecting(),
                                    entry.intersection_ratio(),
                                    &options,
                                );
                                if next != shown.get() {
                                    shown.set(next);
                                    revealed.set(next);
                                }
                                if next && options.once {
                                    observer.unobserve(&entry.target());
                                }
                            }
                        }
                    });

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(options.threshold));
                    init.set_root_margin(&options.root_margin);
                    let created = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    );
                    match created {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            revealed.set(true);
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *revealed
}
