use ignite_core::scroll::SectionBounds;
use ignite_core::{LayoutSnapshot, ScrollConfig};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

pub const HERO_BACKGROUND_ID: &str = "heroBackground";
pub const NAVBAR_ID: &str = "navbar";
pub const SCHEDULE_OVERLAY_SELECTOR: &str = ".schedule-gradient-overlay";

pub fn by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn exists(selector: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(selector).ok().flatten())
        .is_some()
}

fn bounds(id: &str) -> Option<SectionBounds> {
    by_id(id).map(|element| {
        SectionBounds::new(
            id,
            element.offset_top() as f64,
            element.offset_height() as f64,
        )
    })
}

/// Measures everything the scroll mapper looks at. Missing elements are
/// simply left out of the snapshot.
pub fn measure_layout(config: &ScrollConfig) -> LayoutSnapshot {
    let Some(window) = web_sys::window() else {
        return LayoutSnapshot::default();
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);

    let sections = config
        .section_ids
        .iter()
        .filter_map(|id| bounds(id))
        .collect();

    let schedule = if exists(SCHEDULE_OVERLAY_SELECTOR) {
        bounds("schedule")
    } else {
        None
    };

    LayoutSnapshot {
        scroll_y,
        viewport_height,
        sections,
        hero_present: by_id(HERO_BACKGROUND_ID).is_some(),
        about_top: by_id("about").map(|about| about.offset_top() as f64),
        schedule,
        navbar_present: by_id(NAVBAR_ID).is_some(),
    }
}

/// Smoothly scrolls `id` to the top of the viewport. No-op when absent.
pub fn scroll_to_section(id: &str) {
    if let Some(target) = by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::debug!("No section #{} to scroll to", id);
    }
}

/// Click handler for in-page links.
pub fn scroll_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

/// Adds or removes a class on `<body>`, which lives outside the Yew tree.
pub fn set_body_class(class: &str, on: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        if let Err(e) = body.class_list().toggle_with_force(class, on) {
            log::warn!("Failed to toggle body class {}: {:?}", class, e);
        }
    }
}
