//! Window scroll wiring: the navbar's solid treatment and one-shot section
//! reveals ride the same listener.

use portfolio_core::content::NAV_ITEMS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{NAV_SOLID_OFFSET, REVEAL_VIEWPORT_FRACTION, SCROLLED_CLASS, VISIBLE_CLASS};

pub fn wire_scroll_effects(document: &web::Document) {
    {
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            apply_scroll_state(&document);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            let _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    // Sections already in view reveal without waiting for the first scroll.
    apply_scroll_state(document);
}

fn apply_scroll_state(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };

    let scrolled = window.scroll_y().unwrap_or(0.0) > NAV_SOLID_OFFSET;
    if let Some(nav) = document.get_element_by_id("navbar") {
        let classes = nav.class_list();
        if scrolled {
            let _ = classes.add_1(SCROLLED_CLASS);
        } else {
            let _ = classes.remove_1(SCROLLED_CLASS);
        }
    }

    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let reveal_line = viewport_h * REVEAL_VIEWPORT_FRACTION;
    for item in &NAV_ITEMS {
        let Some(section) = document.get_element_by_id(item.target) else {
            continue;
        };
        let classes = section.class_list();
        // One-shot: a revealed section never hides again.
        if classes.contains(VISIBLE_CLASS) {
            continue;
        }
        if section.get_bounding_client_rect().top() < reveal_line {
            let _ = classes.add_1(VISIBLE_CLASS);
        }
    }
}
