use portfolio_core::content::NAV_ITEMS;
use web_sys as web;

use crate::dom;

/// Smooth-scroll each nav link to its section instead of the default jump.
pub fn wire_nav_links(document: &web::Document) {
    for item in &NAV_ITEMS {
        let Some(link) = document.get_element_by_id(&format!("nav-{}", item.target)) else {
            continue;
        };
        let document = document.clone();
        let target = item.target;
        dom::add_click_listener(&link, move |ev| {
            ev.prevent_default();
            if let Some(section) = document.get_element_by_id(target) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
