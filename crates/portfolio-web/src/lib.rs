#![cfg(target_arch = "wasm32")]

mod backdrop;
mod constants;
mod contact_form;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    ui::build(&document)?;
    events::wire_nav_links(&document);
    events::wire_scroll_effects(&document);
    contact_form::wire(&document)?;

    // The page owns exactly one backdrop for its whole lifetime; the handle
    // only matters to hosts that mount and unmount.
    backdrop::mount(&document)?.forget();
    Ok(())
}
