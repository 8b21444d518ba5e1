//! Mounts the particle backdrop: canvas acquisition, input wiring, and the
//! frame loop, plus a handle for hosts that need to tear it all down again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_core::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::BACKDROP_CANVAS_ID;
use crate::dom;
use crate::frame::{self, FrameContext};
use crate::render::CanvasPainter;

/// Owns the backdrop's listeners and loop controls.
///
/// Either `detach` (full teardown) or `forget` (page-lifetime backdrop) must
/// be called; silently dropping the handle would unhook the listeners while
/// they are still registered.
pub struct BackdropHandle {
    resize: Closure<dyn FnMut()>,
    pointer: Closure<dyn FnMut(web::PointerEvent)>,
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
}

pub fn mount(document: &web::Document) -> anyhow::Result<BackdropHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(BACKDROP_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{BACKDROP_CANVAS_ID}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

    // A missing 2D context is the one fatal precondition: bail before any
    // frame is scheduled.
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{BACKDROP_CANVAS_ID}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

    let (width, height) = dom::viewport_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(width, height, seed)));

    // Resize adopts the new viewport and rebuilds the whole field.
    let resize = {
        let field = field.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                let (width, height) = dom::viewport_size(&w);
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                field.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .ok();

    let pointer = {
        let field = field.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            field
                .borrow_mut()
                .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("pointermove", pointer.as_ref().unchecked_ref())
        .ok();

    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field,
        painter: CanvasPainter::new(ctx),
    }));
    frame::start_loop(frame_ctx, running.clone(), raf_id.clone());

    log::info!("backdrop mounted: {width}x{height}");
    Ok(BackdropHandle {
        resize,
        pointer,
        running,
        raf_id,
    })
}

impl BackdropHandle {
    /// Stop the frame loop and unhook both listeners. After this returns no
    /// further frame callback runs and the closures are dropped.
    pub fn detach(self) {
        self.running.set(false);
        if let Some(w) = web::window() {
            w.cancel_animation_frame(self.raf_id.get()).ok();
            let _ = w.remove_event_listener_with_callback(
                "resize",
                self.resize.as_ref().unchecked_ref(),
            );
            let _ = w.remove_event_listener_with_callback(
                "pointermove",
                self.pointer.as_ref().unchecked_ref(),
            );
        }
    }

    /// Keep the backdrop alive for the rest of the page's lifetime.
    pub fn forget(self) {
        self.resize.forget();
        self.pointer.forget();
    }
}
