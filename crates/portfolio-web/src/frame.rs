use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_core::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasPainter;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub painter: CanvasPainter,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.step();
        self.painter.paint(&field);
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `running` goes false.
/// The id of the most recent request lands in `raf_id` so teardown can
/// cancel the pending frame.
pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
}
