use crate::render::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.frames += 1;
        self.scene.borrow_mut().tick();
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Stopping (or dropping) cancels the
/// pending frame and releases the closure.
pub struct FrameLoop {
    tick: TickClosure,
    raf_id: Rc<Cell<Option<i32>>>,
    ctx: Rc<RefCell<FrameContext>>,
}

impl FrameLoop {
    pub fn stop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped after {} frames", self.ctx.borrow().frames);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        schedule(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &raf_id);

    FrameLoop {
        tick,
        raf_id,
        ctx: frame_ctx,
    }
}

fn schedule(tick: &TickClosure, raf_id: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    // A stopped loop has no closure left to schedule.
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}
