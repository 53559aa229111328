use crate::dom::{self, Listener};
use crate::input::{tracking_change, TrackingChange};
use crate::render::Scene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The pointer listener, present only while the device can hover.
pub type PointerSlot = Rc<RefCell<Option<Listener>>>;

/// Push stars away from the pointer.
pub fn wire_pointermove(scene: Rc<RefCell<Scene>>) -> Option<Listener> {
    Listener::on_window("pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        scene.borrow_mut().pointer_moved(pointer);
    })
}

/// Add or drop the pointer listener to match the current hover capability.
/// On touch-only devices the frame loop still runs but never has anything to
/// move.
pub fn sync_pointer_tracking(slot: &PointerSlot, scene: &Rc<RefCell<Scene>>) {
    let wired = slot.borrow().is_some();
    match tracking_change(wired, dom::supports_hover()) {
        TrackingChange::Wire => {
            log::info!("[pointer] hover available; star repulsion enabled");
            *slot.borrow_mut() = wire_pointermove(scene.clone());
        }
        TrackingChange::Unwire => {
            log::info!("[pointer] touch-only device; star repulsion disabled");
            slot.borrow_mut().take();
        }
        TrackingChange::Keep => {}
    }
}
