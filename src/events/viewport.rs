use super::pointer::{sync_pointer_tracking, PointerSlot};
use crate::dom::{self, Listener};
use crate::render::Scene;
use starfield_core::{StarFieldConfig, ViewportClass};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Regenerate the field when the viewport crosses the compact breakpoint, and
/// recheck hover support so pointer tracking follows the device.
pub fn wire_resize(scene: Rc<RefCell<Scene>>, pointer: PointerSlot) -> Option<Listener> {
    Listener::on_window("resize", move |_: web::Event| {
        sync_pointer_tracking(&pointer, &scene);
        let Some(width) = dom::viewport_width() else {
            return;
        };
        let class = ViewportClass::from_width(width);
        let mut scene = scene.borrow_mut();
        if scene.field.config().viewport == class {
            return;
        }
        log::info!("[viewport] class changed to {:?}; regenerating stars", class);
        if let Err(e) = scene.regenerate(Some(StarFieldConfig::for_viewport(class))) {
            log::error!("regenerate error: {:?}", e);
        }
    })
}
