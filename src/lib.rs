#![cfg(target_arch = "wasm32")]
use starfield_core::{StarField, StarFieldConfig, ViewportClass};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod render;

/// Everything one live star field needs: the scene, its frame loop and the
/// listeners feeding it. Dropping the handle tears all of it down.
struct StarFieldHandle {
    scene: Rc<RefCell<render::Scene>>,
    frame_loop: frame::FrameLoop,
    _pointer: events::PointerSlot,
    _resize: Option<dom::Listener>,
}

impl StarFieldHandle {
    fn create() -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let width = dom::viewport_width().ok_or_else(|| anyhow::anyhow!("no viewport width"))?;
        let viewport = ViewportClass::from_width(width);
        let field = StarField::new(StarFieldConfig::for_viewport(viewport))?;

        let mut scene = render::Scene::new(document, field);
        let placed = scene.populate();
        log::info!("[stars] {:?} viewport ({}px): {} markers", viewport, width, placed);

        let scene = Rc::new(RefCell::new(scene));
        let pointer = events::PointerSlot::default();
        events::sync_pointer_tracking(&pointer, &scene);
        let resize = events::wire_resize(scene.clone(), pointer.clone());
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            scene: scene.clone(),
            frames: 0,
        }));
        let frame_loop = frame::start_loop(frame_ctx);

        Ok(Self {
            scene,
            frame_loop,
            _pointer: pointer,
            _resize: resize,
        })
    }

    fn regenerate(&self) -> anyhow::Result<usize> {
        self.scene.borrow_mut().regenerate(None)
    }

    fn stop(mut self) {
        self.frame_loop.stop();
        self.scene.borrow_mut().remove_elements();
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<StarFieldHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    if let Err(e) = generate_stars() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Lay the stars out (again). Reuses the running field when there is one.
#[wasm_bindgen(js_name = generateStars)]
pub fn generate_stars() -> Result<u32, JsValue> {
    ACTIVE
        .with(|active| {
            let mut active = active.borrow_mut();
            if let Some(handle) = active.as_ref() {
                return handle.regenerate();
            }
            let handle = StarFieldHandle::create()?;
            let count = handle.scene.borrow().marker_count();
            *active = Some(handle);
            Ok(count)
        })
        .map(|n| n as u32)
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Stop the simulation, detach listeners and remove every star from the page.
#[wasm_bindgen(js_name = stopStars)]
pub fn stop_stars() {
    if let Some(handle) = ACTIVE.with(|active| active.borrow_mut().take()) {
        handle.stop();
    }
}

#[wasm_bindgen(js_name = markerCount)]
pub fn marker_count() -> u32 {
    ACTIVE.with(|active| {
        active
            .borrow()
            .as_ref()
            .map(|h| h.scene.borrow().marker_count() as u32)
            .unwrap_or(0)
    })
}
