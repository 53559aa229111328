use crate::constants::{HOVER_MEDIA_QUERY, KEYFRAMES_STYLE_ID};
use crate::input;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_width() -> Option<f64> {
    web::window()?.inner_width().ok()?.as_f64()
}

/// False on touch-only devices, where pointer-proximity effects are skipped.
pub fn supports_hover() -> bool {
    web::window()
        .and_then(|w| w.match_media(HOVER_MEDIA_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[inline]
pub fn region_container(document: &web::Document, key: &str) -> Option<web::Element> {
    document.query_selector(&format!(".{}", key)).ok().flatten()
}

/// Inject the shared keyframe rules once per document.
pub fn ensure_keyframes(document: &web::Document, css: &str) {
    if document.get_element_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("[dom] no <head>; star animations disabled");
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(KEYFRAMES_STYLE_ID);
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }
}

/// Center of the element's current rendered box, in viewport pixels.
#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    input::rect_center(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let window = web::window()?;
        let target: web::EventTarget = window.into();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
