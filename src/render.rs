use crate::constants::FLOAT_LAYER_CLASS;
use crate::dom;
use crate::markup;
use fnv::FnvHashMap;
use glam::Vec2;
use starfield_core::{Marker, StarField, StarFieldConfig, KEYFRAMES_CSS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rendered elements of one marker. The physics offset goes on `outer`; the
/// float animation moves `float_layer`, so that is where the star is drawn.
struct StarElements {
    outer: web::HtmlElement,
    float_layer: web::Element,
}

/// A star field together with the DOM elements that render it.
pub struct Scene {
    pub field: StarField,
    document: web::Document,
    elements: FnvHashMap<usize, StarElements>,
}

impl Scene {
    pub fn new(document: web::Document, field: StarField) -> Self {
        dom::ensure_keyframes(&document, KEYFRAMES_CSS);
        Self {
            field,
            document,
            elements: FnvHashMap::default(),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.field.len()
    }

    /// Place and render every configured region that exists in the page.
    pub fn populate(&mut self) -> usize {
        let keys: Vec<String> = self
            .field
            .config()
            .regions
            .iter()
            .map(|r| r.key.clone())
            .collect();
        for key in keys {
            let Some(container) = dom::region_container(&self.document, &key) else {
                log::debug!("[stars] no container for region '{}'", key);
                continue;
            };
            container.set_inner_html("");
            let Some(markers) = self.field.populate(&key) else {
                continue;
            };
            for marker in markers {
                match create_star(&self.document, marker) {
                    Ok(star) => {
                        _ = container.append_child(&star.outer);
                        self.elements.insert(marker.index, star);
                    }
                    Err(e) => log::warn!("[stars] marker {} not rendered: {:?}", marker.index, e),
                }
            }
            log::debug!("[stars] region '{}' -> {} markers", key, markers.len());
        }
        self.marker_count()
    }

    /// Remove everything and lay the field out again, optionally with a new
    /// configuration.
    pub fn regenerate(&mut self, config: Option<StarFieldConfig>) -> anyhow::Result<usize> {
        self.remove_elements();
        match config {
            Some(c) => self.field.reconfigure(c)?,
            None => self.field.clear(),
        }
        Ok(self.populate())
    }

    pub fn pointer_moved(&mut self, pointer: Vec2) -> usize {
        let elements = &self.elements;
        self.field.pointer_moved(pointer, |m| {
            elements
                .get(&m.index)
                .map(|star| dom::element_center(&star.float_layer))
        })
    }

    pub fn tick(&mut self) {
        let elements = &self.elements;
        self.field.tick_with(|m| {
            if let Some(star) = elements.get(&m.index) {
                apply_offset(&star.outer, m.body.offset);
            }
        });
    }

    pub fn remove_elements(&mut self) {
        for star in self.elements.values() {
            star.outer.remove();
        }
        self.elements.clear();
    }
}

fn create_star(document: &web::Document, marker: &Marker) -> anyhow::Result<StarElements> {
    let outer = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    outer.set_class_name(&markup::marker_class(marker.index));
    _ = outer.set_attribute("style", &markup::marker_style(marker));

    let float_layer = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    float_layer.set_class_name(FLOAT_LAYER_CLASS);
    _ = float_layer.set_attribute("style", &markup::float_layer_style(marker));
    float_layer.set_inner_html(&markup::star_svg(marker));
    _ = outer.append_child(&float_layer);

    let outer = outer
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(StarElements { outer, float_layer })
}

#[inline]
fn apply_offset(el: &web::HtmlElement, offset: Vec2) {
    _ = el
        .style()
        .set_property("transform", &markup::offset_transform(offset));
}
