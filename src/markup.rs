// Inline style and SVG markup for a marker element. Pure string building so
// it can be exercised on the host.
use super::constants::*;
use glam::Vec2;
use starfield_core::Marker;

#[inline]
pub fn marker_class(index: usize) -> String {
    format!("{} star-{}", MARKER_CLASS, index)
}

/// Outer layer: rest position plus box styling. The physics offset is applied
/// separately as a `transform` on this same element.
pub fn marker_style(marker: &Marker) -> String {
    format!(
        "position:absolute;left:{:.3}%;top:{:.3}%;width:{}px;height:{}px;opacity:{};pointer-events:none;z-index:{};will-change:transform;",
        marker.position.x, marker.position.y, STAR_SIZE_PX, STAR_SIZE_PX, STAR_OPACITY, STAR_Z_INDEX
    )
}

/// Middle layer: vertical float.
pub fn float_layer_style(marker: &Marker) -> String {
    format!(
        "width:100%;height:100%;animation:{};",
        marker.motion.float_animation()
    )
}

/// Inner layer: the icon itself, spinning.
pub fn star_svg(marker: &Marker) -> String {
    format!(
        "<svg viewBox=\"{}\" style=\"width:100%;height:100%;display:block;animation:{};\"><path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/></svg>",
        STAR_VIEWBOX,
        marker.motion.spin_animation(),
        STAR_PATH,
        marker.color,
        STAR_STROKE,
        STAR_STROKE_WIDTH
    )
}

pub fn offset_transform(offset: Vec2) -> String {
    if offset == Vec2::ZERO {
        return "none".to_string();
    }
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}
