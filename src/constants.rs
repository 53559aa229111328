/// DOM presentation constants for rendered stars.
///
/// Layout and physics tuning lives in `starfield_core::constants`; this file
/// only covers how a marker looks once it is in the page.
// Marker element box
pub const STAR_SIZE_PX: u32 = 40;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_Z_INDEX: i32 = -10; // behind page content

// Star icon
pub const STAR_VIEWBOX: &str = "0 0 24 24";
pub const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
pub const STAR_STROKE: &str = "#000";
pub const STAR_STROKE_WIDTH: f32 = 1.5;

// Class names
pub const MARKER_CLASS: &str = "decoration generated-star";
pub const FLOAT_LAYER_CLASS: &str = "generated-star-float";

// Single <style> element holding the shared keyframes
pub const KEYFRAMES_STYLE_ID: &str = "starfield-keyframes";

// Pointer tracking is only wired when the primary input can hover
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover)";
