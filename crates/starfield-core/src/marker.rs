use crate::motion::MotionProfile;
use crate::physics::SpringBody;
use glam::Vec2;

/// One decorative star.
///
/// `position` is the rest position in percent of the owning container and never
/// changes after placement; pointer interaction only moves `body.offset`.
#[derive(Clone, Debug)]
pub struct Marker {
    pub index: usize,
    pub region: String,
    pub position: Vec2,
    pub color: String,
    pub motion: MotionProfile,
    pub body: SpringBody,
}

impl Marker {
    #[inline]
    pub fn is_displaced(&self) -> bool {
        self.body.displaced
    }
}

/// Color for the marker with global `index`, cycling through the palette.
#[inline]
pub fn palette_color(palette: &[String], index: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()].as_str())
}
