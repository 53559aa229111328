//! Rejection-sampled placement of markers inside page regions.
//!
//! Positions are percentages of the region's container. Each region is one
//! placement pass: a candidate is accepted only if it keeps the minimum
//! separation from every marker already accepted in the same pass. Slots that
//! exhaust their attempts are dropped, so a pass may return fewer markers than
//! requested.

use crate::config::ViewportClass;
use crate::constants::*;
use crate::marker::{palette_color, Marker};
use crate::motion::MotionProfile;
use crate::physics::SpringBody;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Axis-aligned rectangle in percent units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Strict interior test; points on the border are outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionPolicy {
    /// Left and right vertical margins; slots alternate between the sides.
    Margins { band_width: f32 },
    /// Anywhere in the container except the exclusion rectangle.
    ExcludeCenter { exclusion: Rect },
    /// Biased toward the four edges, within `band` percent of each.
    PreferEdges { band: f32 },
}

impl RegionPolicy {
    /// Band width for banded policies, `None` for the others.
    pub fn band(&self) -> Option<f32> {
        match *self {
            RegionPolicy::Margins { band_width } => Some(band_width),
            RegionPolicy::PreferEdges { band } => Some(band),
            RegionPolicy::ExcludeCenter { .. } => None,
        }
    }

    /// Bands must be non-empty and no wider than half the container.
    pub fn has_valid_band(&self) -> bool {
        self.band().map_or(true, |b| b > 0.0 && b <= 50.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginSide {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegionSpec {
    /// Stable lookup key of the region's container.
    pub key: String,
    pub policy: RegionPolicy,
    pub count: usize,
    /// Minimum pairwise separation in virtual units (10 units = 1%).
    pub min_distance: f32,
}

impl RegionSpec {
    /// Upper bound on markers a pass over this region can produce.
    pub fn requested(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn min_separation(&self) -> f32 {
        self.min_distance / MIN_DISTANCE_UNIT_SCALE
    }
}

#[derive(Clone, Debug)]
pub struct Placement {
    pub markers: Vec<Marker>,
    pub next_index: usize,
    pub requested: usize,
}

impl Placement {
    pub fn skipped(&self) -> usize {
        self.requested - self.markers.len()
    }
}

/// Shared inputs of every placement pass on a page.
#[derive(Clone, Copy, Debug)]
pub struct PlacementEngine<'a> {
    pub palette: &'a [String],
    pub max_attempts: u32,
    pub viewport: ViewportClass,
}

#[derive(Clone, Copy)]
struct Slot {
    side: Option<MarginSide>,
    ordinal: usize,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(palette: &'a [String], max_attempts: u32, viewport: ViewportClass) -> Self {
        Self {
            palette,
            max_attempts,
            viewport,
        }
    }

    /// Run one placement pass over `spec`, numbering markers from `start_index`.
    pub fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        spec: &RegionSpec,
        start_index: usize,
    ) -> Placement {
        let requested = spec.requested();
        if self.palette.is_empty() || !spec.policy.has_valid_band() {
            log::warn!("[placement] region '{}' is not placeable; skipping", spec.key);
            return Placement {
                markers: Vec::new(),
                next_index: start_index,
                requested,
            };
        }

        let min_sep = spec.min_separation();
        let mut accepted: SmallVec<[Vec2; 16]> = SmallVec::new();
        let mut markers = Vec::with_capacity(requested);
        let mut index = start_index;

        for slot in slots(spec) {
            let mut found = None;
            for _ in 0..self.max_attempts {
                let Some(candidate) = candidate(rng, spec, slot) else {
                    continue;
                };
                if is_separated(candidate, &accepted, min_sep) {
                    found = Some(candidate);
                    break;
                }
            }
            let Some(position) = found else {
                continue;
            };
            accepted.push(position);
            let color = palette_color(self.palette, index).unwrap_or_default();
            markers.push(Marker {
                index,
                region: spec.key.clone(),
                position,
                color: color.to_string(),
                motion: MotionProfile::sample(rng, self.viewport),
                body: SpringBody::default(),
            });
            index += 1;
        }

        if markers.len() < requested {
            log::debug!(
                "[placement] region '{}' placed {}/{} markers",
                spec.key,
                markers.len(),
                requested
            );
        }

        Placement {
            markers,
            next_index: index,
            requested,
        }
    }
}

/// True if `candidate` keeps at least `min_sep` from every accepted position.
#[inline]
pub fn is_separated(candidate: Vec2, accepted: &[Vec2], min_sep: f32) -> bool {
    accepted.iter().all(|p| p.distance(candidate) >= min_sep)
}

fn slots(spec: &RegionSpec) -> Vec<Slot> {
    match spec.policy {
        RegionPolicy::Margins { .. } => (0..spec.count)
            .map(|i| Slot {
                side: Some(if i % 2 == 0 {
                    MarginSide::Left
                } else {
                    MarginSide::Right
                }),
                ordinal: i / 2,
            })
            .collect(),
        _ => (0..spec.count)
            .map(|ordinal| Slot {
                side: None,
                ordinal,
            })
            .collect(),
    }
}

/// Slots a margin side receives when `count` alternates left, right, left...
#[inline]
pub fn margin_side_count(count: usize, side: MarginSide) -> usize {
    match side {
        MarginSide::Left => (count + 1) / 2,
        MarginSide::Right => count / 2,
    }
}

fn candidate<R: Rng + ?Sized>(rng: &mut R, spec: &RegionSpec, slot: Slot) -> Option<Vec2> {
    match spec.policy {
        RegionPolicy::Margins { band_width } => {
            let side = slot.side.unwrap_or(MarginSide::Left);
            Some(margin_candidate(
                rng,
                band_width,
                side,
                slot.ordinal,
                margin_side_count(spec.count, side),
            ))
        }
        RegionPolicy::ExcludeCenter { exclusion } => {
            let p = Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
            (!exclusion.contains(p)).then_some(p)
        }
        RegionPolicy::PreferEdges { band } => Some(edge_candidate(rng, band)),
    }
}

/// Margin candidate: depth drawn from one of three bands measured from the
/// page edge, height evenly spaced by slot plus bounded jitter.
pub fn margin_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    band_width: f32,
    side: MarginSide,
    ordinal: usize,
    count: usize,
) -> Vec2 {
    let band = rng.gen_range(0..MARGIN_DEPTH_BANDS);
    let step = band_width / MARGIN_DEPTH_BANDS as f32;
    let lo = band as f32 * step;
    let hi = if band + 1 == MARGIN_DEPTH_BANDS {
        band_width
    } else {
        lo + step
    };
    let depth = rng.gen_range(lo..hi);
    let x = match side {
        MarginSide::Left => depth,
        // f32 rounding near the inner edge could land exactly on it
        MarginSide::Right => (100.0 - depth).max(100.0 - band_width + 1e-4),
    };

    let spacing = 100.0 / count.max(1) as f32;
    let jitter = spacing * MARGIN_JITTER_FRACTION;
    let y = (ordinal as f32 + 0.5) * spacing + rng.gen_range(-jitter..=jitter);
    Vec2::new(x, y.clamp(MARGIN_Y_MIN, MARGIN_Y_MAX))
}

fn edge_candidate<R: Rng + ?Sized>(rng: &mut R, band: f32) -> Vec2 {
    let across = rng.gen_range(0.0..100.0);
    let along = if rng.gen_bool(0.5) {
        rng.gen_range(0.0..band)
    } else {
        100.0 - band + rng.gen_range(0.0..band)
    };
    if rng.gen_bool(0.5) {
        // top or bottom band
        Vec2::new(across, along)
    } else {
        Vec2::new(along, across)
    }
}
