//! Star field configuration and per-viewport defaults.

use crate::constants::*;
use crate::physics::PhysicsParams;
use crate::placement::{Rect, RegionPolicy, RegionSpec};
use fnv::FnvHashSet;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Compact,
    Regular,
}

impl ViewportClass {
    pub fn from_width(width_px: f64) -> Self {
        if width_px <= COMPACT_BREAKPOINT_PX {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("region `{0}` has an invalid minimum distance {1}")]
    InvalidMinDistance(String, f32),
    #[error("region `{0}` has an invalid band width {1}")]
    InvalidBand(String, f32),
    #[error("region key `{0}` appears more than once")]
    DuplicateRegion(String),
    #[error("max placement attempts must be at least 1")]
    ZeroAttempts,
    #[error("physics parameter `{0}` must be positive and finite")]
    InvalidPhysics(&'static str),
}

#[derive(Clone, Debug)]
pub struct StarFieldConfig {
    pub palette: Vec<String>,
    pub regions: Vec<RegionSpec>,
    pub max_attempts: u32,
    pub viewport: ViewportClass,
    pub physics: PhysicsParams,
}

impl StarFieldConfig {
    /// Default page layout: a header band that keeps the title clear and a
    /// pair of vertical margins.
    pub fn for_viewport(viewport: ViewportClass) -> Self {
        let (header_count, margin_count) = match viewport {
            ViewportClass::Compact => (2, 4),
            ViewportClass::Regular => (4, 8),
        };
        let [x0, y0, x1, y1] = HEADER_EXCLUSION;
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            regions: vec![
                RegionSpec {
                    key: "header-stars".into(),
                    policy: RegionPolicy::ExcludeCenter {
                        exclusion: Rect::new(x0, y0, x1, y1),
                    },
                    count: header_count,
                    min_distance: 100.0,
                },
                RegionSpec {
                    key: "margin-stars".into(),
                    policy: RegionPolicy::Margins {
                        band_width: MARGIN_BAND_WIDTH,
                    },
                    count: margin_count,
                    min_distance: 60.0,
                },
            ],
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            viewport,
            physics: PhysicsParams::default(),
        }
    }

    pub fn region(&self, key: &str) -> Option<&RegionSpec> {
        self.regions.iter().find(|r| r.key == key)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let mut seen = FnvHashSet::default();
        for r in &self.regions {
            if !r.min_distance.is_finite() || r.min_distance < 0.0 {
                return Err(ConfigError::InvalidMinDistance(r.key.clone(), r.min_distance));
            }
            if !r.policy.has_valid_band() {
                let band = r.policy.band().unwrap_or_default();
                return Err(ConfigError::InvalidBand(r.key.clone(), band));
            }
            if !seen.insert(r.key.as_str()) {
                return Err(ConfigError::DuplicateRegion(r.key.clone()));
            }
        }
        let p = &self.physics;
        for (name, v) in [
            ("interaction_radius", p.interaction_radius),
            ("force_scale", p.force_scale),
            ("return_speed", p.return_speed),
            ("damping", p.damping),
            ("rest_distance", p.rest_distance),
            ("rest_velocity", p.rest_velocity),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::InvalidPhysics(name));
            }
        }
        Ok(())
    }
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self::for_viewport(ViewportClass::Regular)
    }
}
