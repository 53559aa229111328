// Shared placement/physics tuning constants used by the web frontend.

// Spring physics (per marker)
pub const RETURN_SPEED: f32 = 0.08; // spring stiffness toward rest
pub const DAMPING: f32 = 0.95; // velocity decay per tick

// Pointer interaction
pub const INTERACTION_RADIUS_PX: f32 = 30.0;
pub const FORCE_SCALE: f32 = 0.5;

// Snap-to-rest thresholds
pub const REST_DISTANCE_EPSILON: f32 = 0.5; // offset length, px
pub const REST_VELOCITY_EPSILON: f32 = 0.01; // per component, px/tick

// Placement
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;
// Separation distances are authored in virtual units; positions are percentages.
pub const MIN_DISTANCE_UNIT_SCALE: f32 = 10.0;
pub const MARGIN_BAND_WIDTH: f32 = 20.0; // percent of container width
pub const MARGIN_DEPTH_BANDS: u32 = 3; // near edge, mid, far
pub const MARGIN_JITTER_FRACTION: f32 = 0.35; // of the vertical slot spacing
pub const MARGIN_Y_MIN: f32 = 2.0;
pub const MARGIN_Y_MAX: f32 = 98.0;
pub const EDGE_BAND_WIDTH: f32 = 20.0;

// Header band keeps the title area clear
pub const HEADER_EXCLUSION: [f32; 4] = [25.0, 30.0, 75.0, 70.0]; // min x, min y, max x, max y

// Ambient motion periods (seconds)
pub const FLOAT_PERIOD_REGULAR: (f32, f32) = (5.0, 9.0);
pub const FLOAT_PERIOD_COMPACT: (f32, f32) = (3.0, 5.0);
pub const SPIN_PERIOD: (f32, f32) = (8.0, 20.0);

// Viewports at or below this width use the compact layout
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

pub const DEFAULT_PALETTE: [&str; 4] = ["#FFD700", "#4ECDC4", "#FF6B6B", "#95E1D3"];
