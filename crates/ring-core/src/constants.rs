// Shared tuning constants for ring generation, motion and drawing.

// Particle count control
pub const MIN_PARTICLES: usize = 16;
pub const MAX_PARTICLES: usize = 8000;
pub const DEFAULT_PARTICLES: usize = 1200;

// Dot appearance defaults
pub const DEFAULT_DOT_SIZE: f32 = 0.9;
pub const DEFAULT_DOT_COLOR: &str = "#ff66a3";

// Ring shape
pub const RING_RADIUS_FRACTION: f32 = 0.22; // major radius relative to min(width, height)
pub const RING_THICKNESS: f32 = 0.08; // tube thickness used by the widget
pub const DEFAULT_GENERATOR_THICKNESS: f32 = 0.06;
pub const DEFAULT_GENERATOR_RADIUS: f32 = 180.0;
pub const JITTER_FRACTION: f32 = 0.5; // share of the angular step used for jitter

// Rotation
pub const INITIAL_ROTATION: [f32; 2] = [0.35, 0.4]; // [around X, around Y]
pub const ROTATION_SMOOTHING: f32 = 0.08; // fraction of remaining distance per frame
pub const DRAG_SENSITIVITY: f32 = 0.007; // radians per CSS pixel

// Projection
pub const FOV_FACTOR: f32 = 1.1; // fov = FOV_FACTOR * max(width, height)
pub const DOT_RADIUS_MIN: f32 = 0.12;
pub const DOT_RADIUS_SCALE: f32 = 0.9;
pub const ALPHA_BASE: f32 = 0.15;
pub const ALPHA_SCALE_OFFSET: f32 = 0.06;
pub const ALPHA_MAX: f32 = 0.95;
