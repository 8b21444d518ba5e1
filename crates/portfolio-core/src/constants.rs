// Tuning constants for the particle backdrop simulation.

// Population
pub const AREA_PER_PARTICLE: f32 = 15_000.0; // one particle per this many px² of surface

// Creation ranges
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_SPAN: f32 = 3.0; // radii land in [1, 4)
pub const SPEED_SPAN: f32 = 1.0; // velocity components land in [-0.5, 0.5)
pub const BASE_HUE_MIN: f32 = 210.0;
pub const BASE_HUE_SPAN: f32 = 40.0; // idle hues sit in a narrow blue band
pub const BASE_LIGHTNESS: f32 = 40.0;
pub const EXCITED_LIGHTNESS: f32 = 50.0;
pub const PARTICLE_ALPHA: f32 = 0.8;

// Per-tick dynamics
pub const HUE_STEP: f32 = 0.5; // shared excited-hue advance per frame, wraps at 360
pub const POINTER_RADIUS: f32 = 100.0; // interaction radius around the pointer
pub const REPULSION_DIVISOR: f32 = 10.0;
pub const REPULSION_SCALE: f32 = 0.01;
pub const VELOCITY_DAMPING: f32 = 0.98;

// Pairwise connection pass
pub const CONNECT_RADIUS: f32 = 150.0;
pub const CONNECT_MAX_OPACITY: f32 = 0.5;
