// DOM contract and front-end tuning.

pub const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";

// Backdrop painting
pub const TRAIL_FILL: &str = "rgba(2, 6, 23, 0.3)"; // translucent wash leaves motion trails
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;

// Navbar and reveal behavior
pub const NAV_SOLID_OFFSET: f64 = 50.0; // px scrolled before the navbar gains its backdrop
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9; // section top must rise above this line to reveal
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";

// Simulated contact submission timing (ms)
pub const SUBMIT_LATENCY_MS: i32 = 1_000;
pub const STATUS_CLEAR_MS: i32 = 5_000;
