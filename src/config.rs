//! Game configuration.
//!
//! All tuning values live in one immutable struct, constructed once at
//! startup and passed by reference to the components that need it.

/// World and physics tuning. Coordinates are in world pixels; the UI layer
/// scales the world onto the terminal cell grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// World width in pixels.
    pub screen_width: f64,
    /// World height in pixels. The ground line sits at this y.
    pub screen_height: f64,

    // Physics (per simulation tick)
    /// Downward velocity gained each tick.
    pub gravity: f64,
    /// Velocity a flap resets the bird to (negative = upward).
    pub flap_impulse: f64,

    // Bird
    /// Fixed x of the bird's bounding-box center.
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,

    // Pipes
    /// Leftward scroll distance per tick.
    pub pipe_speed: f64,
    /// Vertical gap between a pipe's top and bottom halves.
    pub pipe_gap: f64,
    pub pipe_width: f64,
    /// Wall-clock interval between pipe spawns.
    pub pipe_interval_ms: u64,
    /// Minimum visible height of each pipe half; bounds the random gap placement.
    pub spawn_margin: f64,

    // Timing
    /// Simulation tick interval (~30 ticks per second).
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 400.0,
            screen_height: 600.0,

            gravity: 0.5,
            flap_impulse: -10.0,

            bird_x: 100.0,
            bird_width: 34.0,
            bird_height: 24.0,

            pipe_speed: 3.0,
            pipe_gap: 150.0,
            pipe_width: 70.0,
            pipe_interval_ms: 1500,
            spawn_margin: 100.0,

            tick_ms: 33,
        }
    }
}
