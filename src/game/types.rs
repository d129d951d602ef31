//! Simulation data structures.

use crate::config::GameConfig;

/// Axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Overlap test. Rectangles that merely touch along an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether a world point falls inside this rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The player's bird. Horizontal position is fixed; only y and the
/// vertical velocity change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top edge of the bounding box, in world pixels.
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// A fresh bird, centered vertically on the screen.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            y: config.screen_height / 2.0 - config.bird_height / 2.0,
            velocity: 0.0,
        }
    }

    /// The bird's current bounding box.
    pub fn rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            config.bird_x - config.bird_width / 2.0,
            self.y,
            config.bird_width,
            config.bird_height,
        )
    }
}

/// A pipe pair: two rectangles sharing one x, derived from a single gap
/// position. The top half spans from the top of the screen down to
/// `gap_top`; the bottom half from `gap_top + gap` down to the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge, in world pixels.
    pub x: f64,
    /// Bottom edge of the top half; top edge of the gap.
    pub gap_top: f64,
}

impl Pipe {
    pub fn top_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, 0.0, config.pipe_width, self.gap_top)
    }

    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        let top = self.gap_top + config.pipe_gap;
        Rect::new(self.x, top, config.pipe_width, config.screen_height - top)
    }

    /// Whether the trailing edge has scrolled past the left screen boundary.
    pub fn off_screen(&self, config: &GameConfig) -> bool {
        self.x + config.pipe_width < 0.0
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Ground,
    Pipe,
}

/// One play attempt, from first tick to terminating collision.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first.
    pub pipes: Vec<Pipe>,
    /// Pipes cleared so far. Never decreases within a session.
    pub score: u32,
    /// Clock reading of the last pipe spawn; the spawn gate measures from
    /// here, independent of frame rate.
    pub last_spawn_ms: u64,
    /// `None` while the session is live.
    pub crash: Option<CrashCause>,
}

impl Session {
    /// A fresh session. `start_ms` seeds the spawn timer, so the first pipe
    /// arrives one full interval after the session starts.
    pub fn new(config: &GameConfig, start_ms: u64) -> Self {
        Self {
            bird: Bird::new(config),
            pipes: Vec::new(),
            score: 0,
            last_spawn_ms: start_ms,
            crash: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.crash.is_some()
    }
}
