//! Core simulation: bird physics, pipe spawning/recycling, collision.
//!
//! Everything in here is headless. The UI layer reads the [`Session`] to
//! draw a frame; the driver feeds it inputs and a monotonic millisecond
//! clock.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
