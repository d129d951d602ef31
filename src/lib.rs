//! Skyward - Terminal Flappy Bird
//!
//! This module exposes the game logic for testing and external use.
//! The binary drives it against a real terminal.

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod scores;

// UI is tightly coupled to the terminal; exposed so the binary can draw.
pub mod ui;
