//! Terminal UI for the Mystic 8 magic 8-ball.
//!
//! Draws a question field, a clickable orb that shakes and reveals a fortune,
//! and an animated starfield behind everything, on the ratatui/crossterm stack.

pub mod app;
pub mod editor;
pub mod error;
pub mod logging;
pub mod shared;
pub mod terminal;
pub mod views;
