//! Views: the orb, the starfield, and the question field.

pub mod input;
pub mod orb;
pub mod starfield;

pub use orb::{OrbEvent, OrbWidget};
pub use starfield::StarfieldWidget;
