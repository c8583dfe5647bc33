//! Core model for the Mystic 8 magic 8-ball.
//!
//! Provides the fixed fortune table, the session controller that drives a
//! reveal cycle (trigger, shake delay, fortune), and the randomized starfield
//! descriptors the terminal view animates.

pub mod config;
pub mod fortune;
pub mod session;
pub mod starfield;

pub use config::OrbConfig;
pub use fortune::{FORTUNES, Sentiment};
pub use session::{
    IgnoreReason, Phase, REVEAL_DELAY, SessionController, SessionState, TriggerOutcome,
};
pub use starfield::{ColorBucket, Particle, ParticleKind, Starfield};
