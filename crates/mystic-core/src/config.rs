//! Runtime configuration for a Mystic 8 session.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Slowest and fastest supported animation rates.
const FPS_RANGE: (u32, u32) = (1, 60);

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct OrbConfig {
    /// RNG seed for reproducible fortunes and starfields. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Animation frames per second (1-60).
    pub fps: u32,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self { seed: None, fps: 20 }
    }
}

impl OrbConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the frame rate (clamped to 1-60).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.clamp(FPS_RANGE.0, FPS_RANGE.1);
        self
    }

    /// Time between animation frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Build the random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = OrbConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.fps, 20);
        assert_eq!(cfg.frame_interval(), Duration::from_millis(50));
    }

    #[test]
    fn builder_methods() {
        let cfg = OrbConfig::default().with_seed(123).with_fps(30);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.fps, 30);
    }

    #[test]
    fn fps_clamped() {
        assert_eq!(OrbConfig::default().with_fps(0).fps, 1);
        assert_eq!(OrbConfig::default().with_fps(240).fps, 60);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = OrbConfig::default().with_seed(7);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
