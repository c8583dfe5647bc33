//! Decorative starfield descriptors.
//!
//! A starfield is 100 small twinkling stars at random positions plus 5 large
//! orbs at fixed positions that drift slowly. The set is generated once and
//! never changes; animation is a pure function of elapsed time.

use rand::Rng;

/// Number of small stars.
pub const STAR_COUNT: usize = 100;

/// Number of large floating orbs.
pub const ORB_COUNT: usize = 5;

/// Float keyframes as (x, y) pixel offsets at 0%, 25%, 50%, 75%, 100%.
const FLOAT_KEYFRAMES: [(f32, f32); 5] = [
    (0.0, 0.0),
    (10.0, -20.0),
    (-10.0, -10.0),
    (5.0, -30.0),
    (0.0, 0.0),
];

/// Lowest opacity in the twinkle cycle.
const TWINKLE_MIN: f32 = 0.2;

/// Which of the three tints a particle uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBucket {
    /// Violet glow.
    Purple,
    /// Cyan glow.
    Cyan,
    /// Plain white.
    White,
}

impl ColorBucket {
    /// Bucket for the particle with the given id (`id mod 3`).
    pub fn from_index(id: usize) -> ColorBucket {
        match id % 3 {
            0 => ColorBucket::Purple,
            1 => ColorBucket::Cyan,
            _ => ColorBucket::White,
        }
    }
}

/// Small star or large orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// A small twinkling point.
    Star,
    /// A large, faint, slowly drifting glow.
    Orb,
}

/// One background particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Index in the starfield (stars first, then orbs).
    pub id: usize,
    /// Star or orb.
    pub kind: ParticleKind,
    /// Horizontal position in percent of the width (0-100).
    pub x: f32,
    /// Vertical position in percent of the height (0-100).
    pub y: f32,
    /// Diameter in pixels: 1-3 for stars, 40-80 for orbs.
    pub size: f32,
    /// Tint.
    pub color: ColorBucket,
    /// Animation start offset in seconds.
    pub delay: f32,
    /// Length of one animation cycle in seconds.
    pub duration: f32,
}

impl Particle {
    /// Fraction of the current animation cycle (0.0..1.0) at `elapsed` seconds.
    pub fn cycle_fraction(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        ((elapsed - self.delay) / self.duration).rem_euclid(1.0)
    }

    /// Twinkle opacity (0.2-1.0) at `elapsed` seconds; brightest mid-cycle.
    pub fn opacity(&self, elapsed: f32) -> f32 {
        let phase = self.cycle_fraction(elapsed);
        let wave = (1.0 - (phase * std::f32::consts::TAU).cos()) / 2.0;
        TWINKLE_MIN + (1.0 - TWINKLE_MIN) * wave
    }

    /// Float offset in pixels at `elapsed` seconds, interpolated between keyframes.
    pub fn drift(&self, elapsed: f32) -> (f32, f32) {
        let scaled = self.cycle_fraction(elapsed) * 4.0;
        let segment = (scaled.floor() as usize).min(3);
        let t = scaled - segment as f32;
        let (x0, y0) = FLOAT_KEYFRAMES[segment];
        let (x1, y1) = FLOAT_KEYFRAMES[segment + 1];
        (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
    }
}

/// The full, immutable set of background particles.
#[derive(Debug, Clone)]
pub struct Starfield {
    particles: Vec<Particle>,
}

impl Starfield {
    /// Generate a starfield, drawing star placement and timing from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(STAR_COUNT + ORB_COUNT);

        for id in 0..STAR_COUNT {
            particles.push(Particle {
                id,
                kind: ParticleKind::Star,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                size: rng.random_range(1.0..3.0),
                color: ColorBucket::from_index(id),
                delay: rng.random_range(0.0..5.0),
                duration: rng.random_range(2.0..5.0),
            });
        }

        for i in 0..ORB_COUNT {
            let id = STAR_COUNT + i;
            let step = i as f32;
            particles.push(Particle {
                id,
                kind: ParticleKind::Orb,
                x: 20.0 + step * 15.0,
                y: 10.0 + (i % 3) as f32 * 30.0,
                size: 40.0 + step * 10.0,
                color: ColorBucket::from_index(id),
                delay: step * 1.5,
                duration: 8.0 + step * 2.0,
            });
        }

        Self { particles }
    }

    /// All particles, stars first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Small stars only.
    pub fn stars(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.kind == ParticleKind::Star)
    }

    /// Large orbs only.
    pub fn orbs(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.kind == ParticleKind::Orb)
    }

    /// Total particle count.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the starfield has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(seed: u64) -> Starfield {
        Starfield::generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn counts() {
        let f = field(42);
        assert_eq!(f.len(), 105);
        assert_eq!(f.stars().count(), STAR_COUNT);
        assert_eq!(f.orbs().count(), ORB_COUNT);
    }

    #[test]
    fn orbs_have_fixed_layout() {
        let f = field(1);
        let orbs: Vec<_> = f.orbs().collect();
        assert_eq!(orbs[0].x, 20.0);
        assert_eq!(orbs[4].x, 80.0);
        assert_eq!(orbs[3].y, 10.0);
        assert_eq!(orbs[2].size, 60.0);
        assert_eq!(orbs[4].duration, 16.0);
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(field(9).particles(), field(9).particles());
    }

    #[test]
    fn opacity_peaks_mid_cycle() {
        let f = field(3);
        let p = &f.particles()[0];
        let start = p.delay;
        let mid = p.delay + p.duration / 2.0;
        assert!((p.opacity(start) - TWINKLE_MIN).abs() < 1e-4);
        assert!((p.opacity(mid) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn drift_follows_keyframes() {
        let f = field(3);
        let orb = f.orbs().next().unwrap();
        let quarter = orb.delay + orb.duration / 4.0;
        let (x, y) = orb.drift(quarter);
        assert!((x - 10.0).abs() < 1e-3);
        assert!((y + 20.0).abs() < 1e-3);
        assert_eq!(orb.drift(orb.delay), (0.0, 0.0));
    }

    proptest! {
        #[test]
        fn any_seed_yields_105_particles(seed in any::<u64>()) {
            let f = field(seed);
            prop_assert_eq!(f.len(), STAR_COUNT + ORB_COUNT);
            for (i, p) in f.particles().iter().enumerate() {
                prop_assert_eq!(p.id, i);
                prop_assert_eq!(p.color, ColorBucket::from_index(i));
            }
        }

        #[test]
        fn stars_stay_in_bounds(seed in any::<u64>()) {
            for p in field(seed).stars() {
                prop_assert!((0.0..100.0).contains(&p.x));
                prop_assert!((0.0..100.0).contains(&p.y));
                prop_assert!((1.0..3.0).contains(&p.size));
                prop_assert!((0.0..5.0).contains(&p.delay));
                prop_assert!((2.0..5.0).contains(&p.duration));
            }
        }

        #[test]
        fn opacity_in_range(seed in any::<u64>(), t in 0.0f32..120.0) {
            for p in field(seed).particles() {
                let o = p.opacity(t);
                prop_assert!((TWINKLE_MIN - 1e-4..=1.0 + 1e-4).contains(&o));
            }
        }
    }
}
