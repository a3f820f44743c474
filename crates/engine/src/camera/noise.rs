//! Smooth scalar noise for the breathing drift.

use noise::{NoiseFn, Perlin};

/// A deterministic smooth scalar field sampled along one axis.
///
/// Implementations return values in `[0, 1]` and must give the same value for
/// the same `t` every time.
pub trait NoiseSource {
    fn sample(&self, t: f64) -> f32;
}

/// Row of the 2D Perlin field the 1D samples are taken from. Off-lattice so
/// the field is not pinned to zero at integer `t`.
const SAMPLE_ROW: f64 = 0.371;

/// Seeded Perlin noise remapped from `[-1, 1]` to `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl NoiseSource for PerlinNoise {
    #[inline]
    fn sample(&self, t: f64) -> f32 {
        let n = self.perlin.get([t, SAMPLE_ROW]);
        ((n * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }
}

/// Noise that never moves. Samples sit at the midpoint, so drift is zero.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FlatNoise;

#[cfg(test)]
impl NoiseSource for FlatNoise {
    #[inline]
    fn sample(&self, _t: f64) -> f32 {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_deterministic_per_seed() {
        let a = PerlinNoise::new(7);
        let b = PerlinNoise::new(7);
        for i in 0..50 {
            let t = i as f64 * 0.137;
            assert_eq!(a.sample(t), b.sample(t));
        }
    }

    #[test]
    fn test_perlin_range_and_smoothness() {
        let n = PerlinNoise::new(42);
        let mut prev = n.sample(0.0);
        for i in 1..2000 {
            let v = n.sample(i as f64 * 0.008);
            assert!((0.0..=1.0).contains(&v));
            // Neighbouring samples at the breathing step stay close.
            assert!((v - prev).abs() < 0.05);
            prev = v;
        }
    }

    #[test]
    fn test_flat_noise_is_midpoint() {
        assert_eq!(FlatNoise.sample(123.0), 0.5);
    }
}
