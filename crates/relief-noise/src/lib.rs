//! 2D noise fields for terrain synthesis.
//!
//! Everything here produces values in `[0, 1]` from an `(x, z)` ground-plane
//! coordinate, which is the contract terrain generation scales into vertex
//! heights. The [`NoiseField`] trait is the seam; [`Perlin`] is the
//! default implementation, [`Fbm`] layers octaves of any base field, and
//! [`Constant`] pins every sample to one value for flat terrain and tests.
//!
//! # Example
//!
//! ```
//! use relief_noise::{Fbm, NoiseField, Perlin};
//!
//! let rolling = Fbm::new(Perlin::with_seed(42)).octaves(4).gain(0.5);
//! let h = rolling.sample(3.2, 0.7);
//! assert!((0.0..=1.0).contains(&h));
//! ```

// ===== Noise trait =====

/// A deterministic scalar field over the ground plane.
///
/// Implementations must return values in `[0, 1]` and must be pure: the same
/// `(x, z)` always yields the same sample.
pub trait NoiseField {
    /// Samples the field at the given ground-plane coordinate.
    fn sample(&self, x: f32, z: f32) -> f32;
}

// ===== Perlin =====

/// Gradient noise over a 2D integer lattice.
///
/// Classic improved Perlin noise, remapped from its signed range into
/// `[0, 1]`. The `seed` offsets the permutation lookup so different seeds
/// produce uncorrelated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perlin {
    /// Seed mixed into the permutation lookup.
    pub seed: i32,
}

impl Perlin {
    /// Creates Perlin noise with seed 0.
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// Creates Perlin noise with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self { seed }
    }
}

impl NoiseField for Perlin {
    fn sample(&self, x: f32, z: f32) -> f32 {
        let xi = x.floor() as i32;
        let zi = z.floor() as i32;
        let fx = x - xi as f32;
        let fz = z - zi as f32;

        let u = fade(fx);
        let v = fade(fz);

        // Hash the four lattice corners surrounding the sample point.
        let h00 = perm(perm(xi, self.seed) as i32 + zi, self.seed);
        let h10 = perm(perm(xi + 1, self.seed) as i32 + zi, self.seed);
        let h01 = perm(perm(xi, self.seed) as i32 + zi + 1, self.seed);
        let h11 = perm(perm(xi + 1, self.seed) as i32 + zi + 1, self.seed);

        let n0 = lerp(grad2(h00, fx, fz), grad2(h10, fx - 1.0, fz), u);
        let n1 = lerp(grad2(h01, fx, fz - 1.0), grad2(h11, fx - 1.0, fz - 1.0), u);
        let n = lerp(n0, n1, v) * std::f32::consts::SQRT_2;

        // Remap the signed result into [0, 1]; clamp eats the rare overshoot
        // from the unnormalized diagonal gradients.
        (n * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

// ===== Fractional Brownian motion =====

/// Layered octaves of a base noise field.
///
/// Each octave samples the base field at `lacunarity` times the previous
/// frequency and `gain` times the previous amplitude. The weighted sum is
/// renormalized so the result stays in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fbm<N> {
    /// Base field sampled by every octave.
    pub noise: N,
    /// Number of octaves to accumulate.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Amplitude multiplier between octaves.
    pub gain: f32,
}

impl<N: NoiseField> Fbm<N> {
    /// Wraps a base field with default layering: 4 octaves, lacunarity 2.0,
    /// gain 0.5.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }

    /// Sets the octave count.
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the frequency multiplier between octaves.
    pub fn lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the amplitude multiplier between octaves.
    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }
}

impl<N: NoiseField> NoiseField for Fbm<N> {
    fn sample(&self, x: f32, z: f32) -> f32 {
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut total = 0.0;
        let mut weight = 0.0;

        for _ in 0..self.octaves {
            total += self.noise.sample(x * frequency, z * frequency) * amplitude;
            weight += amplitude;
            frequency *= self.lacunarity;
            amplitude *= self.gain;
        }

        if weight > 0.0 {
            total / weight
        } else {
            0.0
        }
    }
}

// ===== Constant =====

/// A field that returns the same value everywhere.
///
/// Useful for flat terrain and for tests that need exact heights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    /// The value every sample returns, typically in `[0, 1]`.
    pub value: f32,
}

impl Constant {
    /// Creates a field pinned to `value`.
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl NoiseField for Constant {
    fn sample(&self, _x: f32, _z: f32) -> f32 {
        self.value
    }
}

// ===== Helpers =====

/// Ken Perlin's reference permutation table.
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Seeded permutation lookup.
fn perm(i: i32, seed: i32) -> u8 {
    PERM[(i.wrapping_add(seed) & 0xFF) as usize]
}

/// Quintic smoothstep, zero first and second derivatives at 0 and 1.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Dots the corner offset with one of eight lattice gradients.
fn grad2(hash: u8, x: f32, z: f32) -> f32 {
    match hash & 7 {
        0 => x + z,
        1 => x - z,
        2 => -x + z,
        3 => -x - z,
        4 => x,
        5 => -x,
        6 => z,
        _ => -z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_stays_in_unit_range() {
        let noise = Perlin::with_seed(7);
        for zi in 0..64 {
            for xi in 0..64 {
                let v = noise.sample(xi as f32 * 0.17, zi as f32 * 0.23);
                assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_perlin_is_deterministic() {
        let a = Perlin::with_seed(99);
        let b = Perlin::with_seed(99);
        for i in 0..32 {
            let x = i as f32 * 0.31;
            let z = i as f32 * 0.13;
            assert_eq!(a.sample(x, z), b.sample(x, z));
        }
    }

    #[test]
    fn test_perlin_seed_changes_field() {
        let a = Perlin::with_seed(1);
        let b = Perlin::with_seed(2);
        let differs = (0..32).any(|i| {
            let x = i as f32 * 0.31 + 0.05;
            a.sample(x, x * 0.7) != b.sample(x, x * 0.7)
        });
        assert!(differs);
    }

    #[test]
    fn test_perlin_varies_over_space() {
        let noise = Perlin::new();
        let first = noise.sample(0.05, 0.05);
        let differs = (1..64).any(|i| noise.sample(0.05 + i as f32 * 0.19, 0.05) != first);
        assert!(differs);
    }

    #[test]
    fn test_fbm_stays_in_unit_range() {
        let noise = Fbm::new(Perlin::with_seed(3)).octaves(5);
        for zi in 0..32 {
            for xi in 0..32 {
                let v = noise.sample(xi as f32 * 0.29, zi as f32 * 0.11);
                assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
            }
        }
    }

    #[test]
    fn test_fbm_single_octave_matches_base() {
        let base = Perlin::with_seed(5);
        let fbm = Fbm::new(base).octaves(1);
        for i in 0..16 {
            let x = i as f32 * 0.37;
            assert!((fbm.sample(x, 1.5) - base.sample(x, 1.5)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fbm_zero_octaves_is_zero() {
        let fbm = Fbm::new(Perlin::new()).octaves(0);
        assert_eq!(fbm.sample(1.0, 2.0), 0.0);
    }

    #[test]
    fn test_constant_returns_value() {
        let flat = Constant::new(0.25);
        assert_eq!(flat.sample(0.0, 0.0), 0.25);
        assert_eq!(flat.sample(100.0, -3.0), 0.25);
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-6);
    }
}
