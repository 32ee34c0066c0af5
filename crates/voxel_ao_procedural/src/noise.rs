//! # Height Noise
//!
//! 2D simplex noise for height fields.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`GenSeed`], this produces exactly the same values on any
//! platform. The permutation table is shuffled with `ChaCha8`, which is
//! specified bit-for-bit.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenSeed(u64);

impl GenSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent sub-seed for a specific purpose.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0 ^ purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// A `ChaCha8` stream for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for GenSeed {
    fn default() -> Self {
        Self(42)
    }
}

/// Eight unit-ish gradient directions.
const GRADIENTS: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.707_106_781, 0.707_106_781],
    [-0.707_106_781, 0.707_106_781],
    [0.707_106_781, -0.707_106_781],
    [-0.707_106_781, -0.707_106_781],
];

/// 2D simplex noise in `[-1, 1]`.
pub struct HeightNoise {
    /// 256-entry permutation, doubled to skip index wrapping.
    perm: [u8; 512],
}

impl HeightNoise {
    /// Skew factor, `(sqrt(3) - 1) / 2`.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskew factor, `(3 - sqrt(3)) / 6`.
    const G2: f64 = 0.211_324_865_405_187;

    /// Creates a noise field from a seed.
    #[must_use]
    pub fn new(seed: GenSeed) -> Self {
        let mut table: Vec<u8> = (0..=u8::MAX).collect();
        table.shuffle(&mut seed.rng());

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);
        Self { perm }
    }

    #[inline]
    fn hash(&self, i: i64, j: i64) -> usize {
        let i = (i & 255) as usize;
        let j = (j & 255) as usize;
        self.perm[i + self.perm[j] as usize] as usize
    }

    #[inline]
    fn corner(&self, x: f64, y: f64, i: i64, j: i64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t <= 0.0 {
            return 0.0;
        }
        let [gx, gy] = GRADIENTS[self.hash(i, j) & 7];
        let t2 = t * t;
        t2 * t2 * (gx * x + gy * y)
    }

    /// Samples the field at `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * Self::F2;
        let i = (x + skew).floor() as i64;
        let j = (y + skew).floor() as i64;

        let unskew = (i + j) as f64 * Self::G2;
        let x0 = x - (i as f64 - unskew);
        let y0 = y - (j as f64 - unskew);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let n = self.corner(x0, y0, i, j)
            + self.corner(x1, y1, i + i64::from(i1), j + i64::from(j1))
            + self.corner(x2, y2, i + 1, j + 1);

        (70.0 * n).clamp(-1.0, 1.0)
    }

    /// Fractal sum of `octaves` layers, normalized back to `[-1, 1]`.
    ///
    /// Each octave doubles the frequency and halves the amplitude.
    #[must_use]
    pub fn fbm(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves.max(1) {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        total / max_amplitude
    }
}
