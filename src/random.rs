//! Deterministic random engine with distributions, text helpers and 1D noise.
//!
//! Everything except [`RandomEngine::crypto_int`] is driven by a single
//! [`Mulberry32`] stream, so two engines built from the same seed produce
//! the same values for the same sequence of calls. The engine is used by the
//! property tests to generate string pairs; it is not suitable for anything
//! security related.
//!
//! # Example
//! ```
//! use strmatch::RandomEngine;
//!
//! let mut a = RandomEngine::new(7);
//! let mut b = RandomEngine::new(7);
//! assert_eq!(a.random_string(8), b.random_string(8));
//! assert_eq!(a.uuid(), b.uuid());
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Size of the gradient and permutation tables used by [`RandomEngine::perlin_1d`].
pub const NOISE_TABLE_SIZE: usize = 256;

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const SYLLABLES: [&str; 10] = ["ba", "do", "ka", "me", "la", "ru", "zo", "ni", "fi", "ti"];
const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Mulberry32: a 32-bit state generator with a full 2^32 period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`, with 32 bits of resolution.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Noise flavours accepted by [`RandomEngine::noise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseType {
    #[default]
    Perlin,
    Value,
    White,
    Pink,
}

impl NoiseType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NoiseType::Perlin => "perlin",
            NoiseType::Value => "value",
            NoiseType::White => "white",
            NoiseType::Pink => "pink",
        }
    }
}

impl fmt::Display for NoiseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "perlin" => Ok(NoiseType::Perlin),
            "value" => Ok(NoiseType::Value),
            "white" => Ok(NoiseType::White),
            "pink" => Ok(NoiseType::Pink),
            _ => Err(Error::UnknownNoise(s.to_string())),
        }
    }
}

/// Seeded random engine.
///
/// Construction draws the noise tables from the stream: 256 gradients, then
/// a shuffle of the permutation table. Values produced afterwards depend on
/// the seed only.
#[derive(Clone)]
pub struct RandomEngine {
    seed: u32,
    rng: Mulberry32,
    gradients: Vec<f64>,
    permutation: Vec<usize>,
}

impl fmt::Debug for RandomEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomEngine")
            .field("seed", &self.seed)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}

impl RandomEngine {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            seed,
            rng: Mulberry32::new(seed),
            gradients: Vec::new(),
            permutation: Vec::new(),
        };
        engine.gradients = (0..NOISE_TABLE_SIZE)
            .map(|_| engine.uniform(-1.0, 1.0))
            .collect();
        let identity: Vec<usize> = (0..NOISE_TABLE_SIZE).collect();
        engine.permutation = engine.shuffle(&identity);
        engine
    }

    /// Seed from the wall clock, in milliseconds truncated to 32 bits.
    #[must_use]
    pub fn from_time() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let seed = millis as u32;
        tracing::debug!(seed, "seeding random engine from clock");
        Self::new(seed)
    }

    /// The seed this engine was built from.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize {
        let scaled = (self.next_f64() * bound as f64).floor() as usize;
        scaled.min(bound - 1)
    }

    /// Uniform value in `[min, max)`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `min > max`.
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::invalid(
                "min",
                format!("must not exceed max ({} > {})", min, max),
            ));
        }
        let value = self.uniform(min as f64, max as f64 + 1.0).floor() as i64;
        Ok(value.min(max))
    }

    /// `true` with probability `prob`.
    pub fn bool(&mut self, prob: f64) -> bool {
        self.next_f64() < prob
    }

    /// A uniformly chosen element, `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.index(items.len());
        items.get(idx)
    }

    /// A shuffled copy of `items` (Fisher-Yates, from the back).
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.index(i + 1);
            out.swap(i, j);
        }
        out
    }

    /// Normal deviate via Box-Muller (cosine branch only).
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u = self.next_f64();
        let v = self.next_f64();
        let z = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
        z * std_dev + mean
    }

    /// Exponential deviate with rate `lambda`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] unless `lambda > 0`.
    pub fn exponential(&mut self, lambda: f64) -> Result<f64> {
        if !(lambda > 0.0) {
            return Err(Error::invalid("lambda", format!("must be positive, got {}", lambda)));
        }
        Ok(-(1.0 - self.next_f64()).ln() / lambda)
    }

    /// Poisson deviate (Knuth's multiplication method).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `lambda` is negative or not finite.
    pub fn poisson(&mut self, lambda: f64) -> Result<u64> {
        if !(lambda >= 0.0 && lambda.is_finite()) {
            return Err(Error::invalid(
                "lambda",
                format!("must be finite and non-negative, got {}", lambda),
            ));
        }
        let limit = (-lambda).exp();
        let mut k = 0u64;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.next_f64();
            if p <= limit {
                break;
            }
        }
        Ok(k - 1)
    }

    /// Number of successes in `n` Bernoulli trials.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `p` is outside `[0, 1]`.
    pub fn binomial(&mut self, n: u64, p: f64) -> Result<u64> {
        check_probability("p", p)?;
        Ok((0..n).filter(|_| self.next_f64() < p).count() as u64)
    }

    /// Number of trials up to and including the first success.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `p` is outside `(0, 1]`.
    pub fn geometric(&mut self, p: f64) -> Result<u64> {
        check_probability("p", p)?;
        if p == 0.0 {
            return Err(Error::invalid("p", "must be greater than 0"));
        }
        let trials = ((1.0 - self.next_f64()).ln() / (1.0 - p).ln()).ceil();
        // u == 0 and p == 1 both land on 0
        Ok((trials as u64).max(1))
    }

    /// Pick a value with probability proportional to its weight.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for an empty list, a negative or non-finite
    /// weight, or weights summing to zero.
    pub fn weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> Result<&'a T> {
        if let Some((_, w)) = items.iter().find(|(_, w)| !(w.is_finite() && *w >= 0.0)) {
            return Err(Error::invalid(
                "items",
                format!("weights must be finite and non-negative, got {}", w),
            ));
        }
        let total: f64 = items.iter().map(|(_, w)| w).sum();
        if !(total > 0.0) {
            return Err(Error::invalid("items", "total weight must be positive"));
        }

        let mut r = self.next_f64() * total;
        for (value, weight) in items {
            r -= weight;
            if r < 0.0 {
                return Ok(value);
            }
        }
        // Rounding left r at or just above zero: fall back to the last
        // item that can actually be drawn.
        items
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(value, _)| value)
            .ok_or_else(|| Error::invalid("items", "total weight must be positive"))
    }

    /// Random lowercase ASCII letter.
    pub fn random_char(&mut self) -> char {
        char::from(LOWERCASE[self.index(LOWERCASE.len())])
    }

    /// `len` random lowercase ASCII letters.
    pub fn random_string(&mut self, len: usize) -> String {
        (0..len).map(|_| self.random_char()).collect()
    }

    /// Pronounceable word of two to four syllables.
    pub fn random_word(&mut self) -> String {
        let count = 2 + self.index(3);
        (0..count)
            .map(|_| SYLLABLES[self.index(SYLLABLES.len())])
            .collect()
    }

    /// String in the version 4 UUID layout, drawn from this engine.
    pub fn uuid(&mut self) -> String {
        UUID_TEMPLATE
            .chars()
            .map(|c| {
                let digit = match c {
                    'x' => self.index(16) as u32,
                    'y' => (self.index(16) as u32 & 0x3) | 0x8,
                    other => return other,
                };
                char::from_digit(digit, 16).unwrap_or('0')
            })
            .collect()
    }

    /// Integer in `[min, max]` from the operating system RNG.
    ///
    /// Independent of any engine state.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `min > max`.
    pub fn crypto_int(min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::invalid(
                "min",
                format!("must not exceed max ({} > {})", min, max),
            ));
        }
        Ok(OsRng.gen_range(min..=max))
    }

    /// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
    #[must_use]
    pub fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[must_use]
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// Gradient noise, zero at every integer.
    ///
    /// The lattice repeats every 256 units; negative inputs wrap.
    #[must_use]
    pub fn perlin_1d(&self, x: f64) -> f64 {
        let floor = x.floor();
        let xi = floor.rem_euclid(NOISE_TABLE_SIZE as f64) as usize % NOISE_TABLE_SIZE;
        let xf = x - floor;
        let g1 = self.gradients[self.permutation[xi]];
        let g2 = self.gradients[self.permutation[(xi + 1) % NOISE_TABLE_SIZE]];
        Self::lerp(g1 * xf, g2 * (xf - 1.0), Self::fade(xf))
    }

    /// Interpolates between two fresh uniform values in `[-1, 1)`.
    ///
    /// Only the fractional part of `x` matters, and each call advances the
    /// stream.
    pub fn value_noise_1d(&mut self, x: f64) -> f64 {
        let xf = x - x.floor();
        let v1 = self.uniform(-1.0, 1.0);
        let v2 = self.uniform(-1.0, 1.0);
        Self::lerp(v1, v2, Self::fade(xf))
    }

    /// Uniform value in `[-1, 1)`.
    pub fn white_noise(&mut self) -> f64 {
        self.uniform(-1.0, 1.0)
    }

    /// Perlin noise divided by `x`, or by 1 at `x == 0`.
    #[must_use]
    pub fn pink_noise(&self, x: f64) -> f64 {
        let divisor = if x == 0.0 { 1.0 } else { x };
        self.perlin_1d(x) / divisor
    }

    pub fn noise(&mut self, x: f64, kind: NoiseType) -> f64 {
        match kind {
            NoiseType::Perlin => self.perlin_1d(x),
            NoiseType::Value => self.value_noise_1d(x),
            NoiseType::White => self.white_noise(),
            NoiseType::Pink => self.pink_noise(x),
        }
    }
}

impl RngCore for RandomEngine {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

fn check_probability(name: &'static str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::invalid(name, format!("must be in [0, 1], got {}", p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mulberry32_reference_stream() {
        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_f64(), 0.6011037519201636);
        assert_eq!(rng.next_f64(), 0.44829055899754167);
        assert_eq!(rng.next_f64(), 0.8524657934904099);

        assert_eq!(Mulberry32::new(0).next_f64(), 0.26642920868471265);
        assert_eq!(Mulberry32::from_seed(42u32.to_le_bytes()), Mulberry32::new(42));
    }

    #[test]
    fn test_mulberry32_fill_bytes() {
        let mut a = Mulberry32::new(3);
        let mut b = Mulberry32::new(3);
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        assert_eq!(buf[..4], b.next_u32().to_le_bytes());
        assert_eq!(buf[4..], b.next_u32().to_le_bytes()[..2]);
    }

    #[test]
    fn test_construction_consumes_tables() {
        let mut engine = RandomEngine::new(12345);
        assert_eq!(engine.seed(), 12345);
        assert_eq!(engine.uniform(0.0, 1.0), 0.7251515227835625);
        assert_eq!(engine.uniform(0.0, 1.0), 0.28940678923390806);
        assert_eq!(engine.int(1, 6).unwrap(), 6);
    }

    #[test]
    fn test_noise_tables() {
        let engine = RandomEngine::new(42);
        assert_eq!(engine.permutation[..5], [127, 138, 221, 216, 180]);
        assert_eq!(engine.gradients[0], 0.20220750384032726);

        let mut sorted = engine.permutation.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..NOISE_TABLE_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RandomEngine::new(2024);
        let mut b = RandomEngine::new(2024);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
        assert_ne!(RandomEngine::new(1).next_u32(), RandomEngine::new(2).next_u32());
    }

    #[test]
    fn test_int() {
        let mut engine = RandomEngine::new(7);
        let rolls: Vec<i64> = (0..10).map(|_| engine.int(1, 6).unwrap()).collect();
        assert_eq!(rolls, vec![5, 5, 5, 5, 5, 4, 6, 6, 4, 6]);

        for _ in 0..1000 {
            let v = engine.int(-3, 3).unwrap();
            assert!((-3..=3).contains(&v));
        }
        assert_eq!(engine.int(4, 4).unwrap(), 4);
        assert!(matches!(engine.int(5, 1), Err(Error::InvalidArgument { name: "min", .. })));
    }

    #[test]
    fn test_uniform_range() {
        let mut engine = RandomEngine::new(11);
        for _ in 0..1000 {
            let v = engine.uniform(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
        }
    }

    #[test]
    fn test_bool_extremes() {
        let mut engine = RandomEngine::new(1);
        assert!((0..100).all(|_| !engine.bool(0.0)));
        assert!((0..100).all(|_| engine.bool(1.0)));
    }

    #[test]
    fn test_pick_and_shuffle() {
        let mut engine = RandomEngine::new(7);
        assert_eq!(engine.shuffle(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![1, 3, 2, 7, 4, 5, 8, 6]);

        let empty: [u8; 0] = [];
        assert_eq!(engine.pick(&empty), None);
        assert!(engine.shuffle(&empty).is_empty());
        assert_eq!(engine.pick(&["only"]), Some(&"only"));

        let items = ["a", "b", "c"];
        for _ in 0..50 {
            assert!(items.contains(engine.pick(&items).unwrap()));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut engine = RandomEngine::new(99);
        let original: Vec<u32> = (0..20).collect();
        let mut shuffled = engine.shuffle(&original);
        assert_ne!(shuffled, original);
        shuffled.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_distributions() {
        let mut engine = RandomEngine::new(99);
        assert_relative_eq!(engine.normal(0.0, 1.0), 0.3974122295869896, epsilon = 1e-12);
        assert_relative_eq!(engine.exponential(2.0).unwrap(), 0.5179913378159033, epsilon = 1e-12);
        assert_eq!(engine.poisson(4.0).unwrap(), 3);
        assert_eq!(engine.binomial(10, 0.5).unwrap(), 5);
        assert_eq!(engine.geometric(0.3).unwrap(), 1);
    }

    #[test]
    fn test_distribution_arguments() {
        let mut engine = RandomEngine::new(5);
        assert!(engine.exponential(0.0).is_err());
        assert!(engine.exponential(f64::NAN).is_err());
        assert!(engine.poisson(-1.0).is_err());
        assert_eq!(engine.poisson(0.0).unwrap(), 0);
        assert!(engine.binomial(3, 1.5).is_err());
        assert_eq!(engine.binomial(0, 0.5).unwrap(), 0);
        assert_eq!(engine.binomial(20, 1.0).unwrap(), 20);
        assert!(engine.geometric(0.0).is_err());
        assert_eq!(engine.geometric(1.0).unwrap(), 1);
        for _ in 0..100 {
            assert!(engine.geometric(0.2).unwrap() >= 1);
        }
    }

    #[test]
    fn test_weighted() {
        let mut engine = RandomEngine::new(99);
        let items = [("a", 1.0), ("b", 3.0)];
        let draws: Vec<&str> = (0..3).map(|_| *engine.weighted(&items).unwrap()).collect();
        assert_eq!(draws, vec!["b", "a", "b"]);

        assert_eq!(*engine.weighted(&[("x", 0.0), ("y", 2.0)]).unwrap(), "y");
        let empty: [(&str, f64); 0] = [];
        assert!(engine.weighted(&empty).is_err());
        assert!(engine.weighted(&[("x", 0.0)]).is_err());
        assert!(engine.weighted(&[("x", -1.0), ("y", 2.0)]).is_err());
    }

    #[test]
    fn test_text() {
        let mut engine = RandomEngine::new(7);
        assert_eq!(engine.random_string(8), "rtuuunyx");
        assert_eq!(engine.random_word(), "titime");
        assert_eq!(engine.uuid(), "ec7647fb-5cba-4b9d-9ce2-6bc86ff2a397");

        assert!(engine.random_string(0).is_empty());
        for _ in 0..100 {
            assert!(engine.random_char().is_ascii_lowercase());
            let word = engine.random_word();
            assert!((4..=8).contains(&word.len()), "{}", word);
        }
    }

    #[test]
    fn test_uuid_layout() {
        let mut engine = RandomEngine::new(123);
        for _ in 0..20 {
            let id = engine.uuid();
            assert_eq!(id.len(), 36);
            let parts: Vec<&str> = id.split('-').collect();
            assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![8, 4, 4, 4, 12]);
            assert!(parts[2].starts_with('4'));
            assert!(matches!(parts[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
        }
    }

    #[test]
    fn test_crypto_int() {
        for _ in 0..100 {
            let v = RandomEngine::crypto_int(10, 20).unwrap();
            assert!((10..=20).contains(&v));
        }
        assert_eq!(RandomEngine::crypto_int(3, 3).unwrap(), 3);
        assert!(RandomEngine::crypto_int(2, 1).is_err());
    }

    #[test]
    fn test_fade_and_lerp() {
        assert_eq!(RandomEngine::fade(0.0), 0.0);
        assert_eq!(RandomEngine::fade(1.0), 1.0);
        assert_eq!(RandomEngine::fade(0.5), 0.5);
        assert_eq!(RandomEngine::lerp(2.0, 4.0, 0.25), 2.5);
    }

    #[test]
    fn test_perlin() {
        let engine = RandomEngine::new(42);
        assert_eq!(engine.perlin_1d(0.5), -0.04155461001209915);
        assert_eq!(engine.perlin_1d(1.25), -0.026489721944244593);
        assert_eq!(engine.perlin_1d(-0.75), -0.07187221541312283);
        for x in [0.0, 1.0, 3.0, -2.0, 255.0, 256.0] {
            assert_eq!(engine.perlin_1d(x), 0.0, "{}", x);
        }
        assert_eq!(engine.perlin_1d(0.5), engine.perlin_1d(256.5));
    }

    #[test]
    fn test_pink_noise() {
        let engine = RandomEngine::new(42);
        assert_eq!(engine.pink_noise(2.5), engine.perlin_1d(2.5) / 2.5);
        assert_eq!(engine.pink_noise(2.5), 0.17189892432652415);
        assert_eq!(engine.pink_noise(0.0), 0.0);
    }

    #[test]
    fn test_value_and_white_noise() {
        let mut engine = RandomEngine::new(5);
        assert_eq!(engine.value_noise_1d(0.3), -0.7642285501522571);
        assert_eq!(engine.white_noise(), -0.8706589005887508);
        for _ in 0..100 {
            let v = engine.noise(1.7, NoiseType::Value);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_noise_type() {
        assert_eq!("pink".parse::<NoiseType>().unwrap(), NoiseType::Pink);
        assert_eq!(NoiseType::default(), NoiseType::Perlin);
        assert!(matches!("brown".parse::<NoiseType>(), Err(Error::UnknownNoise(_))));

        let engine = RandomEngine::new(42);
        let mut copy = engine.clone();
        assert_eq!(copy.noise(0.5, NoiseType::Perlin), engine.perlin_1d(0.5));
        assert_eq!(copy.noise(2.5, NoiseType::Pink), engine.pink_noise(2.5));
    }

    #[test]
    fn test_composes_with_rand() {
        let mut engine = RandomEngine::new(8);
        for _ in 0..100 {
            let v: u8 = engine.gen_range(1..=6);
            assert!((1..=6).contains(&v));
        }
    }
}
