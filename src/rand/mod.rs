//! Random sources for password generation.
//!
//! `Rand` is a general-purpose generator seeded from the CPU cycle counter.
//! It makes no cryptographic claim. Anything that draws characters takes a
//! `RandomSource` so callers can substitute a deterministic one.

mod hw;
mod primes;

use zeroize::Zeroize;

use primes::PRIMES;

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `[0, bound)`. Returns 0 for an empty range.
    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        // Largest multiple of `bound` representable; values at or above it would bias low indices.
        let limit = u64::MAX - u64::MAX % bound;
        loop {
            let v = self.next_u64();
            if v < limit {
                return (v % bound) as usize;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

pub struct Rand {
    state: u64,
}

impl Rand {
    pub fn new() -> Self {
        Self::with_seed(hw::entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Rand { state: seed }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Rand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = (mixed ^ (mixed >> 32)) as usize % PRIMES.len();

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[cfg(test)]
pub struct Scripted {
    values: Vec<u64>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: &[u64]) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Scripted {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
