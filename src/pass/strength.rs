//! Length-based strength rating.

use std::fmt;

const WEAK_MIN: usize = 6;
const MEDIUM_MIN: usize = 10;
const STRONG_MIN: usize = 13;

/// Number of bars in the strength meter.
pub const BAR_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// How many meter bars light up.
    pub fn bars(self) -> usize {
        match self {
            Strength::TooWeak => 1,
            Strength::Weak => 2,
            Strength::Medium => 3,
            Strength::Strong => 4,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::TooWeak => "too weak",
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Rate a requested length. Character classes play no part.
pub fn classify(length: usize) -> Strength {
    match length {
        n if n < WEAK_MIN => Strength::TooWeak,
        n if n < MEDIUM_MIN => Strength::Weak,
        n if n < STRONG_MIN => Strength::Medium,
        _ => Strength::Strong,
    }
}

/// Password entropy in bits.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_ranges() {
        for n in 0..=5 {
            assert_eq!(classify(n), Strength::TooWeak);
        }
        for n in 6..=9 {
            assert_eq!(classify(n), Strength::Weak);
        }
        for n in 10..=12 {
            assert_eq!(classify(n), Strength::Medium);
        }
        for n in [13, 14, 20, 128, usize::MAX] {
            assert_eq!(classify(n), Strength::Strong);
        }
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(classify(5), Strength::TooWeak);
        assert_eq!(classify(6), Strength::Weak);
        assert_eq!(classify(10), Strength::Medium);
        assert_eq!(classify(13), Strength::Strong);
    }

    #[test]
    fn classify_is_stable() {
        for n in 0..30 {
            assert_eq!(classify(n), classify(n));
        }
    }

    #[test]
    fn labels_and_bars() {
        assert_eq!(Strength::TooWeak.to_string(), "too weak");
        assert_eq!(Strength::Weak.to_string(), "weak");
        assert_eq!(Strength::Medium.to_string(), "medium");
        assert_eq!(Strength::Strong.to_string(), "strong");

        assert_eq!(Strength::TooWeak.bars(), 1);
        assert_eq!(Strength::Strong.bars(), BAR_COUNT);
        assert!(Strength::TooWeak < Strength::Strong);
    }

    #[test]
    fn entropy_is_zero_for_empty_pool() {
        assert_eq!(entropy_bits(20, 0), 0.0);
        assert_eq!(entropy_bits(8, 2), 8.0);
    }
}
