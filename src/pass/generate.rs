//! Password generation.

use crate::rand::RandomSource;

/// Draw `length` characters from `pool`, independently and with replacement.
/// An empty pool yields an empty password.
pub fn generate<R: RandomSource + ?Sized>(length: usize, pool: &str, rng: &mut R) -> String {
    let chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    (0..length).map(|_| random_char(&chars, rng)).collect()
}

#[inline]
fn random_char<R: RandomSource + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.below(chars.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{GenerationOptions, build_pool};
    use crate::rand::{Rand, Scripted};

    #[test]
    fn empty_pool_yields_empty_password() {
        let mut rng = Rand::new();
        for length in [0, 1, 8, 64] {
            assert_eq!(generate(length, "", &mut rng), "");
        }
    }

    #[test]
    fn length_and_membership_hold() {
        let pool = build_pool(&GenerationOptions::all());
        let mut rng = Rand::new();
        for length in 0..=40 {
            let pass = generate(length, &pool, &mut rng);
            assert_eq!(pass.chars().count(), length);
            assert!(pass.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = Rand::new();
        assert_eq!(generate(0, "abc", &mut rng), "");
    }

    #[test]
    fn scripted_source_gives_exact_output() {
        let mut rng = Scripted::new(&[0, 1, 2, 25, 26]);
        let pool = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        assert_eq!(generate(5, pool, &mut rng), "ABCZ0");
    }

    #[test]
    fn single_char_pool_repeats() {
        let mut rng = Rand::new();
        assert_eq!(generate(6, "x", &mut rng), "xxxxxx");
    }
}
