//! Pool building, password generation, and strength rating.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharClass, GenerationOptions, build_pool, pool_size};
pub use generate::generate;
pub use strength::{Strength, classify};
