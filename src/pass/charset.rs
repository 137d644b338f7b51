//! Character classes and pool building.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox caption.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Include Uppercase Letters",
            CharClass::Lowercase => "Include Lowercase Letters",
            CharClass::Numbers => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }

    /// Parse the short names accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Some(CharClass::Uppercase),
            "lower" | "lowercase" => Some(CharClass::Lowercase),
            "numbers" | "digits" => Some(CharClass::Numbers),
            "symbols" | "special" => Some(CharClass::Symbols),
            _ => None,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Numbers => "numbers",
            CharClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Which character classes contribute to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationOptions {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl GenerationOptions {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        CharClass::ALL.iter().any(|&c| self.is_enabled(c))
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Numbers => &mut self.numbers,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.is_enabled(class));
    }

    fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|&c| self.is_enabled(c))
    }
}

/// Concatenate the alphabets of every enabled class. Empty means nothing can be generated.
pub fn build_pool(options: &GenerationOptions) -> String {
    options.enabled().map(CharClass::alphabet).collect()
}

/// Pool length without building it (for entropy readout).
pub fn pool_size(options: &GenerationOptions) -> usize {
    options.enabled().map(|c| c.alphabet().chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_classes_builds_empty_pool() {
        assert_eq!(build_pool(&GenerationOptions::none()), "");
        assert_eq!(pool_size(&GenerationOptions::none()), 0);
    }

    #[test]
    fn all_classes_contain_every_character_once() {
        let pool = build_pool(&GenerationOptions::all());
        assert_eq!(pool.chars().count(), 26 + 26 + 10 + 26);
        assert_eq!(pool_size(&GenerationOptions::all()), pool.chars().count());

        let unique: HashSet<char> = pool.chars().collect();
        assert_eq!(unique.len(), pool.chars().count());

        for class in CharClass::ALL {
            assert!(class.alphabet().chars().all(|c| unique.contains(&c)));
        }
    }

    #[test]
    fn pool_follows_fixed_class_order() {
        let options = GenerationOptions {
            uppercase: true,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        assert_eq!(build_pool(&options), "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    }

    #[test]
    fn toggle_flips_single_class() {
        let mut options = GenerationOptions::none();
        options.toggle(CharClass::Symbols);
        assert!(options.symbols);
        assert!(options.any());
        assert_eq!(build_pool(&options), SYMBOLS);

        options.toggle(CharClass::Symbols);
        assert!(!options.any());
    }

    #[test]
    fn class_names_parse() {
        assert_eq!(CharClass::from_name("upper"), Some(CharClass::Uppercase));
        assert_eq!(CharClass::from_name(" Digits "), Some(CharClass::Numbers));
        assert_eq!(CharClass::from_name("emoji"), None);
    }
}
