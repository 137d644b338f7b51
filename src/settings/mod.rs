//! Widget settings: defaults with launch flags layered on top.

use std::time::Duration;

use crate::cli::CliFlags;
use crate::clipboard::DEFAULT_FEEDBACK;
use crate::pass::GenerationOptions;

#[derive(Debug, Clone)]
pub struct Settings {
    pub min_length: usize,
    pub max_length: usize,
    pub length_step: usize,
    pub initial_length: usize,
    pub options: GenerationOptions,
    pub generate_on_start: bool,
    pub copy_feedback: Duration,
}

impl Settings {
    /// Apply launch flags. Length is clamped to the slider range by the form.
    pub fn with_flags(flags: &CliFlags) -> Self {
        let mut settings = Settings::default();

        if let Some(len) = flags.length {
            settings.initial_length = len;
        }

        if let Some(ref only) = flags.only {
            settings.options = GenerationOptions::none();
            for &class in only {
                settings.options.set(class, true);
            }
        }
        for &class in &flags.disabled {
            settings.options.set(class, false);
        }

        settings.generate_on_start = flags.generate;
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: 20,
            length_step: 1,
            initial_length: 10,
            options: GenerationOptions::all(),
            generate_on_start: false,
            copy_feedback: DEFAULT_FEEDBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClass;

    #[test]
    fn defaults_enable_every_class() {
        let settings = Settings::default();
        assert_eq!(settings.options, GenerationOptions::all());
        assert_eq!(settings.copy_feedback, Duration::from_secs(2));
        assert!(settings.initial_length <= settings.max_length);
    }

    #[test]
    fn empty_flags_keep_defaults() {
        let settings = Settings::with_flags(&CliFlags::default());
        let defaults = Settings::default();
        assert_eq!(settings.initial_length, defaults.initial_length);
        assert_eq!(settings.options, defaults.options);
        assert!(!settings.generate_on_start);
    }

    #[test]
    fn only_then_disable() {
        let flags = CliFlags {
            length: Some(8),
            only: Some(vec![CharClass::Uppercase, CharClass::Numbers, CharClass::Symbols]),
            disabled: vec![CharClass::Symbols],
            generate: true,
            ..Default::default()
        };
        let settings = Settings::with_flags(&flags);

        assert_eq!(settings.initial_length, 8);
        assert!(settings.generate_on_start);
        assert_eq!(
            settings.options,
            GenerationOptions {
                uppercase: true,
                lowercase: false,
                numbers: true,
                symbols: false,
            }
        );
    }
}
