//! Form state behind the widget: slider, class toggles, displayed result.

use std::time::Instant;

use log::{debug, error};
use zeroize::Zeroizing;

use crate::clipboard::{ClipboardSink, CopyFeedback};
use crate::pass::strength::entropy_bits;
use crate::pass::{
    CharClass, GenerationOptions, Strength, build_pool, classify, generate, pool_size,
};
use crate::rand::RandomSource;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthSlider {
    min: usize,
    max: usize,
    step: usize,
    value: usize,
}

impl LengthSlider {
    pub fn new(min: usize, max: usize, step: usize, value: usize) -> Self {
        let mut slider = LengthSlider {
            min,
            max: max.max(min),
            step: step.max(1),
            value: min,
        };
        slider.set(value);
        slider
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Clamp to the range and snap down to the step grid.
    pub fn set(&mut self, value: usize) {
        let value = value.clamp(self.min, self.max);
        self.value = self.min + (value - self.min) / self.step * self.step;
    }

    pub fn increase(&mut self) {
        self.set(self.value.saturating_add(self.step));
    }

    pub fn decrease(&mut self) {
        self.set(self.value.saturating_sub(self.step));
    }

    pub fn fill_percent(&self) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (self.value - self.min) as f32 / (self.max - self.min) as f32 * 100.0
    }
}

pub struct Output {
    pub password: Zeroizing<String>,
    pub strength: Strength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Rendered,
    Cleared,
}

pub struct Form {
    pub slider: LengthSlider,
    pub options: GenerationOptions,
    output: Option<Output>,
    feedback: CopyFeedback,
}

impl Form {
    pub fn new(settings: &Settings) -> Self {
        Form {
            slider: LengthSlider::new(
                settings.min_length,
                settings.max_length,
                settings.length_step,
                settings.initial_length,
            ),
            options: settings.options,
            output: None,
            feedback: CopyFeedback::new(settings.copy_feedback),
        }
    }

    pub fn output(&self) -> Option<&Output> {
        self.output.as_ref()
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.options.toggle(class);
    }

    /// Regenerate from the current slider and toggles, or clear the result
    /// when there is nothing to generate.
    pub fn submit<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Submission {
        let length = self.slider.value();
        if length == 0 || !self.options.any() {
            debug!("nothing to generate (length {length}), clearing output");
            self.clear();
            return Submission::Cleared;
        }

        let pool = build_pool(&self.options);
        let password = Zeroizing::new(generate(length, &pool, rng));
        let strength = classify(length);
        debug!(
            "generated {length}-char password from {}-char pool, rated {strength}",
            pool.chars().count()
        );

        self.output = Some(Output { password, strength });
        Submission::Rendered
    }

    pub fn clear(&mut self) {
        self.output = None;
    }

    /// Copy the displayed password. Returns whether the confirmation is now showing.
    pub fn copy<S: ClipboardSink + ?Sized>(&mut self, sink: &mut S, now: Instant) -> bool {
        let Some(output) = &self.output else {
            return false;
        };
        if output.password.is_empty() {
            return false;
        }

        match sink.set_text(&output.password) {
            Ok(()) => {
                self.feedback.show(now);
                true
            }
            Err(e) => {
                error!("Failed to copy text: {e}");
                false
            }
        }
    }

    /// Entropy of the current configuration, in bits.
    pub fn entropy_bits(&self) -> f64 {
        entropy_bits(self.slider.value(), pool_size(&self.options))
    }
}
