//! Clipboard writes and the transient "copied" confirmation.

use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

pub const DEFAULT_FEEDBACK: Duration = Duration::from_secs(2);

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let owned = Zeroizing::new(text.to_owned());
        let ctx = self.context()?;
        ctx.set_contents(owned.as_str().to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// One-shot confirmation deadline. A newer copy replaces the pending deadline.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    visible_until: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        CopyFeedback {
            duration,
            visible_until: None,
        }
    }

    pub fn show(&mut self, now: Instant) {
        self.visible_until = Some(now + self.duration);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    /// Time until the confirmation reverts, if it is showing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.visible_until
            .filter(|&until| now < until)
            .map(|until| until - now)
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_reverts_after_duration() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_visible(start));

        feedback.show(start);
        assert!(feedback.is_visible(start));
        assert!(feedback.is_visible(start + Duration::from_millis(1999)));
        assert!(!feedback.is_visible(start + Duration::from_secs(2)));
        assert_eq!(feedback.remaining(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn repeated_copy_resets_deadline() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_secs(2));
        feedback.show(start);
        feedback.show(start + Duration::from_millis(1500));

        assert!(feedback.is_visible(start + Duration::from_millis(3000)));
        assert_eq!(
            feedback.remaining(start + Duration::from_millis(3000)),
            Some(Duration::from_millis(500))
        );
        assert!(!feedback.is_visible(start + Duration::from_millis(3500)));
    }
}
