//! Spinner shown while the panel is thinking

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner that can be disabled, printing through it when active
pub struct TurnSpinner {
    bar: Option<ProgressBar>,
}

impl TurnSpinner {
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        Self { bar }
    }

    /// A spinner that never draws
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    pub fn set_message(&self, message: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.into());
        }
    }

    /// Print a line without tearing the spinner
    pub fn println(&self, text: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{}", text)),
            None => println!("{}", text),
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for TurnSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_is_inert() {
        let spinner = TurnSpinner::hidden();
        assert!(!spinner.is_active());
        spinner.set_message("thinking");
        spinner.finish();
    }

    #[test]
    fn test_enabled_spinner_finishes() {
        let spinner = TurnSpinner::new(true);
        assert!(spinner.is_active());
        spinner.set_message("Expert 1 is thinking...");
        spinner.finish();
    }
}
