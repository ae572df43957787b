//! CommandInterpreter - utterance to action resolution

use tracing::debug;

use super::action::Action;
use super::fuzzy::best_match;
use super::patterns::extract_adjustment;
use crate::config::InterpreterSettings;

/// Resolves free-text utterances to editor actions
///
/// Resolution runs in two phases and the order is significant:
/// 1. fuzzy match against the zero-argument keyword vocabulary
/// 2. parameter extraction ("contrast by 120"), only if phase 1 found nothing
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    threshold: f64,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(&InterpreterSettings::default())
    }
}

impl CommandInterpreter {
    pub fn new(settings: &InterpreterSettings) -> Self {
        Self::with_threshold(settings.fuzzy_threshold)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 100.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Interpret one utterance; `None` means it was not recognized
    pub fn interpret(&self, utterance: &str) -> Option<Action> {
        let text = utterance.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        if let Some(hit) = best_match(&text, self.threshold) {
            debug!(
                keyword = hit.command.keyword(),
                score = hit.score,
                "Fuzzy command match for '{}'",
                text
            );
            return Some(hit.command.into());
        }

        if let Some((adjustment, value)) = extract_adjustment(&text) {
            debug!("Extracted {} {} from '{}'", adjustment, value, text);
            return Some(Action::Adjust { adjustment, value });
        }

        debug!("No command matched '{}'", text);
        None
    }
}
