//! Voice command interpretation
//!
//! Turns a recognized utterance into an editor [`Action`]. Speech-to-text is
//! imperfect ("grey scale", "blurr"), so zero-argument commands are matched
//! by string similarity rather than equality. Commands that carry a number
//! ("brightness by 50") are extracted with patterns, but only after the
//! fuzzy phase found nothing.
//!
//! Example utterances:
//! - "grey scale" -> grayscale
//! - "rotate left" -> rotate left
//! - "brighten by -20" -> brightness -20

mod action;
mod fuzzy;
mod interpret;
mod log;
mod patterns;

pub use action::{Action, Adjustment, EditCommand};
pub use fuzzy::{FuzzyMatch, best_match, similarity};
pub use interpret::CommandInterpreter;
pub use log::{CommandLog, LoggedUtterance};
pub use patterns::extract_adjustment;

#[cfg(test)]
mod tests;
