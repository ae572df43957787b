//! Parameterized command extraction ("brightness by 50").

use once_cell::sync::Lazy;
use regex::Regex;

use super::action::Adjustment;

/// Adjustment patterns in priority order
static PATTERNS: Lazy<Vec<(Adjustment, Regex)>> = Lazy::new(|| {
    Adjustment::PRIORITY
        .iter()
        .map(|&adjustment| {
            let keywords = match adjustment {
                Adjustment::Brightness => "brightness|brighten",
                Adjustment::Contrast => "contrast",
                Adjustment::Saturation => "saturation|saturate",
                Adjustment::Hue => "hue",
            };
            let pattern = format!(r"(?:{})\s*(?:by)?\s*(-?[0-9]+)", keywords);
            (adjustment, Regex::new(&pattern).expect("adjustment pattern is valid"))
        })
        .collect()
});

/// Find the first adjustment pattern present anywhere in `text`
///
/// Patterns are tried in [`Adjustment::PRIORITY`] order and evaluation stops
/// at the first one that matches. Numbers too large for `i32` saturate.
pub fn extract_adjustment(text: &str) -> Option<(Adjustment, i32)> {
    for (adjustment, regex) in PATTERNS.iter() {
        let Some(captures) = regex.captures(text) else {
            continue;
        };
        let digits = &captures[1];
        let value = match digits.parse::<i64>() {
            Ok(v) => v.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            Err(_) if digits.starts_with('-') => i32::MIN,
            Err(_) => i32::MAX,
        };
        return Some((*adjustment, value));
    }
    None
}
