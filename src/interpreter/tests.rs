//! Unit tests for command interpretation.

use super::*;

fn interpret(text: &str) -> Option<Action> {
    CommandInterpreter::default().interpret(text)
}

#[test]
fn test_misheard_keyword_resolves_by_similarity() {
    assert_eq!(interpret("grey scale"), Some(EditCommand::Grayscale.into()));
    assert_eq!(interpret("blurr"), Some(EditCommand::Blur.into()));
    assert_eq!(interpret("rotate lift"), Some(EditCommand::RotateLeft.into()));
    assert!(similarity("grey scale", "grayscale") > 75.0);
}

#[test]
fn test_exact_keywords_are_case_and_space_insensitive() {
    assert_eq!(interpret("  UNDO "), Some(EditCommand::Undo.into()));
    assert_eq!(interpret("Flip Vertical"), Some(EditCommand::FlipVertical.into()));
    assert_eq!(interpret("reset"), Some(EditCommand::ResetImage.into()));
    assert_eq!(interpret("reset zoom"), Some(EditCommand::ResetZoom.into()));
}

#[test]
fn test_parameter_extraction_after_fuzzy_miss() {
    assert_eq!(
        interpret("brightness by 50"),
        Some(Action::Adjust {
            adjustment: Adjustment::Brightness,
            value: 50
        })
    );
    assert_eq!(
        interpret("brighten by -20"),
        Some(Action::Adjust {
            adjustment: Adjustment::Brightness,
            value: -20
        })
    );
    assert_eq!(
        interpret("set the contrast 120 please"),
        Some(Action::Adjust {
            adjustment: Adjustment::Contrast,
            value: 120
        })
    );
    assert_eq!(
        interpret("saturate by 150"),
        Some(Action::Adjust {
            adjustment: Adjustment::Saturation,
            value: 150
        })
    );
}

#[test]
fn test_fuzzy_phase_runs_before_extraction() {
    // Close enough to the bare "saturation" keyword to be taken as the boost
    assert_eq!(interpret("saturation 50"), Some(EditCommand::SaturationBoost.into()));
    // Longer phrasing falls below the threshold and keeps its number
    assert_eq!(
        interpret("saturation by 50"),
        Some(Action::Adjust {
            adjustment: Adjustment::Saturation,
            value: 50
        })
    );
}

#[test]
fn test_first_pattern_in_priority_order_wins() {
    assert_eq!(
        interpret("hue 30 and brightness 10"),
        Some(Action::Adjust {
            adjustment: Adjustment::Brightness,
            value: 10
        })
    );
}

#[test]
fn test_values_are_not_clamped_by_interpreter() {
    assert_eq!(
        interpret("hue by -400"),
        Some(Action::Adjust {
            adjustment: Adjustment::Hue,
            value: -400
        })
    );
    assert_eq!(
        extract_adjustment("brightness 99999999999999999999999"),
        Some((Adjustment::Brightness, i32::MAX))
    );
}

#[test]
fn test_only_ascii_digits_are_parameters() {
    // U+0665 is ARABIC-INDIC DIGIT FIVE
    assert_eq!(interpret("brightness by \u{0665}"), None);
    assert_eq!(extract_adjustment("contrast -\u{0663}"), None);
    assert_eq!(
        extract_adjustment("brightness by 5"),
        Some((Adjustment::Brightness, 5))
    );
}

#[test]
fn test_unrecognized_utterances() {
    assert_eq!(interpret("xyzzy"), None);
    assert_eq!(interpret(""), None);
    assert_eq!(interpret("   "), None);
    assert_eq!(interpret("make it pop"), None);
}

#[test]
fn test_tie_goes_to_earlier_keyword() {
    // "xdo" is two edits away from both "undo" and "redo"
    assert_eq!(similarity("xdo", "undo"), similarity("xdo", "redo"));
    let hit = best_match("xdo", 40.0).unwrap();
    assert_eq!(hit.command, EditCommand::Undo);
    assert_eq!(hit.score, 50.0);
}

#[test]
fn test_threshold_is_exclusive() {
    // "rndo" vs "undo": one substitution in four characters = exactly 75
    assert_eq!(similarity("rndo", "undo"), 75.0);
    assert!(best_match("rndo", 75.0).is_none_or(|m| m.command != EditCommand::Undo));
}

#[test]
fn test_vocabulary_order_and_keywords() {
    assert_eq!(EditCommand::ALL.len(), 22);
    assert_eq!(EditCommand::ALL[0], EditCommand::Grayscale);
    assert_eq!(EditCommand::ALL[21], EditCommand::Exit);
    for command in EditCommand::ALL {
        assert_eq!(command.keyword(), command.keyword().to_lowercase());
    }
}

#[test]
fn test_adjustment_ranges() {
    assert_eq!(Adjustment::Brightness.clamp(250), 100);
    assert_eq!(Adjustment::Contrast.clamp(-5), 0);
    assert_eq!(Adjustment::Hue.clamp(190), 180);
    assert_eq!(Adjustment::Saturation.identity(), 100);
}

#[test]
fn test_action_serializes_with_kind_tag() {
    let json = serde_json::to_string(&Action::Adjust {
        adjustment: Adjustment::Hue,
        value: 30,
    })
    .unwrap();
    assert_eq!(json, r#"{"kind":"adjust","adjustment":"hue","value":30}"#);

    let json = serde_json::to_string(&Action::from(EditCommand::RotateLeft)).unwrap();
    assert_eq!(json, r#"{"kind":"command","command":"rotate_left"}"#);
}

#[test]
fn test_command_log_is_bounded_and_newest_first() {
    let mut log = CommandLog::new(15);
    for i in 0..20 {
        log.push(format!("utterance {}", i), i % 2 == 0);
    }
    assert_eq!(log.len(), 15);

    let texts: Vec<&str> = log.recent().map(|e| e.text.as_str()).collect();
    assert_eq!(texts.first(), Some(&"utterance 19"));
    assert_eq!(texts.last(), Some(&"utterance 5"));
}
