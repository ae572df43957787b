//! Interpret command implementation

use anyhow::Result;
use serde::Serialize;

use voxedit::config::Config;
use voxedit::interpreter::{Action, CommandInterpreter, best_match};

#[derive(Serialize)]
struct Interpretation<'a> {
    utterance: &'a str,
    action: Option<Action>,
    /// Similarity of the best keyword, when the fuzzy phase matched
    score: Option<f64>,
}

/// Print how an utterance resolves, without touching any image
pub async fn interpret_command(config: &Config, utterance: &str, json: bool) -> Result<()> {
    let interpreter = CommandInterpreter::new(&config.interpreter);
    let action = interpreter.interpret(utterance);
    let score = best_match(&utterance.trim().to_lowercase(), interpreter.threshold()).map(|m| m.score);

    if json {
        let output = Interpretation {
            utterance,
            action,
            score,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match (action, score) {
        (Some(action), Some(score)) => println!("{} -> {} (score {:.0})", utterance, action, score),
        (Some(action), None) => println!("{} -> {}", utterance, action),
        (None, _) => println!("{} -> not recognized", utterance),
    }
    Ok(())
}
