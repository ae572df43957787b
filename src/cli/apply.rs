//! Apply command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use voxedit::config::Config;
use voxedit::session::EditorSession;

/// Run each utterance against `input` and save the result to `output`
///
/// Stops at the first utterance that fails; nothing is written then.
pub async fn apply_command(
    config: &Config,
    input: &Path,
    output: &Path,
    utterances: &[String],
) -> Result<()> {
    let mut session = EditorSession::new(config);
    session
        .load_image(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    for utterance in utterances {
        let feedback = session
            .handle_utterance(utterance)
            .with_context(|| format!("Failed to apply '{}'", utterance))?;
        if let Some(request) = feedback.request {
            info!("Ignoring {:?} from '{}'", request, utterance);
            continue;
        }
        println!("{} -> {}", utterance, feedback.message);
    }

    session
        .save_image(output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("Saved {} ({})", output.display(), session.status_line());

    Ok(())
}
