//! Interactive session command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use voxedit::config::Config;
use voxedit::session::{EditorSession, Feedback, SessionError, ShellRequest, help_text};
use voxedit::voice::{SystemSynthesizer, VoiceEvent, VoiceManager, WhisperRecognizer};

/// How often voice events are collected
const VOICE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shell commands that are not editor utterances
#[derive(Debug, Clone, PartialEq)]
enum Meta {
    Save(Option<PathBuf>),
    History,
    Status,
    Help,
    Quit,
}

/// Parse a `:command` line; `None` for ordinary utterances
fn parse_meta(line: &str) -> Option<Result<Meta, String>> {
    let rest = line.trim().strip_prefix(':')?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    let meta = match name {
        "save" | "w" => Meta::Save(arg.map(PathBuf::from)),
        "history" => Meta::History,
        "status" => Meta::Status,
        "help" => Meta::Help,
        "quit" | "q" => Meta::Quit,
        other => return Some(Err(format!("Unknown command ':{}'", other))),
    };
    Some(Ok(meta))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

struct Shell {
    session: EditorSession,
    voice: Option<VoiceManager>,
    speak_feedback: bool,
}

impl Shell {
    fn handle_line(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }
        match parse_meta(line) {
            Some(Ok(meta)) => self.handle_meta(meta),
            Some(Err(message)) => {
                eprintln!("{}", message);
                Flow::Continue
            }
            None => self.handle_utterance(line),
        }
    }

    fn handle_meta(&mut self, meta: Meta) -> Flow {
        match meta {
            Meta::Save(path) => {
                let Some(path) = path.or_else(|| self.session.path().map(Path::to_path_buf)) else {
                    eprintln!("No path to save to; use :save PATH");
                    return Flow::Continue;
                };
                let result = self.session.save_image(&path);
                self.report(result);
            }
            Meta::History => {
                if self.session.command_log().is_empty() {
                    println!("No commands yet.");
                }
                for entry in self.session.command_log().recent() {
                    let marker = if entry.recognized { ' ' } else { '?' };
                    println!(
                        "  {} {}{}",
                        entry.received_at.format("%H:%M:%S"),
                        marker,
                        entry.text
                    );
                }
            }
            Meta::Status => self.print_status(),
            Meta::Help => {
                println!("{}", help_text());
                println!("Shell: :save [PATH], :history, :status, :help, :quit");
            }
            Meta::Quit => return Flow::Exit,
        }
        Flow::Continue
    }

    fn handle_utterance(&mut self, text: &str) -> Flow {
        let result = self.session.handle_utterance(text);
        self.report(result)
    }

    /// Show (and maybe speak) the outcome of one operation
    fn report(&mut self, result: Result<Feedback, SessionError>) -> Flow {
        match result {
            Ok(feedback) => {
                match feedback.request {
                    Some(ShellRequest::Exit) => return Flow::Exit,
                    Some(ShellRequest::ShowHelp) => println!("{}", feedback.message),
                    None => {
                        println!("{}", feedback.message);
                        if feedback.refresh {
                            println!("{}", self.session.status_line());
                        }
                    }
                }
                if feedback.speak && self.speak_feedback {
                    if let Some(voice) = &self.voice {
                        voice.speak(feedback.message);
                    }
                }
            }
            Err(err) => eprintln!("{}", err),
        }
        Flow::Continue
    }

    fn print_status(&self) {
        println!("{}", self.session.status_line());
        let values = self.session.adjustment_values();
        println!(
            "Brightness: {}  Contrast: {}  Saturation: {}  Hue: {}",
            values.brightness, values.contrast, values.saturation, values.hue
        );
        let history = self.session.history();
        println!(
            "History: {} undo, {} redo ({} KB)",
            history.undo_len(),
            history.redo_len(),
            history.memory_usage() / 1024
        );
        if let Some(voice) = &self.voice {
            println!("Voice: {}", voice.state);
        }
    }

    fn poll_voice(&mut self) -> Flow {
        let events = match &mut self.voice {
            Some(voice) => voice.poll_events(),
            None => return Flow::Continue,
        };
        for event in events {
            match event {
                VoiceEvent::Recognized { text } => {
                    println!("> {}", text);
                    if self.handle_utterance(&text) == Flow::Exit {
                        return Flow::Exit;
                    }
                }
                VoiceEvent::Error { message } => eprintln!("{}", message),
                VoiceEvent::StateChanged(state) => debug!("Voice: {}", state),
            }
        }
        Flow::Continue
    }
}

/// Start the voice workers, or explain why they cannot run
fn start_voice(config: &Config) -> Option<VoiceManager> {
    let recognizer = WhisperRecognizer::new(&config.voice);
    if let Err(e) = recognizer.check_availability() {
        eprintln!("Voice unavailable: {}", e);
        return None;
    }

    let mut voice = VoiceManager::new(&config.voice);
    let synthesizer = SystemSynthesizer::new(config.voice.speech_rate);
    if let Err(e) = voice.start(Box::new(recognizer), Box::new(synthesizer)) {
        warn!("Failed to start voice workers: {}", e);
        return None;
    }
    voice.speak("Voice control activated");
    Some(voice)
}

/// Edit `input` interactively until `:quit`, "exit", end of input or Ctrl-C
pub async fn session_command(config: &Config, input: &Path, voice: bool) -> Result<()> {
    let mut session = EditorSession::new(config);
    let loaded = session
        .load_image(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let voice = if voice || config.voice.enabled {
        start_voice(config)
    } else {
        None
    };
    let mut shell = Shell {
        session,
        voice,
        speak_feedback: config.voice.speak_feedback,
    };
    shell.report(Ok(loaded));
    println!("Type a command (\":help\" lists them).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(VOICE_POLL_INTERVAL);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                if shell.handle_line(&line) == Flow::Exit {
                    break;
                }
            }
            _ = ticker.tick() => {
                if shell.poll_voice() == Flow::Exit {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    if shell.session.is_dirty() {
        warn!("Exiting with unsaved changes");
    }
    if let Some(mut voice) = shell.voice.take() {
        voice.stop();
    }
    Ok(())
}
