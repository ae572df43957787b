//! Editor session
//!
//! [`EditorSession`] owns everything one editing session needs: the current
//! and original frame, undo/redo history, adjustment baselines, zoom and the
//! utterance log. Hosts drive it either through direct calls (buttons,
//! sliders) or by handing it utterances, and render the returned
//! [`Feedback`].
//!
//! Every operation that replaces the current frame records it in history
//! first. Failures leave the session untouched and come back as
//! [`SessionError`].

mod error;
mod feedback;
mod recent;
mod zoom;


pub use error::SessionError;
pub use feedback::{Feedback, ShellRequest, help_text};
pub use recent::RecentFiles;
pub use zoom::Zoom;

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tracing::{debug, info};

use crate::adjust::{AdjustmentState, AdjustmentValues};
use crate::config::{Config, EditorSettings};
use crate::filters::Filter;
use crate::frame::Frame;
use crate::history::HistoryManager;
use crate::interpreter::{Action, Adjustment, CommandInterpreter, CommandLog, EditCommand};

/// Saturation level used by the "saturation" quick command
const SATURATION_BOOST: i32 = 150;

type Result<T> = std::result::Result<T, SessionError>;

pub struct EditorSession {
    current: Option<Frame>,
    original: Option<Frame>,
    path: Option<PathBuf>,
    zoom: Zoom,
    history: HistoryManager,
    adjustments: AdjustmentState,
    /// Adjustment moved by the previous operation; further moves of the same
    /// one belong to the same gesture and share a history entry
    last_adjustment: Option<Adjustment>,
    interpreter: CommandInterpreter,
    log: CommandLog,
    recent: RecentFiles,
    settings: EditorSettings,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl EditorSession {
    pub fn new(config: &Config) -> Self {
        Self {
            current: None,
            original: None,
            path: None,
            zoom: Zoom::default(),
            history: HistoryManager::new(&config.history),
            adjustments: AdjustmentState::default(),
            last_adjustment: None,
            interpreter: CommandInterpreter::new(&config.interpreter),
            log: CommandLog::new(config.interpreter.command_log_size),
            recent: RecentFiles::new(config.editor.max_recent_files),
            settings: config.editor.clone(),
        }
    }

    // ========== Loading & saving ==========

    /// Decode and install an image from disk
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<Feedback> {
        let path = path.as_ref();
        let image = image::open(path)?;
        self.install(Frame::from_dynamic(image));
        self.path = Some(path.to_path_buf());
        self.recent.push(path);

        let name = display_name(path);
        info!("Loaded {} ({})", path.display(), self.dimensions_label());
        Ok(Feedback::spoken(format!("Image loaded: {}", name)))
    }

    /// Install an already decoded frame
    pub fn load_frame(&mut self, frame: Frame) -> Feedback {
        self.install(frame);
        self.path = None;
        info!("Loaded frame ({})", self.dimensions_label());
        Feedback::spoken("Image loaded")
    }

    fn install(&mut self, frame: Frame) {
        let frame = self.downscale(frame);
        self.original = Some(frame.clone());
        self.current = Some(frame);
        self.zoom.reset();
        self.history.clear();
        self.adjustments.clear();
        self.last_adjustment = None;
    }

    fn downscale(&self, frame: Frame) -> Frame {
        let max = self.settings.max_dimension;
        if max == 0 || (frame.width() <= max && frame.height() <= max) {
            return frame;
        }
        debug!(
            "Downscaling {}x{} to fit {}px",
            frame.width(),
            frame.height(),
            max
        );
        let resized = frame.as_dynamic().resize(max, max, FilterType::Triangle);
        Frame::from_dynamic(resized)
    }

    /// Encode the current frame; the format follows the extension
    pub fn save_image(&mut self, path: impl AsRef<Path>) -> Result<Feedback> {
        let path = path.as_ref();
        let frame = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;

        let is_jpeg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));
        if is_jpeg && frame.layout().has_alpha() {
            // JPEG has no alpha channel
            image::DynamicImage::ImageRgb8(frame.as_dynamic().to_rgb8()).save(path)?;
        } else {
            frame.as_dynamic().save(path)?;
        }

        self.history.mark_clean();
        // A save ends the gesture so the next move is recorded and dirties again
        self.last_adjustment = None;
        self.path = Some(path.to_path_buf());
        self.recent.push(path);
        info!("Saved {}", path.display());
        Ok(Feedback::spoken("Image saved"))
    }

    // ========== Filters & transforms ==========

    pub fn apply_filter(&mut self, filter: Filter) -> Result<Feedback> {
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        self.history.record_before_mutation(current)?;
        let next = filter.apply(current);
        self.replace(next);
        self.last_adjustment = None;
        Ok(Feedback::spoken(filter.confirmation()))
    }

    // ========== Adjustments ==========

    pub fn apply_brightness(&mut self, value: i32) -> Result<Feedback> {
        self.apply_adjustment(Adjustment::Brightness, value)
    }

    pub fn apply_contrast(&mut self, value: i32) -> Result<Feedback> {
        self.apply_adjustment(Adjustment::Contrast, value)
    }

    pub fn apply_saturation(&mut self, value: i32) -> Result<Feedback> {
        self.apply_adjustment(Adjustment::Saturation, value)
    }

    pub fn apply_hue(&mut self, value: i32) -> Result<Feedback> {
        self.apply_adjustment(Adjustment::Hue, value)
    }

    /// Move one adjustment slider to `value` (clamped to its range)
    pub fn apply_adjustment(&mut self, adjustment: Adjustment, value: i32) -> Result<Feedback> {
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        if self.last_adjustment != Some(adjustment) {
            self.history.record_before_mutation(current)?;
        }
        let next = self.adjustments.apply(adjustment, value, current);
        self.replace(next);
        self.last_adjustment = Some(adjustment);

        let value = self.adjustments.values().get(adjustment);
        Ok(Feedback::status(format!(
            "{}: {}",
            capitalize(adjustment.name()),
            value
        )))
    }

    /// Return every slider to its identity value and forget the baselines
    pub fn reset_adjustments(&mut self) -> Result<Feedback> {
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        if self.adjustments.values().is_identity() {
            self.adjustments.clear();
            return Ok(Feedback::status("Adjustments reset"));
        }

        self.history.record_before_mutation(current)?;
        if let Some(next) = self.adjustments.reset(current) {
            self.replace(next);
        }
        self.last_adjustment = None;
        Ok(Feedback::status("Adjustments reset"))
    }

    // ========== History ==========

    /// Go back to the original frame; undoable
    pub fn reset_image(&mut self) -> Result<Feedback> {
        let original = self.original.as_ref().ok_or(SessionError::NoOriginal)?;
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        self.history.record_before_mutation(current)?;
        let next = original.clone();
        self.replace(next);
        self.last_adjustment = None;
        Ok(Feedback::spoken("Image reset"))
    }

    pub fn undo(&mut self) -> Result<Feedback> {
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let previous = self.history.undo(current)?;
        self.replace(previous);
        self.last_adjustment = None;
        Ok(Feedback::spoken("Undo applied"))
    }

    pub fn redo(&mut self) -> Result<Feedback> {
        let current = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let next = self.history.redo(current)?;
        self.replace(next);
        self.last_adjustment = None;
        Ok(Feedback::spoken("Redo applied"))
    }

    fn replace(&mut self, frame: Frame) {
        self.current = Some(frame);
    }

    // ========== Zoom ==========

    pub fn zoom_in(&mut self) -> Result<Feedback> {
        self.require_image()?;
        self.zoom.zoom_in();
        Ok(Feedback::status(self.status_line()))
    }

    pub fn zoom_out(&mut self) -> Result<Feedback> {
        self.require_image()?;
        self.zoom.zoom_out();
        Ok(Feedback::status(self.status_line()))
    }

    pub fn reset_zoom(&mut self) -> Result<Feedback> {
        self.require_image()?;
        self.zoom.reset();
        Ok(Feedback::status(self.status_line()))
    }

    pub fn fit_to_window(&mut self) -> Result<Feedback> {
        let frame = self.current.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let viewport = (self.settings.viewport_width, self.settings.viewport_height);
        self.zoom.fit((frame.width(), frame.height()), viewport);
        Ok(Feedback::status(self.status_line()))
    }

    /// Resize the visible area used by fit-to-window
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.settings.viewport_width = width;
        self.settings.viewport_height = height;
    }

    fn require_image(&self) -> Result<()> {
        match self.current {
            Some(_) => Ok(()),
            None => Err(SessionError::NoImageLoaded),
        }
    }

    // ========== Commands ==========

    /// Log, interpret and run one utterance
    ///
    /// The utterance is logged whether or not it is recognized.
    pub fn handle_utterance(&mut self, utterance: &str) -> Result<Feedback> {
        let action = self.interpreter.interpret(utterance);
        self.log.push(utterance, action.is_some());

        match action {
            Some(action) => {
                info!("'{}' -> {}", utterance.trim(), action);
                self.execute(action)
            }
            None => {
                info!("'{}' not recognized", utterance.trim());
                Err(SessionError::Unrecognized(utterance.trim().to_string()))
            }
        }
    }

    /// Run one resolved action
    pub fn execute(&mut self, action: Action) -> Result<Feedback> {
        let command = match action {
            Action::Adjust { adjustment, value } => {
                return self.apply_adjustment(adjustment, value);
            }
            Action::Command { command } => command,
        };

        if let Some(filter) = Filter::from_command(command) {
            return self.apply_filter(filter);
        }

        match command {
            EditCommand::SaturationBoost => {
                self.apply_adjustment(Adjustment::Saturation, SATURATION_BOOST)
            }
            EditCommand::ZoomIn => self.zoom_in(),
            EditCommand::ZoomOut => self.zoom_out(),
            EditCommand::ResetZoom => self.reset_zoom(),
            EditCommand::FitToWindow => self.fit_to_window(),
            EditCommand::Undo => self.undo(),
            EditCommand::Redo => self.redo(),
            EditCommand::ResetImage => self.reset_image(),
            EditCommand::Help => Ok(Feedback::request(ShellRequest::ShowHelp, help_text())),
            EditCommand::Exit => Ok(Feedback::request(ShellRequest::Exit, "Goodbye")),
            // Filter commands were dispatched above
            _ => Ok(Feedback::status(self.status_line())),
        }
    }

    // ========== Accessors ==========

    /// `Image: W×H[*] | Zoom: N%`, `*` marking unsaved changes
    pub fn status_line(&self) -> String {
        match &self.current {
            Some(frame) => format!(
                "Image: {}×{}{} | Zoom: {}%",
                frame.width(),
                frame.height(),
                if self.is_dirty() { "*" } else { "" },
                self.zoom.percent()
            ),
            None => "No image loaded".to_string(),
        }
    }

    fn dimensions_label(&self) -> String {
        self.current
            .as_ref()
            .map(|f| format!("{}x{} {}", f.width(), f.height(), f.layout()))
            .unwrap_or_default()
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn original(&self) -> Option<&Frame> {
        self.original.as_ref()
    }

    /// Path the current image was loaded from or last saved to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn adjustment_values(&self) -> AdjustmentValues {
        self.adjustments.values()
    }

    pub fn command_log(&self) -> &CommandLog {
        &self.log
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// Unsaved changes since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.history.is_dirty()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
