//! Bounded undo/redo stacks.

use std::collections::VecDeque;

use tracing::debug;

use super::snapshot::Snapshot;
use super::{Direction, HistoryError};
use crate::config::HistorySettings;
use crate::frame::Frame;

/// Undo/redo history for one editing session
///
/// The undo stack is bounded; pushing past the bound evicts the oldest entry.
/// The redo stack is only valid immediately after an undo: recording a new
/// mutation clears it.
#[derive(Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    quality: u8,
    dirty: bool,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(&HistorySettings::default())
    }
}

impl HistoryManager {
    /// Create a history manager from settings
    pub fn new(settings: &HistorySettings) -> Self {
        Self::with_limits(settings.max_depth, settings.snapshot_quality)
    }

    /// Create a history manager with an explicit depth and JPEG quality
    pub fn with_limits(max_depth: usize, quality: u8) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            quality,
            dirty: false,
        }
    }

    /// Save `frame` before it gets replaced by a mutating operation
    pub fn record_before_mutation(&mut self, frame: &Frame) -> Result<(), HistoryError> {
        let snapshot = Snapshot::capture(frame, self.quality)?;
        self.push_undo(snapshot);
        if !self.redo_stack.is_empty() {
            debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.dirty = true;
        Ok(())
    }

    /// Step back one entry, returning the frame that becomes current
    ///
    /// `current` moves onto the redo stack. On any error both stacks are left
    /// exactly as they were.
    pub fn undo(&mut self, current: &Frame) -> Result<Frame, HistoryError> {
        let Some(top) = self.undo_stack.back() else {
            return Err(HistoryError::Empty(Direction::Undo));
        };
        let restored = top.restore()?;
        let saved = Snapshot::capture(current, self.quality)?;

        self.undo_stack.pop_back();
        self.redo_stack.push(saved);
        debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "Undo applied"
        );
        Ok(restored)
    }

    /// Step forward one entry, returning the frame that becomes current
    pub fn redo(&mut self, current: &Frame) -> Result<Frame, HistoryError> {
        let Some(top) = self.redo_stack.last() else {
            return Err(HistoryError::Empty(Direction::Redo));
        };
        let restored = top.restore()?;
        let saved = Snapshot::capture(current, self.quality)?;

        self.redo_stack.pop();
        self.push_undo(saved);
        debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "Redo applied"
        );
        Ok(restored)
    }

    /// Drop both stacks (a new image was loaded)
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.dirty = false;
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
            debug!("Undo stack full, evicted oldest snapshot");
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Total compressed bytes held by both stacks
    pub fn memory_usage(&self) -> usize {
        self.undo_stack
            .iter()
            .chain(self.redo_stack.iter())
            .map(Snapshot::compressed_len)
            .sum()
    }

    /// True once a mutation was recorded since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
