//! Recently opened files

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Most recent first, no duplicates
#[derive(Debug, Clone)]
pub struct RecentFiles {
    paths: VecDeque<PathBuf>,
    capacity: usize,
}

impl RecentFiles {
    pub fn new(capacity: usize) -> Self {
        Self {
            paths: VecDeque::new(),
            capacity,
        }
    }

    /// Move `path` to the front, dropping the oldest entry past capacity
    pub fn push(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
        self.paths.push_front(path.to_path_buf());
        self.paths.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
