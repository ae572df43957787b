//! Stoppable background threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

/// A named thread that watches a shared stop flag
pub struct Worker {
    name: &'static str,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    grace: Duration,
}

impl Worker {
    /// Spawn `body`, handing it the stop flag it must poll
    pub fn spawn<F>(name: &'static str, grace: Duration, body: F) -> std::io::Result<Self>
    where
        F: FnOnce(Arc<AtomicBool>) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || body(flag))?;
        info!("Started {} worker", name);
        Ok(Self {
            name,
            stop,
            handle: Some(handle),
            grace,
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Raise the stop flag and wait up to the grace period
    ///
    /// Returns `true` when the thread finished in time. Otherwise the thread
    /// is detached and left to exit on its own.
    pub fn stop(&mut self) -> bool {
        self.stop.store(true, Ordering::SeqCst);
        let Some(handle) = self.handle.take() else {
            return true;
        };

        let deadline = Instant::now() + self.grace;
        while !handle.is_finished() {
            if Instant::now() >= deadline {
                warn!(
                    "{} worker did not stop within {:?}, detaching",
                    self.name, self.grace
                );
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }

        if handle.join().is_err() {
            warn!("{} worker panicked", self.name);
        }
        info!("Stopped {} worker", self.name);
        true
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
        }
    }
}

/// Sleep for `duration` in short slices, returning early once `stop` is set
///
/// Returns `false` when interrupted by the stop flag.
pub fn sleep_unless_stopped(duration: Duration, stop: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        if stop.load(Ordering::SeqCst) {
            return false;
        }
        let left = deadline.saturating_duration_since(Instant::now());
        thread::sleep(left.min(Duration::from_millis(20)));
    }
    !stop.load(Ordering::SeqCst)
}
