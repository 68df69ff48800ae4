use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// A quit request flag that supports interruptible waits.
///
/// The pattern playback and the game-over screen spend most of their time
/// sleeping. Sleeping on this signal instead of `thread::sleep()` lets a
/// Ctrl+C arriving on the signal-handler thread cut those pauses short.
pub struct QuitSignal {
    requested: AtomicBool,
    condvar: Condvar,
    mutex: Mutex<()>,
}

impl QuitSignal {
    /// Create a new signal with no quit requested.
    pub fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            condvar: Condvar::new(),
            mutex: Mutex::new(()),
        }
    }

    /// Request quit, waking every thread currently waiting on the signal.
    pub fn trigger(&self) {
        self.requested.store(true, Ordering::SeqCst);
        self.condvar.notify_all();
    }

    /// Check whether quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Wait for the given duration or until quit is requested.
    ///
    /// Returns `true` if quit was requested, `false` if the full duration
    /// elapsed.
    pub fn wait(&self, duration: Duration) -> bool {
        if self.is_quit() {
            return true;
        }

        let Ok(guard) = self.mutex.lock() else {
            // Poisoned mutex, treat as quit
            return true;
        };
        let result = self
            .condvar
            .wait_timeout_while(guard, duration, |_| !self.is_quit());

        match result {
            Ok((_, timeout_result)) => !timeout_result.timed_out(),
            Err(_) => true,
        }
    }
}

impl Default for QuitSignal {
    fn default() -> Self {
        Self::new()
    }
}
