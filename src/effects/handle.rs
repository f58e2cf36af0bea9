//! Effect Runtime - Timer threads driving the typewriter
//!
//! [`start_typewriter`] validates the configuration, then spawns two
//! background timer threads: one drives the progression machine at the
//! variable per-tick delay it reports, the other toggles the blink phase at
//! a fixed period. The two timers are independent; nothing may assume their
//! relative firing order.
//!
//! Reads are snapshots: [`TypewriterHandle::current_text`] locks the
//! progression state and samples the blink phase atomically. [`stop`] wakes
//! both sleepers, joins them, and guarantees no further mutation after it
//! returns; calling it again is a no-op.
//!
//! # Example
//!
//! ```no_run
//! use folio_tui::effects::{start_typewriter, TypewriterOptions};
//!
//! let phrases = vec!["Builder".to_string(), "Breaker".to_string()];
//! let handle = start_typewriter(phrases, TypewriterOptions::default()).unwrap();
//!
//! let line = handle.current_text();
//! handle.stop();
//! ```
//!
//! [`stop`]: TypewriterHandle::stop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::blink::BlinkState;
use super::typewriter::{ConfigError, MIN_TICK_INTERVAL, Typewriter, TypewriterOptions};

// =============================================================================
// Shared state
// =============================================================================

/// State shared between the handle and the two timer threads.
struct Shared {
    /// Progression machine, mutated only by the progression thread.
    machine: Mutex<Typewriter>,
    /// Blink phase, mirrored from the blink thread's local state.
    cursor_visible: AtomicBool,
    /// Cleared by `stop()`; guarded by a mutex so sleepers can wait on it.
    running: Mutex<bool>,
    /// Wakes both timer threads when `running` is cleared.
    wake: Condvar,
}

impl Shared {
    /// Sleep for `timeout` or until stopped, whichever comes first.
    ///
    /// Returns true when the timer should fire, false when shutting down.
    fn sleep(&self, timeout: Duration) -> bool {
        let running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        let (running, _) = self
            .wake
            .wait_timeout_while(running, timeout, |running| *running)
            .unwrap_or_else(PoisonError::into_inner);
        *running
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Handle to a running typewriter effect.
///
/// Dropping the handle stops the effect.
pub struct TypewriterHandle {
    shared: Arc<Shared>,
    /// Timer threads, taken by the first `stop()`.
    threads: Mutex<Vec<JoinHandle<()>>>,
}

impl std::fmt::Debug for TypewriterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypewriterHandle").finish_non_exhaustive()
    }
}

impl TypewriterHandle {
    /// Snapshot the current display string: the visible phrase prefix plus
    /// the cursor glyph when the blink phase is on.
    ///
    /// After [`TypewriterHandle::stop`] the state is inert, so this keeps
    /// returning the last composed value.
    pub fn current_text(&self) -> String {
        let machine = self
            .shared
            .machine
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        machine.display(self.shared.cursor_visible.load(Ordering::SeqCst))
    }

    /// Whether the timers are still running.
    pub fn is_running(&self) -> bool {
        *self
            .shared
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Cancel both timers.
    ///
    /// Wakes the sleeping timer threads and joins them, so no state mutation
    /// happens after this returns. Idempotent: the second call finds no
    /// threads left to join and does nothing.
    pub fn stop(&self) {
        {
            let mut running = self
                .shared
                .running
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if !*running {
                return;
            }
            *running = false;
        }
        self.shared.wake.notify_all();

        let threads = {
            let mut threads = self
                .threads
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *threads)
        };
        for handle in threads {
            let _ = handle.join();
        }
        log::debug!("typewriter stopped");
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Start
// =============================================================================

/// Start the typewriter effect.
///
/// Validates `phrases` and `options` synchronously (empty phrase lists and
/// zero intervals are rejected before any timer starts), then spawns the
/// progression and blink timer threads.
pub fn start_typewriter(
    phrases: Vec<String>,
    options: TypewriterOptions,
) -> Result<TypewriterHandle, ConfigError> {
    let machine = Typewriter::new(phrases, options)?;
    let first_delay = machine.options().typing_interval.max(MIN_TICK_INTERVAL);
    let blink_interval = machine.options().cursor_blink_interval;
    log::debug!(
        "typewriter started: {} phrases, first tick in {:?}",
        machine.phrases().len(),
        first_delay
    );

    let shared = Arc::new(Shared {
        machine: Mutex::new(machine),
        cursor_visible: AtomicBool::new(true),
        running: Mutex::new(true),
        wake: Condvar::new(),
    });

    let progression = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut delay = first_delay;
            while shared.sleep(delay) {
                let mut machine = shared
                    .machine
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                delay = machine.tick();
            }
        })
    };

    let blink = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut state = BlinkState::new();
            while shared.sleep(blink_interval) {
                state.tick();
                shared
                    .cursor_visible
                    .store(state.is_visible(), Ordering::SeqCst);
            }
        })
    };

    Ok(TypewriterHandle {
        shared,
        threads: Mutex::new(vec![progression, blink]),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn fast() -> TypewriterOptions {
        // 10ms configured, so progression runs at the 50ms floor.
        TypewriterOptions::from_speed(Duration::from_millis(10))
    }

    #[test]
    fn test_invalid_config_rejected_before_spawn() {
        assert_eq!(
            start_typewriter(Vec::new(), fast()).unwrap_err(),
            ConfigError::EmptyPhrases
        );

        let mut options = fast();
        options.typing_interval = Duration::ZERO;
        assert!(start_typewriter(vec!["x".to_string()], options).is_err());
    }

    #[test]
    fn test_effect_makes_progress() {
        let handle = start_typewriter(vec!["hello".to_string()], fast()).unwrap();

        // Poll until at least one character is typed; generous deadline so
        // a slow CI machine cannot make this flaky.
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let text = handle.current_text();
            let without_cursor = text.trim_end_matches(super::super::CURSOR_GLYPH);
            if !without_cursor.is_empty() {
                break;
            }
            assert!(Instant::now() < deadline, "no progress before deadline");
            thread::sleep(Duration::from_millis(10));
        }

        handle.stop();
    }

    #[test]
    fn test_stop_freezes_text() {
        let handle = start_typewriter(vec!["frozen".to_string()], fast()).unwrap();
        handle.stop();
        assert!(!handle.is_running());

        let before = handle.current_text();
        thread::sleep(Duration::from_millis(200));
        assert_eq!(handle.current_text(), before);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let handle = start_typewriter(vec!["twice".to_string()], fast()).unwrap();
        handle.stop();
        handle.stop();
        assert!(!handle.is_running());
    }

    #[test]
    fn test_drop_stops_effect() {
        let handle = start_typewriter(vec!["dropped".to_string()], fast()).unwrap();
        let shared = Arc::clone(&handle.shared);
        drop(handle);
        assert!(!*shared.running.lock().unwrap());
    }
}
