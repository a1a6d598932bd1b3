// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Countdown with auto-submit for timed quiz mode.
//!
//! Two things can end a timed quiz: the user submitting, or the clock running
//! out. They can arrive at nearly the same instant. [`SubmissionGate`] is the
//! referee: whoever flips it first owns the submission, and the loser becomes
//! a no-op. The timer thread additionally checks its cancellation flag under
//! the same lock `cancel()` takes, so once `cancel()` returns the timer can
//! no longer commit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Default time limit for a timed paper.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60 * 60);

/// One-shot latch deciding who submits.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    committed: AtomicBool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the submission. `true` exactly once over the gate's lifetime.
    pub fn try_commit(&self) -> bool {
        self.committed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_committed(&self) -> bool {
        self.committed.load(Ordering::Acquire)
    }
}

#[derive(Debug, Default)]
struct TimerShared {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

/// A running countdown. Dropping it cancels it.
#[derive(Debug)]
pub struct QuizTimer {
    shared: Arc<TimerShared>,
    deadline: Instant,
    handle: Option<JoinHandle<bool>>,
}

impl QuizTimer {
    /// Start counting down `limit`. When it elapses, `on_expire` runs on the
    /// timer thread if and only if the timer wins `gate`.
    pub fn start<F>(limit: Duration, gate: Arc<SubmissionGate>, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let shared = Arc::new(TimerShared::default());
        let deadline = Instant::now() + limit;
        let thread_shared = Arc::clone(&shared);

        let handle = thread::spawn(move || {
            let mut cancelled = thread_shared.cancelled.lock();
            while !*cancelled {
                if thread_shared
                    .wake
                    .wait_until(&mut cancelled, deadline)
                    .timed_out()
                {
                    break;
                }
            }
            if *cancelled {
                tracing::debug!("quiz timer cancelled before expiry");
                return false;
            }
            let won = gate.try_commit();
            drop(cancelled);

            if won {
                tracing::info!("time is up, auto-submitting");
                on_expire();
            } else {
                tracing::debug!("quiz timer expired after manual submission");
            }
            won
        });

        Self {
            shared,
            deadline,
            handle: Some(handle),
        }
    }

    /// Stop the countdown. After this returns the timer will not submit.
    pub fn cancel(&self) {
        let mut cancelled = self.shared.cancelled.lock();
        *cancelled = true;
        self.shared.wake.notify_all();
    }

    /// Time left before expiry (zero once expired).
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Block until the timer thread finishes. Returns whether it auto-submitted.
    pub fn wait(mut self) -> bool {
        self.handle
            .take()
            .and_then(|handle| handle.join().ok())
            .unwrap_or(false)
    }
}

impl Drop for QuizTimer {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel();
        }
    }
}

/// Render a duration as `MM:SS` (minutes may exceed 59).
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
