//! Request pacing for the upstream quote endpoint.
//!
//! The fetch cycle issues requests strictly one at a time; the throttle
//! enforces a minimum spacing between consecutive requests so the upstream
//! does not rate-limit us. The spacing is a policy, not a performance knob.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Default spacing between consecutive upstream requests.
pub const DEFAULT_REQUEST_SPACING: Duration = Duration::from_millis(100);

/// Enforces a minimum spacing between consecutive requests.
///
/// Thread-safe; construct with `Duration::ZERO` in tests to skip real
/// wall-clock delays.
#[derive(Debug)]
pub struct Throttle {
    spacing: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Create a throttle with the given request spacing.
    pub fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            last_request: Mutex::new(None),
        }
    }

    /// Lock the timing state, recovering from poison if necessary.
    ///
    /// The worst case after recovery is one mistimed pause, which is better
    /// than panicking.
    fn lock_last(&self) -> MutexGuard<'_, Option<Instant>> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Wait until the configured spacing has elapsed since the previous
    /// request, then mark the current request as started.
    pub async fn pause(&self) {
        let wait = {
            let last = self.lock_last();
            match *last {
                Some(at) => self.spacing.saturating_sub(at.elapsed()),
                None => Duration::ZERO,
            }
        };

        if wait > Duration::ZERO {
            tokio::time::sleep(wait).await;
        }

        *self.lock_last() = Some(Instant::now());
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_SPACING)
    }
}
