//! Timer helpers over `gloo-timers`.
//!
//! `sleep_ms` is the single scheduling primitive used by the typing loop,
//! the bar animation, and the notification timeline. `Liveness` is the
//! cancellation flag those loops check after every wake-up.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag. Clones observe the same flag; it is `Send`
/// so `on_cleanup` can own a clone.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Stop every loop holding a clone of this flag at its next wake-up.
    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Resolve after `ms` milliseconds. Resolves immediately off-browser.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}

/// Run `f` once after `ms` milliseconds. Off-browser the callback is dropped.
pub fn after_ms(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, f);
    }
}
