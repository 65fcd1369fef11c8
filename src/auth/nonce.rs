//! Nonce generation for Coincheck API authentication.
//!
//! Coincheck requires a strictly increasing nonce for each authenticated
//! request per access key. A nonce that does not exceed the last one the
//! exchange has seen is rejected as a replay.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single-use nonce, rendered on the wire as decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nonce(u64);

impl Nonce {
    /// Wrap a raw nonce value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The integer value of this nonce.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Nonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> Nonce;
}

type Clock = Box<dyn Fn() -> Option<u64> + Send + Sync>;

/// A nonce provider that generates strictly increasing nonces based on time.
///
/// Uses nanoseconds since UNIX epoch. When the clock stalls, steps backwards,
/// or is unavailable, the last issued value plus one is used instead.
/// Values saturate at `u64::MAX`, after which the same nonce is repeated.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
    clock: Clock,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Self::current_time_nanos)
    }

    /// Create a provider reading time from `clock`.
    ///
    /// `clock` returns `None` when no time source is available.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> Option<u64> + Send + Sync + 'static,
    {
        Self {
            last_nonce: AtomicU64::new(0),
            clock: Box::new(clock),
        }
    }

    /// Get current time in nanoseconds since UNIX epoch.
    fn current_time_nanos() -> Option<u64> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
        u64::try_from(elapsed.as_nanos()).ok()
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IncreasingNonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncreasingNonce")
            .field("last_nonce", &self.last_nonce.load(Ordering::Relaxed))
            .finish()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> Nonce {
        let time_nonce = (self.clock)();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = match time_nonce {
                Some(now) => now.max(last.saturating_add(1)),
                None => last.saturating_add(1),
            };

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                tracing::trace!(nonce = next, "issued nonce");
                return Nonce(next);
            }
            // Another thread won the race; recompute against its value.
        }
    }
}
