//! Process-wide verbosity threshold
//!
//! A single relaxed atomic shared by every logger instance. Concurrent
//! readers racing a writer see a stale value for at most one call; verbosity
//! changes are rare operational events, so no lock is taken.

use std::sync::atomic::{AtomicI32, Ordering};

static GLOBAL_VERBOSITY: AtomicI32 = AtomicI32::new(0);

/// Set the process-wide verbosity threshold, returning the previous value.
///
/// The returned value enables save/restore patterns in tests:
///
/// ```
/// let old = kvlog::set_verbosity(3);
/// // ... exercise verbose paths ...
/// kvlog::set_verbosity(old);
/// ```
pub fn set_verbosity(v: i32) -> i32 {
    GLOBAL_VERBOSITY.swap(v, Ordering::Relaxed)
}

/// Current process-wide verbosity threshold.
pub fn verbosity() -> i32 {
    GLOBAL_VERBOSITY.load(Ordering::Relaxed)
}

/// Whether a call at `level` passes the gate. Higher levels are rarer.
pub(crate) fn enabled_at(level: i32) -> bool {
    verbosity() >= level
}
