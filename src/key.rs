//! A key type whose comparisons can be made artificially slow.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::thread;
use std::time::Duration;

/// Time spent in every comparison while the delay is switched on.
pub const COMPARISON_DELAY: Duration = Duration::from_millis(1);

static DELAY: AtomicBool = AtomicBool::new(false);

/// An unsigned integer key for timing experiments.
///
/// While [`SlowKey::delay_on`] is in effect, every comparison between two keys
/// first sleeps for [`COMPARISON_DELAY`], so lookup time is dominated by the
/// number of comparisons a tree performs. The switch is process-wide.
#[derive(Clone, Copy, Default)]
pub struct SlowKey(u64);

impl SlowKey {
    /// Wraps `value`.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Makes every later comparison sleep for [`COMPARISON_DELAY`].
    pub fn delay_on() {
        DELAY.store(true, AtomicOrdering::Relaxed);
    }

    /// Restores comparisons without delay.
    pub fn delay_off() {
        DELAY.store(false, AtomicOrdering::Relaxed);
    }

    /// Returns whether comparisons are currently delayed.
    pub fn is_delay_on() -> bool {
        DELAY.load(AtomicOrdering::Relaxed)
    }

    fn delay() {
        if Self::is_delay_on() {
            thread::sleep(COMPARISON_DELAY);
        }
    }
}

impl From<u64> for SlowKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl PartialEq for SlowKey {
    fn eq(&self, other: &Self) -> bool {
        Self::delay();
        self.0 == other.0
    }
}

impl Eq for SlowKey {}

impl PartialOrd for SlowKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlowKey {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::delay();
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for SlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for SlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SlowKey").field(&self.0).finish()
    }
}
