//! Time abstraction traits for platform-agnostic timing.
//!
//! The debouncer never interprets absolute time; it only differences
//! instants against the configured quiet period. Timestamps handed to it
//! must be monotonically non-decreasing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Must not panic when `earlier` is actually later (a backward time
    /// step); implementations saturate to [`TimeDuration::ZERO`].
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
