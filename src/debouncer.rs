//! Quiet-period debouncing for a single raw input signal.
//!
//! Provides [`Debouncer`] which turns a stream of raw (possibly bouncing)
//! level samples into a trusted button state plus exactly-once edge reports.
//! The debouncer performs no I/O; the caller feeds it a freshly read level
//! and the current time on every poll.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::{ActiveLevel, ButtonState, Edge, Level};

/// Debounces a single mechanical button or switch.
///
/// A raw level change (a bounce) restarts an internal quiet-period timer.
/// Only once the raw signal has held unchanged for longer than the quiet
/// period is it trusted as the new button state; a change of that trusted
/// state is reported as exactly one [`Edge`].
///
/// Making the threshold a wall-clock guarantee rather than a count of
/// consecutive identical samples keeps the debounce behavior independent of
/// the polling frequency.
///
/// The debouncer always starts out reporting [`ButtonState::Released`], so
/// the first poll can never yield a release edge. A button already held at
/// construction produces its press edge once the quiet period has elapsed.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct Debouncer<I: TimeInstant> {
    active_level: ActiveLevel,
    quiet_period: I::Duration,
    last_raw_level: Level,
    last_change_at: I,
    stable_state: ButtonState,
    previous_stable_state: ButtonState,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer in the released state.
    ///
    /// `initial_level` seeds raw-sample tracking so a line that is already
    /// settled does not register a bounce on the first poll. `now` starts
    /// the quiet-period timer: any level, the initial one included, must
    /// hold for a full quiet period after construction before it is
    /// trusted.
    pub fn new(
        active_level: ActiveLevel,
        quiet_period: I::Duration,
        initial_level: Level,
        now: I,
    ) -> Self {
        Self {
            active_level,
            quiet_period,
            last_raw_level: initial_level,
            last_change_at: now,
            stable_state: ButtonState::Released,
            previous_stable_state: ButtonState::Released,
        }
    }

    /// Feeds one raw sample to the state machine.
    ///
    /// Call once per sampling tick with a freshly read line level and the
    /// current time. `now` values must be monotonically non-decreasing
    /// across calls.
    ///
    /// # Returns
    /// * `(Some(edge), state)` - The trusted state just changed
    /// * `(None, state)` - No change, or the quiet period has not elapsed;
    ///   `state` is the previously trusted state, unchanged
    pub fn poll(&mut self, raw_level: Level, now: I) -> (Option<Edge>, ButtonState) {
        // Any raw change restarts the quiet-period timer.
        if raw_level != self.last_raw_level {
            self.last_raw_level = raw_level;
            self.last_change_at = now;
        }

        let elapsed = now.duration_since(self.last_change_at);
        if elapsed.as_millis() <= self.quiet_period.as_millis() {
            return (None, self.stable_state);
        }

        // The raw signal has been electrically silent for the full quiet
        // period; trust it as the new button state.
        self.stable_state = self.active_level.classify(raw_level);

        let mut edge = None;
        if self.stable_state != self.previous_stable_state {
            edge = Some(Edge::from(self.stable_state));
            self.previous_stable_state = self.stable_state;
        }

        (edge, self.stable_state)
    }

    /// Replaces the quiet period. Takes effect on the next poll.
    pub fn set_quiet_period(&mut self, quiet_period: I::Duration) {
        self.quiet_period = quiet_period;
    }

    /// Returns the configured quiet period.
    pub fn quiet_period(&self) -> I::Duration {
        self.quiet_period
    }

    /// Replaces the pressed polarity.
    ///
    /// Affects how future trusted samples are classified; the current
    /// debounced state is not reinterpreted.
    pub fn set_active_level(&mut self, active_level: ActiveLevel) {
        self.active_level = active_level;
    }

    /// Returns the configured pressed polarity.
    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Returns the current trusted, debounced state.
    pub fn state(&self) -> ButtonState {
        self.stable_state
    }

    /// Returns true if the debounced state is pressed.
    pub fn is_pressed(&self) -> bool {
        self.stable_state.is_pressed()
    }

    /// Time remaining until the current raw level would be trusted.
    ///
    /// Useful as a scheduling hint for the polling loop. Returns `None`
    /// once the quiet period has already elapsed; `Some(ZERO)` means the
    /// very next poll will trust the level.
    pub fn time_until_stable(&self, now: I) -> Option<I::Duration> {
        let elapsed = now.duration_since(self.last_change_at);
        if elapsed.as_millis() > self.quiet_period.as_millis() {
            None
        } else {
            Some(self.quiet_period.saturating_sub(elapsed))
        }
    }

    /// Re-seeds raw-sample tracking, leaving the debounced state untouched.
    ///
    /// Used when the physical line behind this debouncer is swapped; the
    /// new level must then hold for a full quiet period before it is
    /// trusted.
    pub fn reseed(&mut self, raw_level: Level, now: I) {
        self.last_raw_level = raw_level;
        self.last_change_at = now;
    }
}
