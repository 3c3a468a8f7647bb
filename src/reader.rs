//! Button reading with ownership of the raw input line.
//!
//! Provides [`ButtonReader`] which owns an input line, borrows a time
//! source, and feeds both into an embedded [`Debouncer`] on every poll.
//! Also defines the [`RawInput`] trait for hardware abstraction.

use crate::DEFAULT_QUIET_PERIOD_MS;
use crate::debouncer::Debouncer;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ActiveLevel, ButtonState, Edge, Level};

/// Trait for abstracting a raw digital input line.
///
/// Implement this for your input hardware (GPIO, I/O expander, shift
/// register, etc.) to let a reader sample it. Reads are assumed cheap and
/// free of side effects; the reader samples the line once per poll. Handle
/// any hardware errors internally - this method cannot fail.
pub trait RawInput {
    /// Returns the current electrical level of the line.
    fn read(&mut self) -> Level;
}

/// Reads and debounces a single button attached to a raw input line.
///
/// Each reader owns its input line and debounces it independently. Calling
/// [`poll`](ButtonReader::poll) in the application's control loop samples
/// the line and the clock and runs one debounce step; for multiple buttons,
/// create one reader per line.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type
/// * `T` - Time source implementation type
pub struct ButtonReader<'t, I: TimeInstant, P: RawInput, T: TimeSource<I>> {
    input: P,
    time_source: &'t T,
    debouncer: Debouncer<I>,
}

impl<'t, I: TimeInstant, P: RawInput, T: TimeSource<I>> ButtonReader<'t, I, P, T> {
    /// Creates a reader with the default 50 ms quiet period.
    ///
    /// The line is sampled once to seed the debouncer, so a line that is
    /// already settled does not register a bounce on the first poll. The
    /// reported state starts out released; a button already held here
    /// produces its press edge one quiet period later.
    pub fn new(input: P, time_source: &'t T, active_level: ActiveLevel) -> Self {
        Self::with_quiet_period(
            input,
            time_source,
            active_level,
            I::Duration::from_millis(DEFAULT_QUIET_PERIOD_MS),
        )
    }

    /// Creates a reader with a custom quiet period.
    pub fn with_quiet_period(
        mut input: P,
        time_source: &'t T,
        active_level: ActiveLevel,
        quiet_period: I::Duration,
    ) -> Self {
        let initial_level = input.read();
        let now = time_source.now();

        Self {
            input,
            time_source,
            debouncer: Debouncer::new(active_level, quiet_period, initial_level, now),
        }
    }

    /// Samples the line and the clock and runs one debounce step.
    ///
    /// Call once per tick of the application's control loop.
    ///
    /// # Returns
    /// * `(Some(edge), state)` - The debounced state just changed
    /// * `(None, state)` - No trusted change this tick
    pub fn poll(&mut self) -> (Option<Edge>, ButtonState) {
        let raw_level = self.input.read();
        let now = self.time_source.now();
        self.debouncer.poll(raw_level, now)
    }

    /// Replaces the quiet period. Takes effect on the next poll.
    pub fn set_quiet_period(&mut self, quiet_period: I::Duration) {
        self.debouncer.set_quiet_period(quiet_period);
    }

    /// Returns the configured quiet period.
    pub fn quiet_period(&self) -> I::Duration {
        self.debouncer.quiet_period()
    }

    /// Replaces the pressed polarity for future polls.
    pub fn set_active_level(&mut self, active_level: ActiveLevel) {
        self.debouncer.set_active_level(active_level);
    }

    /// Returns the configured pressed polarity.
    pub fn active_level(&self) -> ActiveLevel {
        self.debouncer.active_level()
    }

    /// Returns the current trusted, debounced state.
    pub fn state(&self) -> ButtonState {
        self.debouncer.state()
    }

    /// Returns true if the debounced state is pressed.
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    /// Time remaining until the current raw level would be trusted.
    ///
    /// `None` once the line has already been quiet for the full period.
    pub fn time_until_stable(&self) -> Option<I::Duration> {
        self.debouncer.time_until_stable(self.time_source.now())
    }

    /// Swaps the input line, returning the old one.
    ///
    /// The new line is sampled immediately so the swap itself is not taken
    /// for a bounce; the debounced state is unchanged until the new line
    /// has settled for a full quiet period.
    pub fn replace_input(&mut self, mut input: P) -> P {
        let initial_level = input.read();
        let now = self.time_source.now();
        self.debouncer.reseed(initial_level, now);
        core::mem::replace(&mut self.input, input)
    }

    /// Consumes the reader and returns the input line.
    pub fn release(self) -> P {
        self.input
    }
}
