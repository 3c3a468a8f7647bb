//! Shared test infrastructure for button-debouncer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_debouncer::{Level, RawInput, TimeDuration, TimeInstant, TimeSource};
use core::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input Line
// ============================================================================

/// Handle for driving a mock input line after it has been moved into a reader
#[derive(Clone)]
pub struct LineHandle {
    level: Rc<Cell<Level>>,
    reads: Rc<Cell<usize>>,
}

impl LineHandle {
    /// Set the electrical level the line will read
    pub fn set(&self, level: Level) {
        self.level.set(level);
    }

    pub fn get(&self) -> Level {
        self.level.get()
    }

    /// Number of times the line has been sampled
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

/// Mock input line whose level is controlled through a [`LineHandle`]
pub struct MockInput {
    level: Rc<Cell<Level>>,
    reads: Rc<Cell<usize>>,
}

impl MockInput {
    pub fn new(initial: Level) -> (Self, LineHandle) {
        let level = Rc::new(Cell::new(initial));
        let reads = Rc::new(Cell::new(0));
        let handle = LineHandle {
            level: Rc::clone(&level),
            reads: Rc::clone(&reads),
        };
        (Self { level, reads }, handle)
    }
}

impl RawInput for MockInput {
    fn read(&mut self) -> Level {
        self.reads.set(self.reads.get() + 1);
        self.level.get()
    }
}
