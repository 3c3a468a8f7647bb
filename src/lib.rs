#![no_std]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Debouncer`**: The quiet-period state machine for a single button; fed raw samples and timestamps by the caller
//! - **`ButtonReader`**: Owns an input line and pairs it with a clock, polling both for you
//! - **`Level`**: A raw electrical line state (`Low`/`High`)
//! - **`ActiveLevel`**: Which raw level counts as "pressed" (pull-up vs pull-down wiring)
//! - **`ButtonState`**: The trusted, debounced state (`Pressed`/`Released`)
//! - **`Edge`**: A debounced state change, reported exactly once
//! - **`RawInput`**: Trait to implement for your input hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! One `Debouncer` (or `ButtonReader`) is instantiated per physical button;
//! instances are fully independent. All operations are synchronous and O(1),
//! so polling many buttons from one control loop stays cheap.

pub mod debouncer;
pub mod reader;
pub mod time;
pub mod types;

pub use debouncer::Debouncer;
pub use reader::{ButtonReader, RawInput};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ActiveLevel, ButtonState, Edge, Level};

/// Default quiet period in milliseconds, used by [`ButtonReader::new`].
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 50;
