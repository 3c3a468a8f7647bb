//! Core types for raw input classification and debounced output.

/// A raw electrical level read from a digital input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Line reads logic low.
    Low,

    /// Line reads logic high.
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Returns true if the level is high.
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Returns true if the level is low.
    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Which raw level represents a pressed button.
///
/// A button wired through a pull-up resistor pulls the line low when pressed
/// (`ActiveLevel::Low`); one wired through a pull-down resistor drives the
/// line high when pressed (`ActiveLevel::High`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// The line is high while the button is pressed (pull-down wiring).
    High,

    /// The line is low while the button is pressed (pull-up wiring).
    Low,
}

impl ActiveLevel {
    /// The raw level that means "pressed" under this polarity.
    #[inline]
    pub fn pressed_level(self) -> Level {
        match self {
            ActiveLevel::High => Level::High,
            ActiveLevel::Low => Level::Low,
        }
    }

    /// Classifies a raw level as a button state under this polarity.
    #[inline]
    pub fn classify(self, level: Level) -> ButtonState {
        if level == self.pressed_level() {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// The trusted, debounced state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button is released.
    Released,

    /// Button is pressed.
    Pressed,
}

impl ButtonState {
    /// Returns true if the state is pressed.
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

/// A change in the debounced state, reported exactly once per change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// The debounced state just changed to pressed.
    Pressed,

    /// The debounced state just changed to released.
    Released,
}

impl From<ButtonState> for Edge {
    fn from(state: ButtonState) -> Self {
        match state {
            ButtonState::Pressed => Edge::Pressed,
            ButtonState::Released => Edge::Released,
        }
    }
}
