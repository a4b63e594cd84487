//! Core value types shared by the engine, its configuration and level sources.

use crate::time::TimeDuration;

/// Instantaneous logic level of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic low. With standard (pull-up) wiring the button is pressed.
    Low,

    /// Logic high. With standard (pull-up) wiring the button is released.
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
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Debounced state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button is held down.
    Pressed,

    /// Button is up.
    Released,
}

impl ButtonState {
    /// Maps a level using negative logic: `Low` is pressed.
    #[inline]
    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Low => ButtonState::Pressed,
            Level::High => ButtonState::Released,
        }
    }

    /// Level that corresponds to this state under negative logic.
    #[inline]
    pub fn level(self) -> Level {
        match self {
            ButtonState::Pressed => Level::Low,
            ButtonState::Released => Level::High,
        }
    }
}

/// One entry of an acceleration ramp.
///
/// While the button is held, the active step adds `increment` to the
/// accumulated value once every `repeat_interval`. The next step becomes
/// active once the hold duration exceeds this step's `range_limit`. The
/// `range_limit` of the last step is never consulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelerationStep<D: TimeDuration> {
    /// Value added per tick. Zero pauses accumulation.
    pub increment: u32,

    /// Time between two ticks.
    pub repeat_interval: D,

    /// Hold duration after which the following step takes over.
    pub range_limit: D,
}

impl<D: TimeDuration> AccelerationStep<D> {
    /// Creates a new acceleration step.
    #[inline]
    pub fn new(increment: u32, repeat_interval: D, range_limit: D) -> Self {
        Self {
            increment,
            repeat_interval,
            range_limit,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Acceleration table capacity exceeded.
    CapacityExceeded,

    /// A step with a non-zero increment has a zero repeat interval.
    ZeroRepeatInterval {
        /// Index of the offending step.
        step: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::CapacityExceeded => {
                write!(f, "acceleration table capacity exceeded")
            }
            ConfigError::ZeroRepeatInterval { step } => {
                write!(
                    f,
                    "acceleration step {} adds a value but has a zero repeat interval",
                    step
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
