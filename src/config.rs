use crate::time::TimeDuration;
use crate::types::{AccelerationStep, ConfigError};
use heapless::Vec;

/// Default debounce time in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Default long-press threshold in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 1000;

/// Default multi-press window in milliseconds.
pub const DEFAULT_DOUBLE_PRESS_MS: u64 = 500;

/// Stock acceleration ramp as `(increment, repeat_ms, range_limit_ms)`.
///
/// Adds 1 every 150 ms up to 1.5 s, 5 every 250 ms up to 5 s, 10 every
/// 400 ms up to 10 s and 100 every 500 ms from then on.
pub const STANDARD_ACCELERATION: [(u32, u64, u64); 4] = [
    (1, 150, 1500),
    (5, 250, 5000),
    (10, 400, 10000),
    (100, 500, 0),
];

/// Timing configuration of a button.
///
/// Immutable once handed to a [`Button`](crate::Button). An empty
/// acceleration table disables the acceleration ramp.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `u32` milliseconds)
/// * `N` - Maximum number of acceleration steps
#[derive(Debug, Clone)]
pub struct ButtonConfig<D: TimeDuration, const N: usize> {
    debounce: D,
    long_press: D,
    double_press: D,
    acceleration: Vec<AccelerationStep<D>, N>,
}

impl<D: TimeDuration, const N: usize> ButtonConfig<D, N> {
    /// Creates a new configuration builder starting from the defaults.
    pub fn builder() -> ConfigBuilder<D, N> {
        ConfigBuilder::new()
    }

    /// Minimum stable time before a level change is accepted.
    #[inline]
    pub fn debounce(&self) -> D {
        self.debounce
    }

    /// Minimum hold time for a release to count as a long press.
    #[inline]
    pub fn long_press(&self) -> D {
        self.long_press
    }

    /// Window after a release in which another press extends the sequence.
    #[inline]
    pub fn double_press(&self) -> D {
        self.double_press
    }

    /// The acceleration table, in the order steps are consulted.
    #[inline]
    pub fn acceleration_steps(&self) -> &[AccelerationStep<D>] {
        &self.acceleration
    }

    /// Returns true if an acceleration table is configured.
    #[inline]
    pub fn acceleration_enabled(&self) -> bool {
        !self.acceleration.is_empty()
    }
}

impl<D: TimeDuration, const N: usize> Default for ButtonConfig<D, N> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
            long_press: D::from_millis(DEFAULT_LONG_PRESS_MS),
            double_press: D::from_millis(DEFAULT_DOUBLE_PRESS_MS),
            acceleration: Vec::new(),
        }
    }
}

/// Builder for constructing validated button configurations.
#[derive(Debug)]
pub struct ConfigBuilder<D: TimeDuration, const N: usize> {
    config: ButtonConfig<D, N>,
}

impl<D: TimeDuration, const N: usize> ConfigBuilder<D, N> {
    /// Creates a builder holding the default timings and no acceleration.
    pub fn new() -> Self {
        Self {
            config: ButtonConfig::default(),
        }
    }

    /// Sets the debounce time.
    pub fn debounce(mut self, debounce: D) -> Self {
        self.config.debounce = debounce;
        self
    }

    /// Sets the long-press threshold.
    pub fn long_press(mut self, long_press: D) -> Self {
        self.config.long_press = long_press;
        self
    }

    /// Sets the multi-press window.
    pub fn double_press(mut self, double_press: D) -> Self {
        self.config.double_press = double_press;
        self
    }

    /// Appends a step to the acceleration table.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The table already holds `N` steps
    pub fn acceleration_step(
        mut self,
        increment: u32,
        repeat_interval: D,
        range_limit: D,
    ) -> Result<Self, ConfigError> {
        self.config
            .acceleration
            .push(AccelerationStep::new(increment, repeat_interval, range_limit))
            .map_err(|_| ConfigError::CapacityExceeded)?;
        Ok(self)
    }

    /// Appends the steps of [`STANDARD_ACCELERATION`].
    ///
    /// # Errors
    /// * `CapacityExceeded` - Fewer than four free slots remain
    pub fn standard_acceleration(mut self) -> Result<Self, ConfigError> {
        for (increment, repeat_ms, limit_ms) in STANDARD_ACCELERATION {
            self = self.acceleration_step(
                increment,
                D::from_millis(repeat_ms),
                D::from_millis(limit_ms),
            )?;
        }
        Ok(self)
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroRepeatInterval` - A step adds a value but never waits between ticks
    pub fn build(self) -> Result<ButtonConfig<D, N>, ConfigError> {
        for (step, entry) in self.config.acceleration.iter().enumerate() {
            if entry.increment > 0 && entry.repeat_interval == D::ZERO {
                return Err(ConfigError::ZeroRepeatInterval { step });
            }
        }

        Ok(self.config)
    }
}

impl<D: TimeDuration, const N: usize> Default for ConfigBuilder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let config = ButtonConfig::<u32, 4>::default();
        assert_eq!(config.debounce(), 50);
        assert_eq!(config.long_press(), 1000);
        assert_eq!(config.double_press(), 500);
        assert!(!config.acceleration_enabled());
    }

    #[test]
    fn zero_increment_step_may_have_zero_interval() {
        let config = ButtonConfig::<u32, 2>::builder()
            .acceleration_step(1, 100, 1000)
            .unwrap()
            .acceleration_step(0, 0, 0)
            .unwrap()
            .build();
        assert!(config.is_ok());
    }
}
