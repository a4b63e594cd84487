//! Button engine with debouncing, gesture classification and hold acceleration.
//!
//! Provides [`Button`] which turns the raw level of a single momentary button,
//! sampled once per poll, into clean press/release transitions and latched
//! single, double, triple and long press flags. While the button is held it
//! tracks the hold duration and, if configured, drives an accelerating
//! increment for value adjustment.

use crate::config::ButtonConfig;
use crate::pin::LevelSource;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{ButtonState, Level};

/// Snapshot of the latched gesture flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureFlags {
    /// A single press is latched.
    pub single: bool,
    /// A double press is latched.
    pub double: bool,
    /// A triple press is latched.
    pub triple: bool,
    /// A long press is latched.
    pub long: bool,
}

/// Debounces a polled button and classifies its gestures.
///
/// The engine has no clock of its own. Call [`update`](Self::update) from the
/// main loop with a monotonically non-decreasing timestamp, at least three
/// times per debounce interval. Shorter bounces are only filtered if they are
/// sampled, so polling slower than that lets bounces through as presses.
///
/// Each press ends as exactly one of: a long press (held for at least the
/// long-press time) or part of a press sequence. A sequence is finalized once
/// the double-press window after the last release passes without a new press,
/// and then latches the single, double or triple flag. Four or more presses in
/// one sequence latch both the single and the triple flag.
///
/// Flags are edge-triggered: each `consume_*` getter returns the flag and
/// clears it. Repeated events of the same kind between two reads collapse into
/// one.
///
/// # Type Parameters
/// * `S` - Raw level source
/// * `I` - Time instant type
/// * `N` - Maximum number of acceleration steps
pub struct Button<S: LevelSource, I: TimeInstant, const N: usize> {
    source: S,
    config: ButtonConfig<I::Duration, N>,
    name: &'static str,

    last_raw_level: Level,
    last_level_change: I,
    state: ButtonState,
    last_stable_change: I,

    last_press: I,
    last_press_duration: I::Duration,
    hold_duration: I::Duration,
    press_count: u32,

    sequence_count: u32,
    awaiting_sequence_timeout: bool,

    single_press: bool,
    double_press: bool,
    triple_press: bool,
    long_press: bool,

    acceleration_step: usize,
    acceleration_value: u32,
    last_acceleration_tick: I,
}

impl<S: LevelSource, I: TimeInstant, const N: usize> Button<S, I, N> {
    /// Creates a released button reading from `source`.
    pub fn new(source: S, config: ButtonConfig<I::Duration, N>) -> Self {
        Self::with_name(source, config, "button")
    }

    /// Creates a released button with a name used in diagnostics.
    pub fn with_name(source: S, config: ButtonConfig<I::Duration, N>, name: &'static str) -> Self {
        Self {
            source,
            config,
            name,
            last_raw_level: Level::High,
            last_level_change: I::ZERO,
            state: ButtonState::Released,
            last_stable_change: I::ZERO,
            last_press: I::ZERO,
            last_press_duration: I::Duration::ZERO,
            hold_duration: I::Duration::ZERO,
            press_count: 0,
            sequence_count: 0,
            awaiting_sequence_timeout: false,
            single_press: false,
            double_press: false,
            triple_press: false,
            long_press: false,
            acceleration_step: 0,
            acceleration_value: 0,
            last_acceleration_tick: I::ZERO,
        }
    }

    /// Samples the raw level and advances the state machine to `now`.
    ///
    /// This is the only place state changes besides [`reset`](Self::reset).
    pub fn update(&mut self, now: I) {
        let raw = self.source.level();
        if raw != self.last_raw_level {
            self.last_raw_level = raw;
            self.last_level_change = now;
        }

        let candidate = ButtonState::from_level(raw);
        let stable_for = now.duration_since(self.last_level_change);
        if stable_for >= self.config.debounce() && candidate != self.state {
            self.state = candidate;
            self.last_stable_change = now;

            match candidate {
                ButtonState::Pressed => self.on_press(now),
                ButtonState::Released => self.on_release(now),
            }
        }

        if self.state == ButtonState::Pressed {
            self.track_hold(now);
        }

        if self.awaiting_sequence_timeout && self.state == ButtonState::Released {
            self.check_sequence_timeout(now);
        }
    }

    fn on_press(&mut self, now: I) {
        #[cfg(feature = "defmt")]
        defmt::trace!("{}: pressed", self.name);

        self.last_press = now;
        // A new press keeps the running sequence open until it is released.
        self.awaiting_sequence_timeout = false;
        self.hold_duration = I::Duration::ZERO;

        if self.config.acceleration_enabled() {
            self.acceleration_step = 0;
            self.acceleration_value = 0;
            // The level was already stable for the debounce time.
            self.last_acceleration_tick = now.wrapping_sub(self.config.debounce());
        }
    }

    fn on_release(&mut self, now: I) {
        self.sequence_count = self.sequence_count.saturating_add(1);
        self.press_count = self.press_count.saturating_add(1);
        self.last_press_duration = now.duration_since(self.last_press);
        self.hold_duration = I::Duration::ZERO;
        self.acceleration_value = 0;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "{}: released after {} ms",
            self.name,
            self.last_press_duration.as_millis()
        );

        if self.last_press_duration >= self.config.long_press() {
            #[cfg(feature = "defmt")]
            defmt::debug!("{}: long press", self.name);

            self.long_press = true;
            self.sequence_count = 0;
            self.awaiting_sequence_timeout = false;
        } else {
            self.awaiting_sequence_timeout = true;
        }
    }

    fn track_hold(&mut self, now: I) {
        self.hold_duration = now
            .duration_since(self.last_press)
            .wrapping_add(self.config.debounce());

        let steps = self.config.acceleration_steps();
        if steps.is_empty() {
            return;
        }

        while self.acceleration_step + 1 < steps.len()
            && self.hold_duration > steps[self.acceleration_step].range_limit
        {
            self.acceleration_step += 1;
        }

        let step = steps[self.acceleration_step];
        if step.increment == 0 {
            return;
        }

        // Catch up on every interval that elapsed since the previous poll.
        while now.duration_since(self.last_acceleration_tick) >= step.repeat_interval {
            self.acceleration_value = self.acceleration_value.saturating_add(step.increment);
            self.last_acceleration_tick = self.last_acceleration_tick.wrapping_add(step.repeat_interval);
        }
    }

    fn check_sequence_timeout(&mut self, now: I) {
        if now.duration_since(self.last_stable_change) <= self.config.double_press() {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: sequence of {} presses", self.name, self.sequence_count);

        match self.sequence_count {
            1 => self.single_press = true,
            2 => self.double_press = true,
            3 => self.triple_press = true,
            _ => {
                // Longer sequences have no class of their own.
                self.single_press = true;
                self.triple_press = true;
            }
        }

        self.sequence_count = 0;
        self.awaiting_sequence_timeout = false;
    }

    /// Returns all transient state to its initial values.
    ///
    /// Configuration and the acceleration table are kept. Any gesture in
    /// progress is dropped.
    pub fn reset(&mut self) {
        self.last_raw_level = Level::High;
        self.last_level_change = I::ZERO;
        self.state = ButtonState::Released;
        self.last_stable_change = I::ZERO;
        self.last_press = I::ZERO;
        self.last_press_duration = I::Duration::ZERO;
        self.hold_duration = I::Duration::ZERO;
        self.press_count = 0;
        self.sequence_count = 0;
        self.awaiting_sequence_timeout = false;
        self.single_press = false;
        self.double_press = false;
        self.triple_press = false;
        self.long_press = false;
        self.acceleration_step = 0;
        self.acceleration_value = 0;
        self.last_acceleration_tick = I::ZERO;
    }

    /// Returns true while the debounced state is pressed.
    pub fn is_held(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    /// Time the button has been held so far, zero while released.
    ///
    /// Includes the debounce time, since the level was already stable then.
    /// Updated by [`update`](Self::update) only.
    pub fn hold_duration(&self) -> I::Duration {
        self.hold_duration
    }

    /// Duration of the most recently completed press.
    pub fn last_press_duration(&self) -> I::Duration {
        self.last_press_duration
    }

    /// Returns the number of releases since the last call and resets it.
    ///
    /// Counts every press, including those that make up double, triple and
    /// long presses. Does not touch the gesture flags.
    pub fn consume_press_count(&mut self) -> u32 {
        core::mem::take(&mut self.press_count)
    }

    /// Returns the number of releases since the last consume, without resetting.
    pub fn peek_press_count(&self) -> u32 {
        self.press_count
    }

    /// Returns and clears the single press flag.
    pub fn consume_single_press(&mut self) -> bool {
        core::mem::take(&mut self.single_press)
    }

    /// Returns and clears the double press flag.
    pub fn consume_double_press(&mut self) -> bool {
        core::mem::take(&mut self.double_press)
    }

    /// Returns and clears the triple press flag.
    pub fn consume_triple_press(&mut self) -> bool {
        core::mem::take(&mut self.triple_press)
    }

    /// Returns and clears the long press flag.
    pub fn consume_long_press(&mut self) -> bool {
        core::mem::take(&mut self.long_press)
    }

    /// Returns the value accumulated by the acceleration ramp and resets it.
    ///
    /// This is a delta since the previous call. Always zero without an
    /// acceleration table. Whatever is left unconsumed when the button is
    /// released is dropped.
    pub fn consume_acceleration_value(&mut self) -> u32 {
        core::mem::take(&mut self.acceleration_value)
    }

    /// Returns the accumulated acceleration value without resetting it.
    pub fn peek_acceleration_value(&self) -> u32 {
        self.acceleration_value
    }

    /// Returns the latched gesture flags without clearing them.
    pub fn flags(&self) -> GestureFlags {
        GestureFlags {
            single: self.single_press,
            double: self.double_press,
            triple: self.triple_press,
            long: self.long_press,
        }
    }

    /// Returns the debounced state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns the raw level seen by the most recent update.
    pub fn raw_level(&self) -> Level {
        self.last_raw_level
    }

    /// Returns true while released presses wait for the sequence window to close.
    pub fn is_sequence_pending(&self) -> bool {
        self.awaiting_sequence_timeout
    }

    /// Index of the active acceleration step.
    pub fn acceleration_step(&self) -> usize {
        self.acceleration_step
    }

    /// Returns true if an acceleration table is configured.
    pub fn acceleration_enabled(&self) -> bool {
        self.config.acceleration_enabled()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ButtonConfig<I::Duration, N> {
        &self.config
    }

    /// Returns the diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a mutable reference to the level source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
