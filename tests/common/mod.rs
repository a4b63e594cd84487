//! Shared test infrastructure for press-engine integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin};
use press_engine::{Button, ButtonConfig, Level, LevelSource, ScriptedPin, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond clock with controllable time advancement
pub struct MockClock {
    current_time: core::cell::Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0),
        }
    }

    pub fn set_time(&self, time: u32) {
        self.current_time.set(time);
    }
}

impl TimeSource<u32> for MockClock {
    fn now(&self) -> u32 {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input Pin
// ============================================================================

/// embedded-hal input pin whose level is set by the test
pub struct MockInputPin<'a> {
    high: &'a core::cell::Cell<bool>,
}

impl<'a> MockInputPin<'a> {
    pub fn new(high: &'a core::cell::Cell<bool>) -> Self {
        Self { high }
    }
}

impl ErrorType for MockInputPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockInputPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

// ============================================================================
// Scripted Buttons
// ============================================================================

pub const TRACE_CAPACITY: usize = 32;

pub type ScriptedButton<'t, const N: usize> =
    Button<ScriptedPin<'t, u32, MockClock, TRACE_CAPACITY>, u32, N>;

/// Builds a raw trace for active-low presses given as `(down, up)` times.
///
/// The level is high from 0 until the first press.
pub fn press_trace(
    presses: &[(u32, u32)],
) -> (
    heapless::Vec<u32, TRACE_CAPACITY>,
    heapless::Vec<Level, TRACE_CAPACITY>,
) {
    let mut times = heapless::Vec::new();
    let mut levels = heapless::Vec::new();
    times.push(0).unwrap();
    levels.push(Level::High).unwrap();

    for &(down, up) in presses {
        times.push(down).unwrap();
        levels.push(Level::Low).unwrap();
        times.push(up).unwrap();
        levels.push(Level::High).unwrap();
    }

    (times, levels)
}

/// Creates a button replaying the given presses against `clock`.
pub fn scripted_button<'t, const N: usize>(
    clock: &'t MockClock,
    presses: &[(u32, u32)],
    config: ButtonConfig<u32, N>,
) -> ScriptedButton<'t, N> {
    let (times, levels) = press_trace(presses);
    let pin = ScriptedPin::new(clock, &times, &levels);
    assert!(pin.is_valid());
    Button::new(pin, config)
}

/// Steps the clock from `from` to `to` inclusive, updating the button each step.
pub fn run<S: LevelSource, const N: usize>(
    clock: &MockClock,
    button: &mut Button<S, u32, N>,
    from: u32,
    to: u32,
    step: u32,
) {
    let mut now = from;
    while now <= to {
        clock.set_time(now);
        button.update(now);
        now += step;
    }
}

/// Like [`run`], but consumes the acceleration value on every step and returns the sum.
pub fn run_consuming<S: LevelSource, const N: usize>(
    clock: &MockClock,
    button: &mut Button<S, u32, N>,
    from: u32,
    to: u32,
    step: u32,
) -> u32 {
    let mut total = 0;
    let mut now = from;
    while now <= to {
        clock.set_time(now);
        button.update(now);
        total += button.consume_acceleration_value();
        now += step;
    }
    total
}

/// Default timings (50 / 1000 / 500 ms) without acceleration.
pub fn default_config() -> ButtonConfig<u32, 4> {
    ButtonConfig::default()
}

/// Default timings with the stock acceleration ramp.
pub fn accelerated_config() -> ButtonConfig<u32, 4> {
    ButtonConfig::builder()
        .standard_acceleration()
        .unwrap()
        .build()
        .unwrap()
}
