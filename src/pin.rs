//! Raw-level sources.
//!
//! The engine only needs one capability from its input: read the current
//! logic level. [`LevelSource`] is that capability. Polarity is the source's
//! business. The engine always treats `Low` as pressed, so positive-logic
//! wiring is handled by wrapping the source in [`Inverted`].

use crate::time::{TimeInstant, TimeSource};
use crate::types::Level;
use core::ops::BitAnd;
use embedded_hal::digital::InputPin;
use heapless::Vec;

/// Trait for abstracting the raw input behind a button.
///
/// Implement this for anything that can report a logic level: a GPIO, a bit
/// in a port expander register, a recorded trace. Reading cannot fail. Handle
/// hardware errors internally and report a level anyway.
pub trait LevelSource {
    /// Returns the current logic level.
    fn level(&mut self) -> Level;
}

impl<S: LevelSource + ?Sized> LevelSource for &mut S {
    #[inline]
    fn level(&mut self) -> Level {
        (**self).level()
    }
}

/// A GPIO read through `embedded-hal`.
///
/// A failed read reports `High`, which the engine sees as released.
pub struct DirectPin<P: InputPin> {
    pin: P,
}

impl<P: InputPin> DirectPin<P> {
    /// Wraps an input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> LevelSource for DirectPin<P> {
    #[inline]
    fn level(&mut self) -> Level {
        self.pin.is_high().map(Level::from).unwrap_or(Level::High)
    }
}

/// Swaps `Low` and `High` of the wrapped source.
///
/// Use this for buttons wired with a pull-down, where pressed reads high.
pub struct Inverted<S> {
    source: S,
}

impl<S: LevelSource> Inverted<S> {
    /// Wraps a source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: LevelSource> LevelSource for Inverted<S> {
    #[inline]
    fn level(&mut self) -> Level {
        self.source.level().inverted()
    }
}

/// A single bit of a port word.
///
/// `read` returns the whole port (an MCU port register, the input latch of an
/// I2C or SPI expander) and the level is `High` if any bit of `mask` is set.
/// Works with 8, 16 and 32-bit ports alike.
pub struct PortBit<R, W> {
    read: R,
    mask: W,
}

impl<R, W> PortBit<R, W>
where
    R: FnMut() -> W,
    W: Copy + Default + PartialEq + BitAnd<Output = W>,
{
    /// Creates a port bit from a port reader and a bit mask.
    pub fn new(read: R, mask: W) -> Self {
        Self { read, mask }
    }
}

impl<R, W> LevelSource for PortBit<R, W>
where
    R: FnMut() -> W,
    W: Copy + Default + PartialEq + BitAnd<Output = W>,
{
    #[inline]
    fn level(&mut self) -> Level {
        Level::from(((self.read)() & self.mask) != W::default())
    }
}

/// Replays a recorded level trace against a time source.
///
/// The trace is a list of change times with the level that applies from each
/// time on. At or before the first time the first level is reported, at or
/// after the last time the last level.
///
/// An unusable trace (mismatched lengths, empty, or longer than `N`) does not
/// fail construction. The pin then reports a constant `Low`. Check
/// [`is_valid`](Self::is_valid) before relying on the replay.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of trace points
pub struct ScriptedPin<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    time_source: &'t T,
    trace: Option<Vec<(I, Level), N>>,
}

impl<'t, I, T, const N: usize> ScriptedPin<'t, I, T, N>
where
    I: TimeInstant + PartialOrd,
    T: TimeSource<I>,
{
    /// Creates a scripted pin from parallel time and level lists.
    pub fn new(time_source: &'t T, times: &[I], levels: &[Level]) -> Self {
        let mut trace = Vec::new();
        let accepted = times.len() == levels.len()
            && !times.is_empty()
            && times
                .iter()
                .zip(levels)
                .all(|(&time, &level)| trace.push((time, level)).is_ok());

        let trace = accepted.then_some(trace);

        Self { time_source, trace }
    }

    /// Returns true if the trace was accepted.
    pub fn is_valid(&self) -> bool {
        self.trace.is_some()
    }

    fn level_at(trace: &[(I, Level)], now: I) -> Level {
        let (first_time, first_level) = trace[0];
        if now <= first_time || trace.len() == 1 {
            return first_level;
        }

        for window in trace.windows(2) {
            if now < window[1].0 {
                return window[0].1;
            }
        }

        trace[trace.len() - 1].1
    }
}

impl<'t, I, T, const N: usize> LevelSource for ScriptedPin<'t, I, T, N>
where
    I: TimeInstant + PartialOrd,
    T: TimeSource<I>,
{
    fn level(&mut self) -> Level {
        match &self.trace {
            Some(trace) => Self::level_at(trace, self.time_source.now()),
            None => Level::Low,
        }
    }
}
