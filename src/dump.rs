//! Human-readable state dumps for diagnostics.
//!
//! The text format is meant for people reading a log or a serial console and
//! may change between versions. Do not parse it.

use crate::button::Button;
use crate::pin::LevelSource;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::ButtonState;
use core::fmt::Write;

/// Trait for objects that can describe their internal state.
pub trait Dump {
    /// Writes a multi-line state report taken at `now_ms` into `out`.
    fn dump(&self, now_ms: u64, out: &mut dyn Write) -> core::fmt::Result;
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn pressed_released(state: ButtonState) -> &'static str {
    match state {
        ButtonState::Pressed => "Pressed",
        ButtonState::Released => "Released",
    }
}

impl<S: LevelSource, I: TimeInstant, const N: usize> Dump for Button<S, I, N> {
    fn dump(&self, now_ms: u64, out: &mut dyn Write) -> core::fmt::Result {
        writeln!(out, "{} dump at {} ms:", self.name(), now_ms)?;
        writeln!(out, "  Current state: {}", pressed_released(self.state()))?;
        writeln!(
            out,
            "  Last raw level: {}",
            pressed_released(ButtonState::from_level(self.raw_level()))
        )?;
        writeln!(out, "  Hold time: {} ms", self.hold_duration().as_millis())?;
        writeln!(
            out,
            "  Last press duration: {} ms",
            self.last_press_duration().as_millis()
        )?;
        writeln!(out, "  Press count: {}", self.peek_press_count())?;
        writeln!(out, "  Sequence pending: {}", yes_no(self.is_sequence_pending()))?;

        let flags = self.flags();
        writeln!(out, "  Single press: {}", yes_no(flags.single))?;
        writeln!(out, "  Double press: {}", yes_no(flags.double))?;
        writeln!(out, "  Triple press: {}", yes_no(flags.triple))?;
        writeln!(out, "  Long press: {}", yes_no(flags.long))?;

        if self.acceleration_enabled() {
            writeln!(out, "  Acceleration value: {}", self.peek_acceleration_value())?;
            writeln!(out, "  Acceleration step: {}", self.acceleration_step())
        } else {
            writeln!(out, "  Acceleration: disabled")
        }
    }
}
