//! Event-based view of the gesture flags.

use crate::button::Button;
use crate::pin::LevelSource;
use crate::time::TimeInstant;

/// A classified gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// One short press followed by a quiet window.
    SinglePress,
    /// Two short presses within the window.
    DoublePress,
    /// Three short presses within the window.
    TriplePress,
    /// A press held for at least the long-press time.
    LongPress,
}

impl<S: LevelSource, I: TimeInstant, const N: usize> Button<S, I, N> {
    /// Consumes one latched gesture flag and returns it as an event.
    ///
    /// Flags are drained in the order long, triple, double, single, so calling
    /// this in a loop until it returns `None` empties all of them. A sequence of
    /// four or more presses yields `TriplePress` followed by `SinglePress`.
    pub fn next_event(&mut self) -> Option<ButtonEvent> {
        if self.consume_long_press() {
            Some(ButtonEvent::LongPress)
        } else if self.consume_triple_press() {
            Some(ButtonEvent::TriplePress)
        } else if self.consume_double_press() {
            Some(ButtonEvent::DoublePress)
        } else if self.consume_single_press() {
            Some(ButtonEvent::SinglePress)
        } else {
            None
        }
    }
}
