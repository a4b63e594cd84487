#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Debounces one polled button and classifies its gestures
//! - **`ButtonConfig`**: Debounce, long-press and multi-press timings plus an optional acceleration table
//! - **`AccelerationStep`**: One entry of the ramp that turns a long hold into a growing increment
//! - **`LevelSource`**: Trait to implement for whatever supplies the raw logic level
//! - **`DirectPin`**, **`Inverted`**, **`PortBit`**, **`ScriptedPin`**: Ready-made level sources
//! - **`TimeInstant`** / **`TimeDuration`**: Traits to implement for your timing system
//! - **`ButtonEvent`**: Enum view of the one-shot gesture flags
//! - **`Dump`**: Human-readable state report for logs and consoles
//!
//! The engine never reads a clock. Pass the current instant to
//! [`Button::update`] once per polling cycle.

pub mod time;
pub mod types;
pub mod config;
pub mod pin;
pub mod button;
pub mod event;
pub mod dump;

pub use button::{Button, GestureFlags};
pub use config::{
    ButtonConfig, ConfigBuilder, DEFAULT_DEBOUNCE_MS, DEFAULT_DOUBLE_PRESS_MS,
    DEFAULT_LONG_PRESS_MS, STANDARD_ACCELERATION,
};
pub use dump::Dump;
pub use event::ButtonEvent;
pub use pin::{DirectPin, Inverted, LevelSource, PortBit, ScriptedPin};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{AccelerationStep, ButtonState, ConfigError, Level};
