//! Integration tests for the hold acceleration ramp

mod common;
use common::*;

use press_engine::{Button, ButtonConfig, Level, ScriptedPin};

fn held_from_zero<'t, const N: usize>(
    clock: &'t MockClock,
    config: ButtonConfig<u32, N>,
) -> ScriptedButton<'t, N> {
    let pin = ScriptedPin::new(clock, &[0], &[Level::Low]);
    Button::new(pin, config)
}

#[test]
fn acceleration_value_is_zero_after_construction() {
    let clock = MockClock::new();
    let mut button = held_from_zero(&clock, accelerated_config());
    assert_eq!(button.consume_acceleration_value(), 0);
}

#[test]
fn acceleration_value_is_zero_while_released() {
    let clock = MockClock::new();
    let mut button = scripted_button(&clock, &[(100, 500)], accelerated_config());

    run(&clock, &mut button, 0, 550, 50);
    assert!(!button.is_held());
    assert_eq!(button.consume_acceleration_value(), 0);

    let total = run_consuming(&clock, &mut button, 600, 3000, 50);
    assert_eq!(total, 0);
}

#[test]
fn standard_ramp_over_two_seconds() {
    // Step 0 adds 1 per 150 up to a hold of 1500, step 1 then adds 5 per 250.
    let clock = MockClock::new();
    let mut button = held_from_zero(&clock, accelerated_config());

    let total = run_consuming(&clock, &mut button, 0, 2000, 50);

    assert_eq!(total, 10 + 2 * 5);
    assert_eq!(button.acceleration_step(), 1);
    assert_eq!(button.hold_duration(), 2000);
}

#[test]
fn unconsumed_value_accumulates_while_held() {
    let clock = MockClock::new();
    let mut button = held_from_zero(&clock, accelerated_config());

    run(&clock, &mut button, 0, 2000, 50);

    assert_eq!(button.peek_acceleration_value(), 20);
    assert_eq!(button.consume_acceleration_value(), 20);
    assert_eq!(button.consume_acceleration_value(), 0);
}

#[test]
fn standard_ramp_reaches_last_step() {
    let clock = MockClock::new();
    let mut button = held_from_zero(&clock, accelerated_config());

    let total = run_consuming(&clock, &mut button, 0, 12000, 50);

    // 10 x 1, 14 x 5, 12 x 10, 4 x 100
    assert_eq!(total, 600);
    assert_eq!(button.acceleration_step(), 3);
}

#[test]
fn zero_increment_step_stops_the_ramp() {
    let clock = MockClock::new();
    let config = ButtonConfig::<u32, 2>::builder()
        .acceleration_step(1, 100, 500)
        .unwrap()
        .acceleration_step(0, 0, 0)
        .unwrap()
        .build()
        .unwrap();
    let mut button = held_from_zero(&clock, config);

    let total = run_consuming(&clock, &mut button, 0, 2000, 50);

    assert_eq!(total, 5);
    assert_eq!(button.acceleration_step(), 1);
}

#[test]
fn ramp_restarts_on_every_press() {
    let clock = MockClock::new();
    let mut button = scripted_button(&clock, &[(100, 2100), (3100, 5100)], accelerated_config());

    let first = run_consuming(&clock, &mut button, 0, 2100, 50);
    let idle = run_consuming(&clock, &mut button, 2150, 3050, 50);
    let second = run_consuming(&clock, &mut button, 3100, 5100, 50);

    assert_eq!(idle, 0);
    assert_eq!(first, 20);
    assert_eq!(second, 20);
    assert!(button.consume_long_press());
}

#[test]
fn disabled_acceleration_never_accumulates() {
    let clock = MockClock::new();
    let mut button = held_from_zero(&clock, default_config());

    let total = run_consuming(&clock, &mut button, 0, 5000, 50);

    assert_eq!(total, 0);
    assert!(!button.acceleration_enabled());
    assert!(button.is_held());
}

#[test]
fn unconsumed_value_is_dropped_on_release() {
    let clock = MockClock::new();
    let mut button = scripted_button(&clock, &[(0, 1000)], accelerated_config());

    run(&clock, &mut button, 0, 1100, 50);

    assert!(!button.is_held());
    assert_eq!(button.consume_acceleration_value(), 0);
}
