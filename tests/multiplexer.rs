//! Host-level tests for digit multiplexing, checked against a log of every line write.
#![cfg(feature = "host")]

mod support;

use embedded_hal::digital::PinState;
use match_clock::{ClockState, DigitPosition, EndDisplay, RoundLength, TimeKeeper};
use support::{Line, Lines, Log, assert_never_two_digits_lit, multiplexer, position_of};

fn five_fifty_nine() -> ClockState {
    let mut time_keeper = TimeKeeper::new(RoundLength::WhiteBelt);
    time_keeper.tick();
    *time_keeper.state()
}

#[test]
fn start_lights_only_the_initial_digit() {
    let log = Log::default();
    let mut display = multiplexer(&log, DigitPosition::Minutes);

    display.start(&five_fifty_nine()).expect("infallible pins");

    let lines = Lines::replay(&log.borrow());
    assert_eq!(lines.lit_digits(), [0]);
    assert_eq!(lines.shown_code(), Some(5));
    assert_never_two_digits_lit(&log.borrow());
}

#[test]
fn advance_visits_every_position_in_order() {
    let log = Log::default();
    let clock = five_fifty_nine();
    let mut display = multiplexer(&log, DigitPosition::Minutes);
    display.start(&clock).expect("infallible pins");

    let expected = [
        (DigitPosition::TensOfSeconds, 1, 5),
        (DigitPosition::Seconds, 2, 9),
        (DigitPosition::Minutes, 0, 5),
    ];
    for (position, line, digit) in expected {
        assert_eq!(display.advance(&clock).expect("infallible pins"), position);
        assert_eq!(display.state().active_position(), position);

        let lines = Lines::replay(&log.borrow());
        assert_eq!(lines.lit_digits(), [line]);
        assert_eq!(lines.shown_code(), Some(digit));
    }
    assert_never_two_digits_lit(&log.borrow());
}

#[test]
fn advance_blanks_before_switching_digits() {
    let log = Log::default();
    let clock = five_fifty_nine();
    let mut display = multiplexer(&log, DigitPosition::Seconds);
    display.start(&clock).expect("infallible pins");
    log.borrow_mut().clear();

    display.advance(&clock).expect("infallible pins");

    let log = log.borrow();
    let blanked = position_of(&log, Line::Blank, PinState::Low).expect("blanked");
    let old_off = position_of(&log, Line::Digit(2), PinState::Low).expect("seconds off");
    let new_on = position_of(&log, Line::Digit(0), PinState::High).expect("minutes on");
    let unblanked = position_of(&log, Line::Blank, PinState::High).expect("unblanked");
    assert!(blanked < old_off, "{log:?}");
    assert!(old_off < new_on, "{log:?}");
    assert!(new_on < unblanked, "{log:?}");
}

#[test]
fn render_repeats_the_same_writes() {
    let log = Log::default();
    let clock = five_fifty_nine();
    let mut display = multiplexer(&log, DigitPosition::TensOfSeconds);
    display.start(&clock).expect("infallible pins");

    log.borrow_mut().clear();
    display.render(&clock).expect("infallible pins");
    let first = log.borrow().clone();

    log.borrow_mut().clear();
    display.render(&clock).expect("infallible pins");
    assert_eq!(*log.borrow(), first);
    assert_eq!(display.state().active_position(), DigitPosition::TensOfSeconds);
}

#[test]
fn unshowable_value_writes_nothing() {
    let log = Log::default();
    let mut display = multiplexer(&log, DigitPosition::Minutes);
    display.start(&ClockState::ZERO).expect("infallible pins");
    log.borrow_mut().clear();

    display.render(&ClockState::new(12)).expect("infallible pins");

    assert!(log.borrow().is_empty());
}

#[test]
fn finish_with_zeros_lights_every_digit() {
    let log = Log::default();
    let mut display = multiplexer(&log, DigitPosition::Minutes);
    display.start(&ClockState::ZERO).expect("infallible pins");
    display.advance(&ClockState::ZERO).expect("infallible pins");

    let final_display = display.finish(EndDisplay::Zeros).expect("infallible pins");

    assert_eq!(final_display.end_display(), EndDisplay::Zeros);
    let lines = Lines::replay(&log.borrow());
    assert_eq!(lines.lit_digits(), [0, 1, 2]);
    assert_eq!(lines.shown_code(), Some(0));
}

#[test]
fn finish_blank_leaves_the_display_dark() {
    let log = Log::default();
    let mut display = multiplexer(&log, DigitPosition::Minutes);
    display.start(&ClockState::ZERO).expect("infallible pins");

    let final_display = display.finish(EndDisplay::Blank).expect("infallible pins");

    assert_eq!(final_display.end_display(), EndDisplay::Blank);
    let lines = Lines::replay(&log.borrow());
    assert!(lines.lit_digits().is_empty());
    assert_eq!(lines.shown_code(), None);
}
