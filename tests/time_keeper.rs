//! Host-level tests for the match countdown.
#![cfg(feature = "host")]

use match_clock::{ClockState, DigitPosition, MatchStatus, RoundLength, TimeKeeper};

fn fields(state: &ClockState) -> (u8, u8, u8) {
    (state.minutes(), state.tens_of_seconds(), state.seconds())
}

#[test]
fn white_belt_starts_at_six_minutes() {
    let time_keeper = TimeKeeper::new(RoundLength::WhiteBelt);
    assert_eq!(fields(time_keeper.state()), (6, 0, 0));
    assert_eq!(time_keeper.status(), MatchStatus::Running);
}

#[test]
fn blue_belt_starts_at_seven_minutes() {
    let time_keeper = TimeKeeper::new(RoundLength::BlueBelt);
    assert_eq!(fields(time_keeper.state()), (7, 0, 0));
}

#[test]
fn first_tick_borrows_across_two_fields() {
    let mut time_keeper = TimeKeeper::new(RoundLength::WhiteBelt);
    assert_eq!(time_keeper.tick(), MatchStatus::Running);
    assert_eq!(fields(time_keeper.state()), (5, 5, 9));
}

#[test]
fn each_tick_removes_exactly_one_second() {
    let mut time_keeper = TimeKeeper::new(RoundLength::WhiteBelt);
    for remaining in (0..360u16).rev() {
        time_keeper.tick();
        assert_eq!(time_keeper.state().total_seconds(), remaining);
    }
}

#[test]
fn match_ends_on_the_tick_that_reaches_zero() {
    let mut time_keeper = TimeKeeper::new(RoundLength::WhiteBelt);
    for _ in 0..359 {
        assert_eq!(time_keeper.tick(), MatchStatus::Running);
    }
    assert_eq!(fields(time_keeper.state()), (0, 0, 1));

    assert_eq!(time_keeper.tick(), MatchStatus::Ended);
    assert_eq!(*time_keeper.state(), ClockState::ZERO);
}

#[test]
fn ended_match_ignores_further_ticks() {
    let mut time_keeper = TimeKeeper::new(RoundLength::WhiteBelt);
    for _ in 0..360 {
        time_keeper.tick();
    }
    for _ in 0..100 {
        assert_eq!(time_keeper.tick(), MatchStatus::Ended);
        assert_eq!(*time_keeper.state(), ClockState::ZERO);
    }
}

#[test]
fn fields_stay_in_range_for_a_whole_round() {
    let mut time_keeper = TimeKeeper::new(RoundLength::BlueBelt);
    while time_keeper.status() == MatchStatus::Running {
        let state = time_keeper.state();
        assert!(state.seconds() <= 9, "{state}");
        assert!(state.tens_of_seconds() <= 5, "{state}");
        assert!(state.minutes() <= 7, "{state}");
        time_keeper.tick();
    }
}

#[test]
fn zero_start_is_already_ended() {
    let time_keeper = TimeKeeper::from_state(ClockState::ZERO);
    assert_eq!(time_keeper.status(), MatchStatus::Ended);
}

#[test]
fn digits_map_to_positions() {
    let mut time_keeper = TimeKeeper::new(RoundLength::BlueBelt);
    for _ in 0..75 {
        time_keeper.tick();
    }
    let state = time_keeper.state();
    assert_eq!(state.to_string(), "5:45");
    assert_eq!(state.digit(DigitPosition::Minutes), 5);
    assert_eq!(state.digit(DigitPosition::TensOfSeconds), 4);
    assert_eq!(state.digit(DigitPosition::Seconds), 5);
}
