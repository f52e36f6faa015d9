//! The authoritative match countdown.

use derive_more::derive::Display;

use crate::multiplexer::DigitPosition;

/// Round length, chosen at build time by belt division.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, defmt::Format)]
pub enum RoundLength {
    /// Six-minute rounds.
    #[default]
    #[display("white belt (6 min)")]
    WhiteBelt,
    /// Seven-minute rounds.
    #[display("blue belt (7 min)")]
    BlueBelt,
}

impl RoundLength {
    #[must_use]
    pub const fn minutes(self) -> u8 {
        match self {
            Self::WhiteBelt => 6,
            Self::BlueBelt => 7,
        }
    }

    /// Parses the `MATCH_ROUND` build setting.
    ///
    /// Accepts `white`, `white-belt`, `6`, `blue`, `blue-belt`, and `7`.
    #[must_use]
    pub const fn parse(name: &str) -> Option<Self> {
        match name.as_bytes() {
            b"white" | b"white-belt" | b"6" => Some(Self::WhiteBelt),
            b"blue" | b"blue-belt" | b"7" => Some(Self::BlueBelt),
            _ => None,
        }
    }
}

/// Whether the match is still being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum MatchStatus {
    Running,
    Ended,
}

/// Remaining match time as the three displayed digits, `m:ss`.
///
/// The fields can only be set through [`ClockState::new`] and changed by [`TimeKeeper::tick`],
/// so `tens_of_seconds <= 5` and `seconds <= 9` always hold.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("{minutes}:{tens_of_seconds}{seconds}")]
pub struct ClockState {
    minutes: u8,
    tens_of_seconds: u8,
    seconds: u8,
}

impl ClockState {
    /// A whole number of minutes, `m:00`.
    #[must_use]
    pub const fn new(minutes: u8) -> Self {
        Self {
            minutes,
            tens_of_seconds: 0,
            seconds: 0,
        }
    }

    pub const ZERO: Self = Self::new(0);

    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub const fn tens_of_seconds(&self) -> u8 {
        self.tens_of_seconds
    }

    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// The digit shown at `position`.
    #[must_use]
    pub const fn digit(&self, position: DigitPosition) -> u8 {
        match position {
            DigitPosition::Minutes => self.minutes,
            DigitPosition::TensOfSeconds => self.tens_of_seconds,
            DigitPosition::Seconds => self.seconds,
        }
    }

    /// Remaining time in seconds.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "At most 255 * 60 + 59, well inside u16"
    )]
    #[must_use]
    pub fn total_seconds(&self) -> u16 {
        u16::from(self.minutes) * 60 + u16::from(self.tens_of_seconds) * 10 + u16::from(self.seconds)
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minutes == 0 && self.tens_of_seconds == 0 && self.seconds == 0
    }

    /// Takes one second off, borrowing from the larger fields. Returns `false` (and leaves the
    /// state alone) at `0:00`.
    const fn decrement(&mut self) -> bool {
        if let Some(seconds) = self.seconds.checked_sub(1) {
            self.seconds = seconds;
        } else if let Some(tens_of_seconds) = self.tens_of_seconds.checked_sub(1) {
            self.tens_of_seconds = tens_of_seconds;
            self.seconds = 9;
        } else if let Some(minutes) = self.minutes.checked_sub(1) {
            self.minutes = minutes;
            self.tens_of_seconds = 5;
            self.seconds = 9;
        } else {
            return false;
        }
        true
    }
}

impl defmt::Format for ClockState {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(
            fmt,
            "{}:{}{}",
            self.minutes,
            self.tens_of_seconds,
            self.seconds
        );
    }
}

/// Owns the countdown and the match status.
#[derive(Debug)]
pub struct TimeKeeper {
    state: ClockState,
    status: MatchStatus,
}

impl TimeKeeper {
    #[must_use]
    pub const fn new(round_length: RoundLength) -> Self {
        Self::from_state(ClockState::new(round_length.minutes()))
    }

    /// Starts from an existing state. A `0:00` start is already ended.
    #[must_use]
    pub const fn from_state(state: ClockState) -> Self {
        let status = if state.is_zero() {
            MatchStatus::Ended
        } else {
            MatchStatus::Running
        };
        Self { state, status }
    }

    /// Counts down one second.
    ///
    /// The match ends on the tick that reaches `0:00`. Once ended, further ticks change nothing.
    pub fn tick(&mut self) -> MatchStatus {
        if self.status == MatchStatus::Ended {
            return self.status;
        }
        if !self.state.decrement() || self.state.is_zero() {
            self.status = MatchStatus::Ended;
        }
        self.status
    }

    #[must_use]
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }
}
