//! Recording output pins for checking what the display lines went through.
#![allow(dead_code, reason = "Each test binary uses a different subset")]

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use match_clock::{DecoderLines, DigitPosition, DisplayMultiplexer, OutputArray};

/// One of the nine display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Digit(u8),
    Code(u8),
    LampTest,
    Blank,
}

/// Every write, in order.
pub type Log = RefCell<Vec<(Line, PinState)>>;

pub struct RecordingPin<'a> {
    line: Line,
    log: &'a Log,
}

impl<'a> RecordingPin<'a> {
    pub const fn new(line: Line, log: &'a Log) -> Self {
        Self { line, log }
    }
}

impl ErrorType for RecordingPin<'_> {
    type Error = Infallible;
}

impl OutputPin for RecordingPin<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push((self.line, PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push((self.line, PinState::High));
        Ok(())
    }
}

pub fn decoder_lines(log: &Log) -> DecoderLines<RecordingPin<'_>> {
    DecoderLines::new(
        OutputArray::new([0, 1, 2, 3].map(|index| RecordingPin::new(Line::Code(index), log))),
        RecordingPin::new(Line::LampTest, log),
        RecordingPin::new(Line::Blank, log),
    )
}

pub fn multiplexer(log: &Log, initial: DigitPosition) -> DisplayMultiplexer<RecordingPin<'_>> {
    DisplayMultiplexer::new(
        OutputArray::new([0, 1, 2].map(|index| RecordingPin::new(Line::Digit(index), log))),
        decoder_lines(log),
        initial,
    )
}

/// Line levels reconstructed from a log. Every line starts low.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lines {
    digits: [bool; 3],
    code: [bool; 4],
    lamp_test: bool,
    blank: bool,
}

impl Lines {
    pub fn replay(log: &[(Line, PinState)]) -> Self {
        let mut lines = Self::default();
        for &(line, state) in log {
            lines.apply(line, state);
        }
        lines
    }

    pub fn apply(&mut self, line: Line, state: PinState) {
        let level = match line {
            Line::Digit(index) => self.digits.get_mut(usize::from(index)),
            Line::Code(index) => self.code.get_mut(usize::from(index)),
            Line::LampTest => Some(&mut self.lamp_test),
            Line::Blank => Some(&mut self.blank),
        };
        *level.expect("line exists") = state == PinState::High;
    }

    /// Indexes of the digit lines that are high.
    pub fn lit_digits(&self) -> Vec<u8> {
        (0..3u8)
            .zip(self.digits)
            .filter_map(|(index, lit)| lit.then_some(index))
            .collect()
    }

    /// The code the decoder is showing, or `None` while blanked.
    pub fn shown_code(&self) -> Option<u8> {
        (self.lamp_test && self.blank).then(|| {
            self.code
                .iter()
                .rev()
                .fold(0u8, |code, &bit| code.wrapping_shl(1) | u8::from(bit))
        })
    }
}

/// Replays `log` and fails if two digit lines are ever high at the same time.
pub fn assert_never_two_digits_lit(log: &[(Line, PinState)]) {
    let mut lines = Lines::default();
    for (step, &(line, state)) in log.iter().enumerate() {
        lines.apply(line, state);
        assert!(
            lines.lit_digits().len() <= 1,
            "digits {:?} lit together after write #{step} ({line:?} {state:?})",
            lines.lit_digits()
        );
    }
}

/// Where `(line, state)` first appears in `log`.
pub fn position_of(log: &[(Line, PinState)], line: Line, state: PinState) -> Option<usize> {
    log.iter().position(|&entry| entry == (line, state))
}
