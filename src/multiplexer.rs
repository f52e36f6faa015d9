//! Digit multiplexing for the 3-digit match display.
//!
//! Only one digit is lit at a time. Each refresh period the multiplexer blanks the segments,
//! switches the lit digit to the next position, and puts that position's value back on the
//! decoder. Cycling fast enough (200 Hz per step) makes all three digits appear lit at once.
//!
//! See [`DisplayMultiplexer`] for the transition order.

#[cfg(feature = "display-trace")]
use defmt::info;
use embedded_hal::digital::{OutputPin, PinState};

use crate::Result;
use crate::decoder_lines::DecoderLines;
use crate::output_array::OutputArray;
use crate::segment_encoder::SegmentPattern;
use crate::time_keeper::ClockState;

/// The number of digits in the display.
pub const DIGIT_COUNT: usize = 3;

/// A digit position on the display, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, defmt::Format)]
pub enum DigitPosition {
    #[default]
    Minutes,
    TensOfSeconds,
    Seconds,
}

impl DigitPosition {
    /// Every position, in multiplexing order.
    pub const ALL: [Self; DIGIT_COUNT] = [Self::Minutes, Self::TensOfSeconds, Self::Seconds];

    /// The position lit after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Minutes => Self::TensOfSeconds,
            Self::TensOfSeconds => Self::Seconds,
            Self::Seconds => Self::Minutes,
        }
    }

    /// Index of this position's digit-enable line.
    #[must_use]
    pub const fn line(self) -> u8 {
        match self {
            Self::Minutes => 0,
            Self::TensOfSeconds => 1,
            Self::Seconds => 2,
        }
    }
}

/// Which digit is currently lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, defmt::Format)]
pub struct DisplayState {
    active_position: DigitPosition,
}

impl DisplayState {
    #[must_use]
    pub const fn new(active_position: DigitPosition) -> Self {
        Self { active_position }
    }

    #[must_use]
    pub const fn active_position(&self) -> DigitPosition {
        self.active_position
    }

    const fn advance(&mut self) -> DigitPosition {
        self.active_position = self.active_position.next();
        self.active_position
    }
}

/// What the display shows once the match has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, defmt::Format)]
pub enum EndDisplay {
    /// `0:00` on all three digits.
    #[default]
    Zeros,
    /// Every digit dark.
    Blank,
}

/// Drives the digit-enable lines and the decoder so that one digit is lit at a time.
///
/// Digit-enable lines are active-high. The multiplexer reads the clock but never changes it.
///
/// # Transition order
///
/// [`advance`](Self::advance) always:
/// 1. blanks all segments,
/// 2. turns off the lit digit,
/// 3. moves to the next position,
/// 4. turns on the new digit,
/// 5. shows the new position's value.
///
/// Turning the old digit off before the new one on keeps at most one digit lit at any instant.
pub struct DisplayMultiplexer<P> {
    digits: OutputArray<P, DIGIT_COUNT>,
    decoder: DecoderLines<P>,
    state: DisplayState,
}

impl<P: OutputPin> DisplayMultiplexer<P> {
    /// Takes ownership of the lines. Nothing is written until [`start`](Self::start).
    #[must_use]
    pub const fn new(
        digits: OutputArray<P, DIGIT_COUNT>,
        decoder: DecoderLines<P>,
        initial_position: DigitPosition,
    ) -> Self {
        Self {
            digits,
            decoder,
            state: DisplayState::new(initial_position),
        }
    }

    /// Puts the lines in a known state and lights the initial position.
    ///
    /// # Errors
    ///
    /// Returns an error if a line write fails.
    pub fn start(&mut self, clock: &ClockState) -> Result<()> {
        self.decoder.write(&SegmentPattern::OFF)?;
        self.digits.set_all(PinState::Low)?;
        self.digits
            .set_state_at_index(self.state.active_position().line(), PinState::High)?;
        self.render(clock)
    }

    /// Moves to the next digit position and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if a line write fails.
    pub fn advance(&mut self, clock: &ClockState) -> Result<DigitPosition> {
        let previous = self.state.active_position();
        self.decoder.write(&SegmentPattern::OFF)?;
        self.digits
            .set_state_at_index(previous.line(), PinState::Low)?;
        let current = self.state.advance();
        self.digits
            .set_state_at_index(current.line(), PinState::High)?;
        self.render(clock)?;
        #[cfg(feature = "display-trace")]
        info!("digit {:?} -> {:?}", previous, current);
        Ok(current)
    }

    /// Shows the lit position's value. Safe to call as often as you like.
    ///
    /// A value the decoder cannot show leaves the lines untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a line write fails.
    pub fn render(&mut self, clock: &ClockState) -> Result<()> {
        match SegmentPattern::encode(clock.digit(self.state.active_position())) {
            Some(pattern) => self.decoder.write(&pattern),
            None => Ok(()),
        }
    }

    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// Stops multiplexing and leaves the display showing `end_display`.
    ///
    /// For [`EndDisplay::Zeros`] all three digits are lit together. They all show the same
    /// pattern, so there is nothing to ghost.
    ///
    /// # Errors
    ///
    /// Returns an error if a line write fails.
    pub fn finish(mut self, end_display: EndDisplay) -> Result<FinalDisplay<P>> {
        self.decoder.write(&SegmentPattern::OFF)?;
        self.digits.set_all(PinState::Low)?;
        if end_display == EndDisplay::Zeros {
            if let Some(zero) = SegmentPattern::encode(0) {
                self.digits.set_all(PinState::High)?;
                self.decoder.write(&zero)?;
            }
        }
        Ok(FinalDisplay {
            _digits: self.digits,
            _decoder: self.decoder,
            end_display,
        })
    }
}

/// The display after the match. Holding it keeps the lines driven; nothing changes them again.
pub struct FinalDisplay<P> {
    _digits: OutputArray<P, DIGIT_COUNT>,
    _decoder: DecoderLines<P>,
    end_display: EndDisplay,
}

impl<P> FinalDisplay<P> {
    #[must_use]
    pub const fn end_display(&self) -> EndDisplay {
        self.end_display
    }
}
