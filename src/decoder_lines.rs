use embedded_hal::digital::OutputPin;

use crate::Result;
use crate::error::Error::CannotSetOutputState;
use crate::output_array::OutputArray;
use crate::segment_encoder::{CODE_LINE_COUNT, SegmentPattern};

/// The six input lines of the BCD-to-7-segment decoder.
pub struct DecoderLines<P> {
    code: OutputArray<P, CODE_LINE_COUNT>,
    lamp_test: P,
    blank: P,
}

impl<P: OutputPin> DecoderLines<P> {
    pub const fn new(code: OutputArray<P, CODE_LINE_COUNT>, lamp_test: P, blank: P) -> Self {
        Self {
            code,
            lamp_test,
            blank,
        }
    }

    /// Puts `pattern` on the lines.
    ///
    /// The code lines are written before the control lines so that, coming out of blanking, the
    /// decoder never shows a half-written code.
    ///
    /// # Errors
    ///
    /// Returns [`CannotSetOutputState`] if any pin rejects the write.
    pub fn write(&mut self, pattern: &SegmentPattern) -> Result<()> {
        if pattern.is_visible() {
            self.code.set_from_bits(pattern.code)?;
        }
        self.lamp_test
            .set_state(pattern.lamp_test)
            .map_err(|_| CannotSetOutputState)?;
        self.blank
            .set_state(pattern.blank)
            .map_err(|_| CannotSetOutputState)
    }
}
