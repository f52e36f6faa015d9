//! Digit-to-line encoding for a 7-segment display behind a BCD decoder.
//!
//! The display is not driven segment by segment. Four code lines carry a BCD digit into a
//! decoder/driver chip, which lights the right segments. Two active-low control lines on the
//! decoder override the code: lamp test (all segments on) and blanking (all segments off).

use embedded_hal::digital::PinState;

/// The number of BCD code lines into the decoder.
pub const CODE_LINE_COUNT: usize = 4;

/// BCD code for each digit 0-9. Bit 0 drives line D0, bit 3 drives D3.
const BCD_CODES: [u8; 10] = [
    0b_0000, // 0
    0b_0001, // 1
    0b_0010, // 2
    0b_0011, // 3
    0b_0100, // 4
    0b_0101, // 5
    0b_0110, // 6
    0b_0111, // 7
    0b_1000, // 8
    0b_1001, // 9
];

/// The levels to put on the decoder's six input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPattern {
    /// Code line levels, D0 in bit 0.
    pub code: u8,
    /// Lamp-test control line. Low forces every segment on.
    pub lamp_test: PinState,
    /// Blanking control line. Low (with lamp test high) forces every segment off.
    pub blank: PinState,
}

impl SegmentPattern {
    /// All segments off. Written between digit activations so no segment glows on the wrong
    /// digit while the digit lines switch.
    pub const OFF: Self = Self {
        code: 0,
        lamp_test: PinState::High,
        blank: PinState::Low,
    };

    /// Returns the pattern that shows `digit`, or `None` for anything outside 0-9.
    ///
    /// Callers treat `None` as "leave the display alone": a bad digit never reaches the lines.
    #[must_use]
    pub fn encode(digit: u8) -> Option<Self> {
        BCD_CODES.get(usize::from(digit)).map(|&code| Self {
            code,
            lamp_test: PinState::High,
            blank: PinState::High,
        })
    }

    /// Whether this pattern lets the decoder show its code.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.lamp_test == PinState::High && self.blank == PinState::High
    }
}
