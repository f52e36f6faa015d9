//! Fixed-size groups of digital output lines.

use embedded_hal::digital::{OutputPin, PinState};

use crate::Result;
use crate::error::Error::{CannotSetOutputState, IndexOutOfBounds};

/// Array of digital output lines, addressed by index.
///
/// Used for the three digit-enable lines and for the four BCD code lines that feed the
/// 7-segment decoder. Any [`OutputPin`] works, so the same code drives RP2040 GPIOs and the
/// recording pins used in host tests.
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub const fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    /// Drives the line at `index` to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if there is no line at `index`, or
    /// [`CannotSetOutputState`] if the pin rejects the write.
    #[inline]
    pub fn set_state_at_index(&mut self, index: u8, state: PinState) -> Result<()> {
        self.get_mut(usize::from(index))
            .ok_or(IndexOutOfBounds)?
            .set_state(state)
            .map_err(|_| CannotSetOutputState)
    }

    /// Drives every line to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`CannotSetOutputState`] if any pin rejects the write.
    #[inline]
    pub fn set_all(&mut self, state: PinState) -> Result<()> {
        for output in &mut self.0 {
            output.set_state(state).map_err(|_| CannotSetOutputState)?;
        }
        Ok(())
    }

    /// Drives line `i` from bit `i` of `bits`, least-significant bit first.
    ///
    /// Bits above `N` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CannotSetOutputState`] if any pin rejects the write.
    #[inline]
    pub fn set_from_bits(&mut self, mut bits: u8) -> Result<()> {
        for output in &mut self.0 {
            let state = PinState::from((bits & 1) == 1);
            output.set_state(state).map_err(|_| CannotSetOutputState)?;
            bits >>= 1;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.0.get_mut(index)
    }
}
