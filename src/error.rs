use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// The countdown and encoding logic cannot fail. Only writes to the display's output lines can,
/// and only on HALs whose pins report errors.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Error {
    /// A digital output line rejected a write.
    #[display("Error setting output state")]
    CannotSetOutputState,

    /// No output line exists at the requested index.
    #[display("Index out of bounds")]
    IndexOutOfBounds,
}
