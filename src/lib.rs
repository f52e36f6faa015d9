//! A countdown clock for grappling matches on a 3-digit, 7-segment multiplexed display.
//!
//! The clock counts a 6- or 7-minute round down to `0:00` while multiplexing the three digits,
//! both from free-running tick counters polled in a single loop. See [`MatchClock`].
#![cfg_attr(not(test), no_std)]

mod constants;
mod decoder_lines;
mod error;
#[cfg(feature = "pico1")]
mod hardware;
mod match_clock;
pub mod multiplexer;
mod never;
mod output_array;
pub mod segment_encoder;
pub mod tick_source;
pub mod time_keeper;

// Re-export commonly used items
pub use constants::*;
pub use decoder_lines::DecoderLines;
pub use error::{Error, Result};
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
pub use match_clock::MatchClock;
pub use multiplexer::{
    DIGIT_COUNT, DigitPosition, DisplayMultiplexer, DisplayState, EndDisplay, FinalDisplay,
};
pub use never::Never;
pub use output_array::OutputArray;
pub use segment_encoder::{CODE_LINE_COUNT, SegmentPattern};
#[cfg(not(feature = "host"))]
pub use tick_source::InstantTickSource;
pub use tick_source::{Period, SimulatedCounter, TickSource};
pub use time_keeper::{ClockState, MatchStatus, RoundLength, TimeKeeper};
