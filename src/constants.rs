use embassy_time::Duration;

use crate::multiplexer::EndDisplay;
use crate::time_keeper::RoundLength;

/// Width of one refresh tick: a 16 MHz clock behind a divide-by-1024 prescaler.
pub const REFRESH_TICK: Duration = Duration::from_micros(64);

/// Refresh ticks per multiplexer step. 78 × 64 µs ≈ 5 ms, i.e. 200 Hz.
pub const REFRESH_THRESHOLD: u32 = 78;

/// Width of one countdown tick: a 16 MHz clock behind a divide-by-256 prescaler.
pub const COUNTDOWN_TICK: Duration = Duration::from_micros(16);

/// Countdown ticks per second. 62,500 × 16 µs = 1 s.
pub const COUNTDOWN_THRESHOLD: u32 = 62_500;

/// Duration representing one day, for idling after the match.
pub const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

/// Round length selected at build time through `MATCH_ROUND` (see `build.rs`).
pub const ROUND_LENGTH: RoundLength = match RoundLength::parse(env!("MATCH_ROUND")) {
    Some(round_length) => round_length,
    None => panic!("MATCH_ROUND must be one of: white, white-belt, 6, blue, blue-belt, 7"),
};

/// What the display shows after the final second.
pub const END_DISPLAY: EndDisplay = EndDisplay::Zeros;
