//! Free-running tick counters and the periods built on them.
//!
//! A [`TickSource`] only answers "how many ticks since the last reset?". A [`Period`] pairs a
//! source with a threshold and turns it into something the main loop can poll: each call to
//! [`Period::poll`] reports whether the period has expired and, if so, restarts it.
//!
//! Ticks beyond the threshold are discarded on reset, so each period runs slightly long and
//! the error accumulates. The countdown therefore drifts against true 1 Hz by the polling
//! granularity plus one tick per second.

use core::cell::Cell;

#[cfg(not(feature = "host"))]
use embassy_time::{Duration, Instant};

/// A free-running counter sampled by polling.
pub trait TickSource {
    /// Ticks accumulated since the last [`reset`](Self::reset). Saturates instead of wrapping.
    fn elapsed(&self) -> u32;

    /// Zeroes the counter.
    fn reset(&mut self);
}

/// A [`TickSource`] with an expiry threshold.
///
/// The period expires once `elapsed() > threshold`, matching the strict comparison of the
/// hardware timer compare this replaces.
pub struct Period<T> {
    source: T,
    threshold: u32,
}

impl<T: TickSource> Period<T> {
    #[must_use]
    pub const fn new(source: T, threshold: u32) -> Self {
        Self { source, threshold }
    }

    /// Returns `true` (and resets the source) if the period has expired.
    pub fn poll(&mut self) -> bool {
        if self.source.elapsed() > self.threshold {
            self.source.reset();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub const fn source(&self) -> &T {
        &self.source
    }
}

/// A counter advanced by hand, for driving the clock deterministically on the host.
///
/// The counter lives behind a shared reference, so a test can hold on to it after handing
/// `&SimulatedCounter` to a [`Period`] as the tick source.
#[derive(Debug, Default)]
pub struct SimulatedCounter(Cell<u32>);

impl SimulatedCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(Cell::new(0))
    }

    /// Adds `ticks` to the counter, saturating at `u32::MAX`.
    pub fn advance(&self, ticks: u32) {
        self.0.set(self.0.get().saturating_add(ticks));
    }

    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.0.get()
    }
}

impl TickSource for &SimulatedCounter {
    fn elapsed(&self) -> u32 {
        self.ticks()
    }

    fn reset(&mut self) {
        self.0.set(0);
    }
}

/// A [`TickSource`] backed by the `embassy-time` clock, which on the RP2040 is the free-running
/// 1 MHz system timer.
///
/// `tick` sets the width of one tick, so a 16 µs tick reproduces a 16 MHz clock behind a
/// divide-by-256 prescaler. The underlying instant is 64 bits wide and never wraps in practice.
#[cfg(not(feature = "host"))]
pub struct InstantTickSource {
    origin: Instant,
    tick: Duration,
}

#[cfg(not(feature = "host"))]
impl InstantTickSource {
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        Self {
            origin: Instant::now(),
            tick,
        }
    }
}

#[cfg(not(feature = "host"))]
impl TickSource for InstantTickSource {
    fn elapsed(&self) -> u32 {
        let elapsed = Instant::now()
            .saturating_duration_since(self.origin)
            .as_ticks();
        let ticks = elapsed.checked_div(self.tick.as_ticks()).unwrap_or(u64::MAX);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    fn reset(&mut self) {
        self.origin = Instant::now();
    }
}
