//! The cooperative polling loop that runs a match.
//!
//! Two periods share one thread: the refresh period steps the display multiplexer and the
//! countdown period ticks the clock. Nothing blocks; each call to [`MatchClock::poll`] samples
//! both counters once and does a bounded amount of work.

#[cfg(feature = "defmt")]
use defmt::info;
use embedded_hal::digital::OutputPin;

use crate::Result;
use crate::multiplexer::{DisplayMultiplexer, DisplayState, EndDisplay, FinalDisplay};
use crate::tick_source::{Period, TickSource};
use crate::time_keeper::{ClockState, MatchStatus, RoundLength, TimeKeeper};

/// A match clock: the countdown, its display, and the two periods that drive them.
///
/// `R` is the refresh tick source, `C` the countdown tick source, and `P` the output pin type.
///
/// # Example
///
/// ```
/// use match_clock::{
///     DecoderLines, DigitPosition, DisplayMultiplexer, MatchClock, MatchStatus, OutputArray,
///     Period, RoundLength, SimulatedCounter,
/// };
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, OutputPin};
/// # struct Pin;
/// # impl ErrorType for Pin { type Error = Infallible; }
/// # impl OutputPin for Pin {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
/// # }
/// # fn main() -> match_clock::Result<()> {
/// let refresh = SimulatedCounter::new();
/// let countdown = SimulatedCounter::new();
/// let multiplexer = DisplayMultiplexer::new(
///     OutputArray::new([Pin, Pin, Pin]),
///     DecoderLines::new(OutputArray::new([Pin, Pin, Pin, Pin]), Pin, Pin),
///     DigitPosition::Minutes,
/// );
/// let mut clock = MatchClock::new(
///     RoundLength::WhiteBelt,
///     Period::new(&refresh, 78),
///     Period::new(&countdown, 62_500),
///     multiplexer,
/// )?;
///
/// countdown.advance(62_501);
/// assert_eq!(clock.poll()?, MatchStatus::Running);
/// assert_eq!(clock.clock_state().to_string(), "5:59");
/// # Ok(())
/// # }
/// ```
pub struct MatchClock<R, C, P> {
    refresh: Period<R>,
    countdown: Period<C>,
    time_keeper: TimeKeeper,
    multiplexer: DisplayMultiplexer<P>,
}

impl<R: TickSource, C: TickSource, P: OutputPin> MatchClock<R, C, P> {
    /// Sets the clock to the full round and lights the first digit.
    ///
    /// # Errors
    ///
    /// Returns an error if a display line write fails.
    pub fn new(
        round_length: RoundLength,
        refresh: Period<R>,
        countdown: Period<C>,
        multiplexer: DisplayMultiplexer<P>,
    ) -> Result<Self> {
        Self::with_time_keeper(TimeKeeper::new(round_length), refresh, countdown, multiplexer)
    }

    /// Like [`new`](Self::new), but starting from an existing countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if a display line write fails.
    pub fn with_time_keeper(
        time_keeper: TimeKeeper,
        refresh: Period<R>,
        countdown: Period<C>,
        mut multiplexer: DisplayMultiplexer<P>,
    ) -> Result<Self> {
        multiplexer.start(time_keeper.state())?;
        #[cfg(feature = "defmt")]
        info!("Match clock starting at {}", time_keeper.state());
        Ok(Self {
            refresh,
            countdown,
            time_keeper,
            multiplexer,
        })
    }

    /// One pass of the loop: refresh, then countdown, then re-render.
    ///
    /// # Errors
    ///
    /// Returns an error if a display line write fails.
    pub fn poll(&mut self) -> Result<MatchStatus> {
        self.service_refresh()?;
        let status = self.service_countdown();
        self.multiplexer.render(self.time_keeper.state())?;
        Ok(status)
    }

    /// Steps the multiplexer if the refresh period has expired. Returns whether it did.
    ///
    /// # Errors
    ///
    /// Returns an error if a display line write fails.
    pub fn service_refresh(&mut self) -> Result<bool> {
        if !self.refresh.poll() {
            return Ok(false);
        }
        self.multiplexer.advance(self.time_keeper.state())?;
        Ok(true)
    }

    /// Ticks the countdown if the countdown period has expired.
    pub fn service_countdown(&mut self) -> MatchStatus {
        if !self.countdown.poll() {
            return self.time_keeper.status();
        }
        let status = self.time_keeper.tick();
        #[cfg(feature = "defmt")]
        match status {
            MatchStatus::Running => defmt::debug!("{}", self.time_keeper.state()),
            MatchStatus::Ended => info!("Match ended at {}", self.time_keeper.state()),
        }
        status
    }

    /// Polls until the match ends, then freezes the display on `end_display`.
    ///
    /// # Errors
    ///
    /// Returns an error if a display line write fails.
    pub fn run(mut self, end_display: EndDisplay) -> Result<FinalDisplay<P>> {
        while self.poll()? == MatchStatus::Running {}
        self.finish(end_display)
    }

    /// Stops multiplexing and shows `end_display`, whatever the clock says.
    ///
    /// # Errors
    ///
    /// Returns an error if a display line write fails.
    pub fn finish(self, end_display: EndDisplay) -> Result<FinalDisplay<P>> {
        #[cfg(feature = "defmt")]
        info!("Showing {} until power-off", end_display);
        self.multiplexer.finish(end_display)
    }

    #[must_use]
    pub const fn clock_state(&self) -> &ClockState {
        self.time_keeper.state()
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.time_keeper.status()
    }

    #[must_use]
    pub const fn display_state(&self) -> DisplayState {
        self.multiplexer.state()
    }
}
