//! A grappling match clock on a 3-digit 7-segment display.
//!
//! Runs on a Raspberry Pi Pico RP2040. The round starts at power-on; set `MATCH_ROUND` at build
//! time to pick white-belt (6 min) or blue-belt (7 min) rounds.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use match_clock::{
    COUNTDOWN_THRESHOLD, COUNTDOWN_TICK, END_DISPLAY, Hardware, InstantTickSource, MatchClock,
    Never, ONE_DAY, Period, REFRESH_THRESHOLD, REFRESH_TICK, ROUND_LENGTH, Result,
};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner0: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner0).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Never> {
    info!("Round: {}, end display: {}", ROUND_LENGTH, END_DISPLAY);
    let hardware = Hardware::default();

    let refresh = Period::new(InstantTickSource::new(REFRESH_TICK), REFRESH_THRESHOLD);
    let countdown = Period::new(InstantTickSource::new(COUNTDOWN_TICK), COUNTDOWN_THRESHOLD);
    let match_clock = MatchClock::new(
        ROUND_LENGTH,
        refresh,
        countdown,
        hardware.into_multiplexer(),
    )?;

    // Busy-polls until 0:00. Nothing else runs on this executor, so not yielding is fine.
    let _final_display = match_clock.run(END_DISPLAY)?;

    // Keep the lines driven and sleep forever
    loop {
        Timer::after(ONE_DAY).await;
    }
}
