use embassy_rp::gpio::{self, Level};

use crate::decoder_lines::DecoderLines;
use crate::multiplexer::{DIGIT_COUNT, DigitPosition, DisplayMultiplexer};
use crate::output_array::OutputArray;
use crate::segment_encoder::CODE_LINE_COUNT;

/// Pin assignment for the match clock on a Raspberry Pi Pico.
///
/// | Line            | Pin  |
/// |-----------------|------|
/// | Lamp test       | GP2  |
/// | Blank           | GP3  |
/// | Seconds digit   | GP4  |
/// | Tens digit      | GP5  |
/// | Minutes digit   | GP6  |
/// | BCD D0..D3      | GP8..GP11 |
pub struct Hardware {
    /// Digit-enable lines in [`DigitPosition::line`] order: minutes, tens, seconds.
    pub digits: OutputArray<gpio::Output<'static>, DIGIT_COUNT>,
    pub code: OutputArray<gpio::Output<'static>, CODE_LINE_COUNT>,
    pub lamp_test: gpio::Output<'static>,
    pub blank: gpio::Output<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let digits = OutputArray::new([
            gpio::Output::new(peripherals.PIN_6, Level::Low),
            gpio::Output::new(peripherals.PIN_5, Level::Low),
            gpio::Output::new(peripherals.PIN_4, Level::Low),
        ]);

        let code = OutputArray::new([
            gpio::Output::new(peripherals.PIN_8, Level::Low),
            gpio::Output::new(peripherals.PIN_9, Level::Low),
            gpio::Output::new(peripherals.PIN_10, Level::Low),
            gpio::Output::new(peripherals.PIN_11, Level::Low),
        ]);

        // Lamp test high and blank low: every segment off until the clock starts.
        let lamp_test = gpio::Output::new(peripherals.PIN_2, Level::High);
        let blank = gpio::Output::new(peripherals.PIN_3, Level::Low);

        Self {
            digits,
            code,
            lamp_test,
            blank,
        }
    }
}

impl Hardware {
    /// Hands the lines to a multiplexer that starts on the minutes digit.
    #[must_use]
    pub fn into_multiplexer(self) -> DisplayMultiplexer<gpio::Output<'static>> {
        DisplayMultiplexer::new(
            self.digits,
            DecoderLines::new(self.code, self.lamp_test, self.blank),
            DigitPosition::Minutes,
        )
    }
}
