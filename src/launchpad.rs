//! Wiring for the MSP-EXP430FR2355 LaunchPad.
//!
//! | Role                 | Pin        | Peripheral      |
//! |----------------------|------------|-----------------|
//! | Done signal          | P1.0       | red LED         |
//! | Sampled input        | P1.1 / A1  | ADC             |
//! | Auxiliary input      | P1.2 / A2  | ADC (unused)    |
//! | Alarm input          | P1.4       | GPIO, active low |
//! | Trigger output       | P2.0       | TB1.1           |
//!
//! TB1 provides both the settling delay (vector `TIMER1_B0`) and the conversion trigger, since
//! TB1.1 is wired to the ADC sample-and-hold input.

use crate::gpio::{AlarmInput, PortPin, SamplerPins};
use crate::hw_traits::gpio::GpioPeriph;
use crate::adc::AdcChannel;
use crate::pac;
use crate::{Sampler, SharedSampler};

/// Red LED, raised when the buffer is full
pub type DonePin = PortPin<pac::P1, 0>;
/// Alarm input
pub type AlarmPin = PortPin<pac::P1, 4>;
/// Sampler using the LaunchPad wiring
pub type LaunchpadSampler = Sampler<pac::ADC, pac::TB1, DonePin>;
/// Shared slot for a [`LaunchpadSampler`], meant for a `static`
pub type SharedLaunchpadSampler = SharedSampler<pac::ADC, pac::TB1, DonePin>;

const DONE: u8 = 1 << 0;
const ALARM: u8 = 1 << 4;
const TB1_1: u8 = 1 << 0;

/// Ports whose pins the sampler routes during initialization
pub struct LaunchpadPins {
    p1: pac::P1,
    p2: pac::P2,
    p5: pac::P5,
}

#[inline(always)]
fn to_analog<P: GpioPeriph>(port: &P, mask: u8) {
    port.pxsel0_set(mask);
    port.pxsel1_set(mask);
}

impl SamplerPins for LaunchpadPins {
    fn alarm_to_input(&mut self) {
        self.p1.pxdir_clear(ALARM);
    }

    fn done_to_output(&mut self) {
        self.p1.pxout_clear(DONE);
        self.p1.pxdir_set(DONE);
    }

    fn analog_to_adc(&mut self, channel: AdcChannel) {
        let (port, pin) = channel.pin();
        let mask = 1 << pin;
        match port {
            1 => to_analog(&self.p1, mask),
            _ => to_analog(&self.p5, mask),
        }
    }

    fn trigger_to_timer_output(&mut self) {
        self.p2.pxdir_set(TB1_1);
        self.p2.pxsel0_set(TB1_1);
        self.p2.pxsel1_clear(TB1_1);
    }
}

/// Everything the firmware needs, split out of the PAC peripherals.
pub struct Parts {
    /// Sampler owning ADC, TB1 and the done pin
    pub sampler: LaunchpadSampler,
    /// Pin routing for [`SharedSampler::initialize`]
    pub pins: LaunchpadPins,
    /// Alarm input for the idle loop
    pub alarm: AlarmInput<AlarmPin>,
    /// Watchdog, held during initialization
    pub wdt: pac::WDT_A,
    /// Power management, for the reference and GPIO unlock
    pub pmm: pac::PMM,
}

impl Parts {
    /// Split `periph` into the sampler's parts. No register is written.
    pub fn new(periph: pac::Peripherals) -> Self {
        Parts {
            sampler: Sampler::new(periph.ADC, periph.TB1, DonePin::new()),
            pins: LaunchpadPins {
                p1: periph.P1,
                p2: periph.P2,
                p5: periph.P5,
            },
            alarm: AlarmInput::new(AlarmPin::new()),
            wdt: periph.WDT_A,
            pmm: periph.PMM,
        }
    }
}
