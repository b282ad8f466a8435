//! The sampler: one fixed buffer filled by the ADC, one pin raised when it is full.
//!
//! Lifecycle:
//!
//! ```text
//! Uninitialized --configure--> Settling --settling timer--> Sampling --512th result--> Full
//!                                                            ^    |
//!                                                            +----+ each result below 512
//! ```
//!
//! [`Sampler::configure`] leaves the settling timer running. Its interrupt calls
//! [`Sampler::on_settling_timer_expiry`], after which [`Sampler::arm_trigger`] turns the same
//! timer into the conversion trigger and [`Sampler::enable_conversions`] lets conversions start.
//! Every finished conversion goes through [`Sampler::on_conversion_complete`].
//!
//! The interrupt-side methods never fail and never block. The `Sleep` calls that sit between
//! these steps belong to [`SharedSampler`](crate::shared::SharedSampler), which owns the sampler
//! on behalf of the interrupt vectors.

use crate::config::{
    ADC_SETUP, REFERENCE, SAMPLE_COUNT, SAMPLE_PERIOD, SETTLING_TICKS, TIMER_CONFIG,
    TRIGGER_COMPARE,
};
use crate::gpio::SamplerPins;
use crate::hw_traits::{adc::AdcPeriph, pmm::PmmPeriph, timerb::TimerB, watchdog::WatchdogPeriph};
use crate::timer;
use core::convert::Infallible;
use embedded_hal::digital::OutputPin;

/// Conversion results, in the order the conversions finished.
pub type ResultBuffer = [u16; SAMPLE_COUNT];

/// Where the sampler is in its lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerState {
    /// Created, no register touched yet
    Uninitialized,
    /// Peripherals configured, waiting for the reference to settle
    Settling,
    /// Settled; results are being stored once conversions are enabled
    Sampling,
    /// The buffer is full, conversions are stopped and the done pin is high
    Full,
}

/// Outcome of one conversion-complete event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Conversion {
    /// The result was stored and more are expected
    Stored,
    /// The result filled the last slot. Conversions are off and the done pin is high.
    BufferFull,
    /// The reference had not settled yet. The result was read and dropped.
    Ignored,
}

/// Lifecycle step requested out of order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The step needs the sampler in `expected` but it was in `found`.
    InvalidState {
        /// State the step requires
        expected: SamplerState,
        /// State the sampler was in
        found: SamplerState,
    },
    /// No sampler has been installed in the shared slot yet.
    NotInstalled,
}

/// Owns the ADC, the trigger timer, the done pin and the result buffer.
pub struct Sampler<ADC, TB, DONE> {
    adc: ADC,
    timer: TB,
    done: DONE,
    results: ResultBuffer,
    index: usize,
    state: SamplerState,
}

impl<ADC, TB, DONE> Sampler<ADC, TB, DONE>
where
    ADC: AdcPeriph,
    TB: TimerB,
    DONE: OutputPin,
{
    /// Take ownership of the peripherals. Nothing is written until [`Sampler::configure`].
    pub const fn new(adc: ADC, timer: TB, done: DONE) -> Self {
        Sampler {
            adc,
            timer,
            done,
            results: [0; SAMPLE_COUNT],
            index: 0,
            state: SamplerState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// Slot the next result will be written to. Always below [`SAMPLE_COUNT`].
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Results stored so far in the current pass over the buffer.
    ///
    /// Empty again once the buffer is full; use [`Sampler::read_results`] then.
    #[inline]
    pub fn filled(&self) -> &[u16] {
        &self.results[..self.index]
    }

    /// Whether the ADC will start a conversion on the next trigger edge.
    #[inline]
    pub fn conversions_enabled(&self) -> bool {
        self.adc.adcenc_rd()
    }

    /// The result buffer once it is full, `WouldBlock` before that.
    ///
    /// The contents are only meaningful after the done pin went high, which is exactly when this
    /// starts returning `Ok`.
    pub fn read_results(&self) -> nb::Result<&ResultBuffer, Infallible> {
        match self.state {
            SamplerState::Full => Ok(&self.results),
            _ => Err(nb::Error::WouldBlock),
        }
    }

    /// Configure every peripheral the sampler uses and start the settling timer.
    ///
    /// The watchdog is held before anything else is touched. The alarm input, the done output and
    /// the analog and trigger pins are routed, the internal reference is enabled and the ADC is
    /// set up with its conversion-complete interrupt enabled but ADCENC still clear. Finally the
    /// timer starts counting towards [`SETTLING_TICKS`] with its CCR0 interrupt enabled.
    pub fn configure<WDT, PMM, PINS>(
        &mut self,
        wdt: &mut WDT,
        pmm: &mut PMM,
        pins: &mut PINS,
    ) -> Result<(), Error>
    where
        WDT: WatchdogPeriph,
        PMM: PmmPeriph,
        PINS: SamplerPins,
    {
        self.expect(SamplerState::Uninitialized)?;
        wdt.hold();

        pins.alarm_to_input();
        pins.done_to_output();
        self.done.set_low().ok();
        pins.analog_to_adc(ADC_SETUP.channel);
        pins.analog_to_adc(ADC_SETUP.aux_channel);
        pins.trigger_to_timer_output();
        pmm.unlock_gpio();

        pmm.enable_reference(REFERENCE);
        self.adc.configure(&ADC_SETUP);
        self.adc.adcie0_set();

        timer::start_settling(&mut self.timer, &TIMER_CONFIG, SETTLING_TICKS);
        self.transition(SamplerState::Settling);
        Ok(())
    }

    /// Settling timer CCR0 interrupt.
    ///
    /// The first call after [`Sampler::configure`] stops the timer, moves to `Sampling` and
    /// returns `true`: the CPU should leave the low power mode it waited in. In any other state
    /// the call changes nothing and returns `false`.
    pub fn on_settling_timer_expiry(&mut self) -> bool {
        if self.state != SamplerState::Settling {
            return false;
        }
        self.timer.stop();
        self.transition(SamplerState::Sampling);
        true
    }

    /// Repurpose the settling timer as the periodic conversion trigger.
    ///
    /// Its CCR0 interrupt is disabled first, so the settling handler cannot run again. The trigger
    /// output pin was already routed by [`Sampler::configure`].
    pub fn arm_trigger(&mut self) -> Result<(), Error> {
        self.expect(SamplerState::Sampling)?;
        timer::start_trigger(&mut self.timer, &TIMER_CONFIG, SAMPLE_PERIOD, TRIGGER_COMPARE);
        Ok(())
    }

    /// Set ADCENC. From here on every trigger edge starts a conversion.
    pub fn enable_conversions(&mut self) -> Result<(), Error> {
        self.expect(SamplerState::Sampling)?;
        self.adc.adcenc_set();
        Ok(())
    }

    /// ADC conversion-complete interrupt.
    ///
    /// Stores ADCMEM0 at the current index and advances it. The result that fills the last slot
    /// clears ADCENC, rewinds the index, raises the done pin and moves to `Full`.
    ///
    /// Results arriving before the settling timer fired are read (clearing ADCIFG0) and dropped,
    /// leaving the index and state alone. While `Full` a conversion can only complete if someone
    /// set ADCENC again, and that starts a new pass over the buffer.
    pub fn on_conversion_complete(&mut self) -> Conversion {
        match self.state {
            SamplerState::Uninitialized | SamplerState::Settling => {
                self.adc.adcmem0_rd();
                return Conversion::Ignored;
            }
            SamplerState::Full => self.transition(SamplerState::Sampling),
            SamplerState::Sampling => {}
        }

        self.results[self.index] = self.adc.adcmem0_rd();
        self.index += 1;

        if self.index == SAMPLE_COUNT {
            self.adc.adcenc_clr();
            self.index = 0;
            self.done.set_high().ok();
            self.transition(SamplerState::Full);
            Conversion::BufferFull
        } else {
            Conversion::Stored
        }
    }

    /// Give back the peripherals.
    pub fn free(self) -> (ADC, TB, DONE) {
        (self.adc, self.timer, self.done)
    }

    #[inline]
    fn expect(&self, expected: SamplerState) -> Result<(), Error> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidState {
                expected,
                found: self.state,
            })
        }
    }

    #[inline]
    fn transition(&mut self, next: SamplerState) {
        debug!("sampler: {} -> {}", self.state, next);
        self.state = next;
    }
}
