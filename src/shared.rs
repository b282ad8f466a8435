//! Process-wide home for the sampler.
//!
//! MSP430 interrupt vectors take no arguments, so the handlers reach the sampler through a
//! `static SharedSampler`. The slot starts empty at compile time, is filled exactly once by
//! [`SharedSampler::initialize`] and is never emptied: the sampler lives as long as the firmware.
//!
//! Every access happens inside a critical section and no borrow is ever held across a low power
//! wait. That is what lets the interrupt handlers run while `main` is asleep in
//! [`SharedSampler::initialize`] or [`SharedSampler::start`].

use crate::gpio::SamplerPins;
use crate::hw_traits::{adc::AdcPeriph, pmm::PmmPeriph, timerb::TimerB, watchdog::WatchdogPeriph};
use crate::lpm::{Sleep, StatusBits};
use crate::sampler::{Conversion, Error, ResultBuffer, Sampler, SamplerState};
use core::cell::RefCell;
use core::convert::Infallible;
use critical_section::Mutex;
use embedded_hal::digital::OutputPin;

/// A [`Sampler`] shared between `main` and the interrupt handlers.
pub struct SharedSampler<ADC, TB, DONE> {
    inner: Mutex<RefCell<Option<Sampler<ADC, TB, DONE>>>>,
}

impl<ADC, TB, DONE> SharedSampler<ADC, TB, DONE>
where
    ADC: AdcPeriph,
    TB: TimerB,
    DONE: OutputPin,
{
    /// An empty slot, suitable for a `static`.
    pub const fn new() -> Self {
        SharedSampler {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install `sampler`, configure it, and wait in LPM3 for the reference to settle.
    ///
    /// Interrupts are enabled by the same instruction that enters LPM3. Execution resumes here
    /// once the settling timer interrupt has run, and the timer is then reprogrammed as the
    /// conversion trigger. Fails if a sampler was already installed, or if the wait ended without
    /// the settling timer having fired.
    pub fn initialize<WDT, PMM, PINS, SL>(
        &self,
        sampler: Sampler<ADC, TB, DONE>,
        wdt: &mut WDT,
        pmm: &mut PMM,
        pins: &mut PINS,
        sleep: &mut SL,
    ) -> Result<(), Error>
    where
        WDT: WatchdogPeriph,
        PMM: PmmPeriph,
        PINS: SamplerPins,
        SL: Sleep,
    {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            if let Some(installed) = slot.as_ref() {
                return Err(Error::InvalidState {
                    expected: SamplerState::Uninitialized,
                    found: installed.state(),
                });
            }
            slot.insert(sampler).configure(wdt, pmm, pins)
        })?;

        sleep.enter(StatusBits::LPM3 | StatusBits::GIE);

        self.access(|sampler| sampler.arm_trigger())?
    }

    /// Enable conversions and rest in LPM0.
    ///
    /// This is the last thing `main` does before the idle loop: from here on the conversion
    /// interrupt runs on every trigger edge and returns straight back to LPM0.
    pub fn start<SL: Sleep>(&self, sleep: &mut SL) -> Result<(), Error> {
        self.access(|sampler| sampler.enable_conversions())??;
        sleep.enter(StatusBits::LPM0);
        Ok(())
    }

    /// Body of the settling timer interrupt. Returns whether the CPU should wake.
    pub fn on_settling_timer_expiry(&self) -> bool {
        self.access(|sampler| sampler.on_settling_timer_expiry())
            .unwrap_or(false)
    }

    /// Body of the ADC interrupt.
    ///
    /// When the buffer fills, the CPU is put into LPM3 from inside the handler. Returns `None`
    /// if nothing is installed.
    pub fn on_conversion_complete<SL: Sleep>(&self, sleep: &mut SL) -> Option<Conversion> {
        let outcome = self
            .access(|sampler| sampler.on_conversion_complete())
            .ok()?;
        if outcome == Conversion::BufferFull {
            sleep.enter(StatusBits::LPM3);
        }
        Some(outcome)
    }

    /// State of the installed sampler, `Uninitialized` if there is none.
    pub fn state(&self) -> SamplerState {
        self.access(|sampler| sampler.state())
            .unwrap_or(SamplerState::Uninitialized)
    }

    /// Run `f` on the result buffer once it is full, `WouldBlock` before that.
    pub fn with_results<R>(&self, f: impl FnOnce(&ResultBuffer) -> R) -> nb::Result<R, Infallible> {
        critical_section::with(|cs| match self.inner.borrow_ref(cs).as_ref() {
            Some(sampler) => sampler.read_results().map(f),
            None => Err(nb::Error::WouldBlock),
        })
    }

    /// Run `f` on the installed sampler inside a critical section.
    pub fn access<R>(&self, f: impl FnOnce(&mut Sampler<ADC, TB, DONE>) -> R) -> Result<R, Error> {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref_mut(cs)
                .as_mut()
                .map(f)
                .ok_or(Error::NotInstalled)
        })
    }
}

impl<ADC, TB, DONE> Default for SharedSampler<ADC, TB, DONE>
where
    ADC: AdcPeriph,
    TB: TimerB,
    DONE: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}
