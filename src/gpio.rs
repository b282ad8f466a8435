//! Pin roles used by the sampler, and the alarm input polled by the idle loop.
//!
//! The sampler needs four pins besides the done output: the sampled analog input, an auxiliary
//! analog input, the Timer_B compare output that triggers conversions, and a digital alarm
//! input. Only the alarm input is read by software; the rest are routed to peripherals.

use crate::adc::AdcChannel;
use embedded_hal::digital::InputPin;

/// Pin multiplexing performed once by the sampler during initialization.
pub trait SamplerPins {
    /// Make the alarm pin a digital input.
    fn alarm_to_input(&mut self);

    /// Make the done pin an output driven low.
    fn done_to_output(&mut self);

    /// Give the pin carrying `channel` to the ADC.
    fn analog_to_adc(&mut self, channel: AdcChannel);

    /// Give the trigger timer's CCR1 output pin to the timer.
    fn trigger_to_timer_output(&mut self);
}

/// Action taken while the alarm input is active.
///
/// No alarm behaviour is built into the sampler. Firmware supplies it as a closure.
pub trait AlarmHook {
    /// Called once per poll while the alarm input is active.
    fn on_alarm(&mut self);
}

impl<F: FnMut()> AlarmHook for F {
    #[inline(always)]
    fn on_alarm(&mut self) {
        self()
    }
}

/// Active-low digital input polled from the main loop.
pub struct AlarmInput<P> {
    pin: P,
}

impl<P: InputPin> AlarmInput<P> {
    /// Wrap an already-configured input pin.
    pub fn new(pin: P) -> Self {
        AlarmInput { pin }
    }

    /// Whether the input is pulled low. A read error counts as inactive.
    #[inline]
    pub fn is_active(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    /// Read the input once and run `hook` if it is active. Returns whether the hook ran.
    pub fn poll<H: AlarmHook>(&mut self, hook: &mut H) -> bool {
        let active = self.is_active();
        if active {
            hook.on_alarm();
        }
        active
    }

    /// Poll forever. This is where `main` spends the rest of its life once sampling is running.
    pub fn idle<H: AlarmHook>(mut self, mut hook: H) -> ! {
        loop {
            self.poll(&mut hook);
        }
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
pub use device::PortPin;

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
mod device {
    use crate::hw_traits::{gpio::GpioPeriph, Steal};
    use core::convert::Infallible;
    use core::marker::PhantomData;
    use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

    /// A single GPIO pin `N` on port `PORT`. Direction is set by whoever creates it.
    pub struct PortPin<PORT, const N: u8> {
        _port: PhantomData<PORT>,
    }

    impl<PORT: GpioPeriph + Steal, const N: u8> PortPin<PORT, N> {
        const MASK: u8 = 1 << N;

        // Only `launchpad` hands these out, one per physical pin
        pub(crate) fn new() -> Self {
            PortPin { _port: PhantomData }
        }

        #[inline(always)]
        fn port() -> PORT {
            // Pin accesses are single bis.b / bic.b / mov.b instructions
            unsafe { PORT::steal() }
        }
    }

    impl<PORT, const N: u8> ErrorType for PortPin<PORT, N> {
        type Error = Infallible;
    }

    impl<PORT: GpioPeriph + Steal, const N: u8> OutputPin for PortPin<PORT, N> {
        #[inline]
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Self::port().pxout_clear(Self::MASK);
            Ok(())
        }

        #[inline]
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Self::port().pxout_set(Self::MASK);
            Ok(())
        }
    }

    impl<PORT: GpioPeriph + Steal, const N: u8> InputPin for PortPin<PORT, N> {
        #[inline]
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(Self::port().pxin_rd() & Self::MASK != 0)
        }

        #[inline]
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }
}
