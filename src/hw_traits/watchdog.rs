//! Watchdog register access
//!
//! **Note**: MSP430 devices will reset after bootup if watchdog is not stopped after an initial
//! 32 ms interval (roughly), so holding it is the first thing the sampler does.

/// Operations on the watchdog timer.
pub trait WatchdogPeriph {
    /// Halt the watchdog counter.
    fn hold(&mut self);
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
mod device {
    use super::*;
    use msp430fr2355 as pac;
    use pac::wdt_a::wdtctl::WDTSSEL_A;

    const PASSWORD: u8 = 0x5A;

    impl WatchdogPeriph for pac::WDT_A {
        #[inline]
        fn hold(&mut self) {
            self.wdtctl.write(|w| {
                unsafe { w.wdtpw().bits(PASSWORD) }
                    .wdthold()
                    .hold()
                    .wdtssel()
                    .variant(WDTSSEL_A::VLOCLK)
            });
        }
    }
}
