//! PMM register access

use crate::pmm::ReferenceVoltage;

/// Operations on the power management module.
pub trait PmmPeriph {
    /// Clear LOCKLPM5 so GPIO configuration takes effect after reset.
    fn unlock_gpio(&mut self);

    /// Select `vref` and enable the internal reference.
    fn enable_reference(&mut self, vref: ReferenceVoltage);
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
mod device {
    use super::*;
    use msp430fr2355 as pac;

    impl PmmPeriph for pac::PMM {
        #[inline]
        fn unlock_gpio(&mut self) {
            self.pm5ctl0.write(|w| w.locklpm5().locklpm5_0());
        }

        #[inline]
        fn enable_reference(&mut self, vref: ReferenceVoltage) {
            self.pmmctl2
                .modify(|_, w| w.refvsel().bits(vref.refvsel()).intrefen().intrefen_1());
        }
    }
}
