//! ADC register access

use crate::adc::AdcSetup;

/// Operations on the ADC control and result registers.
pub trait AdcPeriph {
    /// Power the converter and apply `setup` to ADCCTL0-2 and ADCMCTL0. Leaves ADCENC clear.
    fn configure(&mut self, setup: &AdcSetup);

    /// Set ADCENC, allowing the selected trigger to start conversions.
    fn adcenc_set(&mut self);
    /// Clear ADCENC. A conversion in progress still completes.
    fn adcenc_clr(&mut self);
    /// Read ADCENC.
    fn adcenc_rd(&self) -> bool;

    /// Enable the ADCMEM0 conversion-complete interrupt.
    fn adcie0_set(&mut self);

    /// Read the latest result. Reading ADCMEM0 also clears ADCIFG0.
    fn adcmem0_rd(&mut self) -> u16;
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
mod device {
    use super::*;
    use msp430fr2355 as pac;

    impl AdcPeriph for pac::ADC {
        fn configure(&mut self, setup: &AdcSetup) {
            // Most control bits can only change while ADCON and ADCENC are clear
            unsafe {
                self.adcctl0
                    .clear_bits(|w| w.adcon().clear_bit().adcenc().clear_bit());
            }

            self.adcctl0.write(|w| {
                w.adcsht()
                    .bits(setup.sample_time.adcsht())
                    .adcmsc()
                    .clear_bit()
            });

            self.adcctl1.write(|w| {
                w.adcshs()
                    .bits(setup.trigger.adcshs())
                    .adcshp()
                    .adcshp_1()
                    .adcconseq()
                    .bits(setup.sequence.adcconseq())
                    .adcssel()
                    .bits(setup.clock_source.adcssel())
                    .adcdiv()
                    .bits(setup.clock_divider.adcdiv())
            });

            self.adcctl2
                .write(|w| w.adcres().bits(setup.resolution.adcres()));

            self.adcmctl0.write(|w| {
                w.adcinch()
                    .bits(setup.channel.index())
                    .adcsref()
                    .bits(setup.reference.adcsref())
            });

            unsafe { self.adcctl0.set_bits(|w| w.adcon().set_bit()) };
        }

        #[inline(always)]
        fn adcenc_set(&mut self) {
            unsafe { self.adcctl0.set_bits(|w| w.adcenc().set_bit()) };
        }

        #[inline(always)]
        fn adcenc_clr(&mut self) {
            unsafe { self.adcctl0.clear_bits(|w| w.adcenc().clear_bit()) };
        }

        #[inline(always)]
        fn adcenc_rd(&self) -> bool {
            self.adcctl0.read().adcenc().bit_is_set()
        }

        #[inline(always)]
        fn adcie0_set(&mut self) {
            unsafe { self.adcie.set_bits(|w| w.adcie0().set_bit()) };
        }

        #[inline(always)]
        fn adcmem0_rd(&mut self) -> u16 {
            self.adcmem0.read().bits()
        }
    }
}
