//! GPIO port register access

/// Byte-wide operations on one GPIO port. Every method takes a bit mask.
pub trait GpioPeriph {
    /// Read PxIN
    fn pxin_rd(&self) -> u8;

    /// Set bits in PxOUT
    fn pxout_set(&self, bits: u8);
    /// Clear bits in PxOUT
    fn pxout_clear(&self, bits: u8);

    /// Set bits in PxDIR, making those pins outputs
    fn pxdir_set(&self, bits: u8);
    /// Clear bits in PxDIR, making those pins inputs
    fn pxdir_clear(&self, bits: u8);

    /// Set bits in PxSEL0
    fn pxsel0_set(&self, bits: u8);
    /// Set bits in PxSEL1
    fn pxsel1_set(&self, bits: u8);
    /// Clear bits in PxSEL1
    fn pxsel1_clear(&self, bits: u8);
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
mod device {
    use super::*;
    use crate::hw_traits::Steal;
    use msp430fr2355 as pac;

    macro_rules! set_clear {
        ($reg:ident, $set:ident, $clear:ident) => {
            #[inline(always)]
            fn $set(&self, bits: u8) {
                unsafe { self.$reg.set_bits(|w| w.bits(bits)) }
            }

            #[inline(always)]
            fn $clear(&self, bits: u8) {
                unsafe { self.$reg.clear_bits(|w| w.bits(bits)) }
            }
        };
    }

    macro_rules! gpio_impl {
        ($Px:ident => $pxin:ident, $pxout:ident, $pxdir:ident, $pxsel0:ident, $pxsel1:ident) => {
            impl Steal for pac::$Px {
                #[inline(always)]
                unsafe fn steal() -> Self {
                    pac::Peripherals::conjure().$Px
                }
            }

            impl GpioPeriph for pac::$Px {
                #[inline(always)]
                fn pxin_rd(&self) -> u8 {
                    self.$pxin.read().bits()
                }

                set_clear!($pxout, pxout_set, pxout_clear);
                set_clear!($pxdir, pxdir_set, pxdir_clear);
                set_clear!($pxsel1, pxsel1_set, pxsel1_clear);

                #[inline(always)]
                fn pxsel0_set(&self, bits: u8) {
                    unsafe { self.$pxsel0.set_bits(|w| w.bits(bits)) }
                }
            }
        };
    }

    gpio_impl!(P1 => p1in, p1out, p1dir, p1sel0, p1sel1);
    gpio_impl!(P2 => p2in, p2out, p2dir, p2sel0, p2sel1);
    gpio_impl!(P5 => p5in, p5out, p5dir, p5sel0, p5sel1);
}
