//! Timer_B register access

/// Timer_B clock source (TBSSEL)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tbssel {
    /// External TBxCLK pin
    Tbxclk,
    /// ACLK
    Aclk,
    /// SMCLK
    Smclk,
    /// Inverted TBxCLK
    Inclk,
}

/// Timer clock divider (ID)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerDiv {
    /// No division
    _1,
    /// Divide by 2
    _2,
    /// Divide by 4
    _4,
    /// Divide by 8
    _8,
}

/// Compare output mode (OUTMOD)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outmod {
    /// Output follows the OUT bit
    Out,
    /// Set at CCRn
    Set,
    /// Toggle at CCRn, reset at CCR0
    ToggleReset,
    /// Set at CCRn, reset at CCR0
    SetReset,
    /// Toggle at CCRn
    Toggle,
    /// Reset at CCRn
    Reset,
    /// Toggle at CCRn, set at CCR0
    ToggleSet,
    /// Reset at CCRn, set at CCR0
    ResetSet,
}

/// The subset of a Timer_B instance used for the settling delay and the conversion trigger.
pub trait TimerB {
    /// Write the clock select and divider. Also stops the timer and clears TBIE.
    fn config_clock(&mut self, tbssel: Tbssel, div: TimerDiv);

    /// Clear the counter and count up to CCR0
    fn upmode(&mut self);

    /// Stop the timer
    fn stop(&mut self);

    /// Write CCR0
    fn set_ccr0(&mut self, count: u16);
    /// Enable the CCR0 interrupt
    fn ccie0_set(&mut self);
    /// Disable the CCR0 interrupt
    fn ccie0_clr(&mut self);

    /// Write CCR1
    fn set_ccr1(&mut self, count: u16);
    /// Put CCR1 in compare mode with output mode `outmod`
    fn config_ccr1_cmp(&mut self, outmod: Outmod);
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
mod device {
    use super::*;
    use msp430fr2355 as pac;

    macro_rules! timerb_impl {
        ($TBx:ident, $tbxctl:ident, $tbxcctl0:ident, $tbxccr0:ident, $tbxcctl1:ident, $tbxccr1:ident) => {
            impl TimerB for pac::$TBx {
                #[inline]
                fn config_clock(&mut self, tbssel: Tbssel, div: TimerDiv) {
                    self.$tbxctl
                        .write(|w| w.tbssel().bits(tbssel as u8).id().bits(div as u8));
                }

                #[inline]
                fn upmode(&mut self) {
                    self.$tbxctl.modify(|r, w| {
                        unsafe { w.bits(r.bits()) }
                            .tbclr()
                            .set_bit()
                            .tbifg()
                            .clear_bit()
                            .mc()
                            .up()
                    });
                }

                #[inline]
                fn stop(&mut self) {
                    unsafe { self.$tbxctl.clear_bits(|w| w.mc().stop()) };
                }

                #[inline]
                fn set_ccr0(&mut self, count: u16) {
                    self.$tbxccr0.write(|w| unsafe { w.bits(count) });
                }

                #[inline]
                fn ccie0_set(&mut self) {
                    unsafe { self.$tbxcctl0.set_bits(|w| w.ccie().set_bit()) };
                }

                #[inline]
                fn ccie0_clr(&mut self) {
                    unsafe { self.$tbxcctl0.clear_bits(|w| w.ccie().clear_bit()) };
                }

                #[inline]
                fn set_ccr1(&mut self, count: u16) {
                    self.$tbxccr1.write(|w| unsafe { w.bits(count) });
                }

                #[inline]
                fn config_ccr1_cmp(&mut self, outmod: Outmod) {
                    self.$tbxcctl1.write(|w| w.outmod().bits(outmod as u8));
                }
            }
        };
    }

    timerb_impl!(TB1, tb1ctl, tb1cctl0, tb1ccr0, tb1cctl1, tb1ccr1);
}
