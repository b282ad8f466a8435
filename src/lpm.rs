//! Low Power Mode (LPM) control
//!
//! The sampler only needs two of the MSP430 low power modes.
//!
//! # LPM0
//! LPM0 turns off the CPU, while the rest of the system continues unimpeded. The ADC keeps
//! converting on MODCLK and its interrupt runs without waking the CPU back into `main`.
//!
//! # LPM3
//! LPM3 turns off most high frequency clocks (FLL and DCO subsystems, MODCLK, etc.), most notably
//! SMCLK. ACLK stays on, so a Timer_B clocked from ACLK keeps counting. LPM3 will only be entered
//! if no peripherals have been configured to use SMCLK, otherwise LPM0 will be entered instead.

use bitflags::bitflags;

bitflags! {
    /// Status register bits that control the CPU and clock system.
    ///
    /// ```text
    /// SCG1 SCG0 OSC_OFF CPU_OFF GIE N Z C
    /// 7    6    5       4       3   2 1 0
    /// ```
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct StatusBits: u16 {
        /// System clock generator 1 off
        const SCG1 = 1 << 7;
        /// System clock generator 0 off
        const SCG0 = 1 << 6;
        /// Oscillator off
        const OSC_OFF = 1 << 5;
        /// CPU off
        const CPU_OFF = 1 << 4;
        /// General interrupt enable
        const GIE = 1 << 3;

        /// Low Power Mode 0. Power draw: approx 40 uA / MHz.
        const LPM0 = Self::CPU_OFF.bits();
        /// Low Power Mode 3. Power draw: approx 1.4 uA.
        const LPM3 = Self::SCG1.bits() | Self::SCG0.bits() | Self::CPU_OFF.bits();
    }
}

/// Suspend until an interrupt resumes execution.
///
/// `enter` sets `bits` in the status register in one instruction, so a mode combined with
/// [`StatusBits::GIE`] cannot miss an interrupt that arrives between enabling interrupts and
/// halting. Execution continues after `enter` only once an interrupt handler has cleared the
/// low power bits in the stacked status register.
pub trait Sleep {
    /// Enter the low power mode described by `bits`.
    fn enter(&mut self, bits: StatusBits);
}

/// The CPU's own status register.
#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
pub struct Lpm {
    _private: (),
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
impl Lpm {
    /// Handle on the status register. Any number may exist; each `enter` is a single instruction.
    #[inline(always)]
    pub fn new() -> Self {
        Lpm { _private: () }
    }
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
impl Default for Lpm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
impl Sleep for Lpm {
    #[inline(always)]
    fn enter(&mut self, bits: StatusBits) {
        unsafe { core::arch::asm!("bis.w {bits}, SR", bits = in(reg) bits.bits(), options(nostack)) };
        // Setting GIE and CPU_OFF takes effect one instruction late
        msp430::asm::nop();
    }
}
