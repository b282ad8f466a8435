//! Register-level access to the peripherals the sampler drives.
//!
//! Each trait covers the few register operations the sampler needs from one peripheral. With a
//! device feature enabled on an MSP430 build they are implemented for the PAC register blocks.

pub mod adc;
pub mod gpio;
pub mod pmm;
pub mod timerb;
pub mod watchdog;

/// Obtain a second handle to a peripheral that is already owned elsewhere.
#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
pub trait Steal {
    /// # Safety
    /// Only valid for register accesses that are atomic on the CPU, such as `bis.b` / `bic.b`.
    unsafe fn steal() -> Self;
}
