//! Timer-triggered ADC sampling for the MSP430FR2x5x family of microcontrollers.
//! Here are the [`datasheet`] and [`User's guide`] for reference.
//!
//! The sampler fills a fixed buffer of [`SAMPLE_COUNT`](config::SAMPLE_COUNT) conversions of a
//! single analog channel, paced by a Timer_B compare output, and drives a pin high once the
//! buffer is full. The whole run is interrupt driven: the CPU spends its time in a low power
//! mode and only wakes for the settling timer and for each finished conversion.
//!
//! [`datasheet`]: http://www.ti.com/lit/ds/symlink/msp430fr2355.pdf
//! [`User's guide`]: http://www.ti.com/lit/ug/slau445i/slau445i.pdf
//!
//! # Usage
//!
//! The sampling logic in [`sampler`] is generic over the register-level traits in
//! [`hw_traits`]. Enabling one of the device features (`msp430fr2355`, `msp430fr2353`,
//! `msp430fr2155`, `msp430fr2153`) on an `msp430-none-elf` build provides implementations of
//! those traits for the device PAC, plus the LaunchPad pin map in `launchpad`.
//!
//! Requires `msp430-elf-gcc` installed and in $PATH to build for the device. When using this
//! crate as a dependency, make sure you include the appropriate `memory.x` file for your
//! microcontroller.
//!
//! # Demo
//!
//! `demos/adc_sampler.rs` is the complete firmware image. Build it with
//! `cargo build --example adc_sampler --features msp430fr2355 --target msp430-none-elf`.

#![no_std]
#![cfg_attr(target_arch = "msp430", feature(asm_experimental_arch))]
#![deny(missing_docs)]

// Logs through defmt when the `defmt` feature is on, expands to nothing otherwise.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}

pub mod adc;
pub mod config;
pub mod gpio;
pub mod hw_traits;
pub mod lpm;
pub mod pmm;
pub mod sampler;
pub mod shared;
pub mod timer;

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
pub mod launchpad;

#[cfg(all(feature = "2x5x", target_arch = "msp430"))]
pub use msp430fr2355 as pac;

pub use sampler::{Conversion, Error, ResultBuffer, Sampler, SamplerState};
pub use shared::SharedSampler;
