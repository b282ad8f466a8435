#![no_main]
#![no_std]
#![feature(abi_msp430_interrupt)]

// Samples A1 (P1.1) 512 times, one conversion every 8 ACLK ticks, and lights the red LED on P1.0
// once the buffer is full. P1.4 is polled as an active-low alarm input afterwards.

use msp430_rt::entry;
use msp430fr2355::interrupt;
use msp430fr2x5x_adc_sampler::{
    launchpad::{Parts, SharedLaunchpadSampler},
    lpm::Lpm,
};
use panic_msp430 as _;

static SAMPLER: SharedLaunchpadSampler = SharedLaunchpadSampler::new();

#[entry]
fn main() -> ! {
    let periph = msp430fr2355::Peripherals::take().unwrap();
    let Parts {
        sampler,
        mut pins,
        alarm,
        mut wdt,
        mut pmm,
    } = Parts::new(periph);

    let mut lpm = Lpm::new();
    SAMPLER
        .initialize(sampler, &mut wdt, &mut pmm, &mut pins, &mut lpm)
        .unwrap();
    SAMPLER.start(&mut lpm).unwrap();

    alarm.idle(|| {
        // Alarm behaviour goes here
    })
}

// Returns the CPU to active mode, resuming `initialize` after its LPM3 wait
#[interrupt(wake_cpu)]
fn TIMER1_B0() {
    SAMPLER.on_settling_timer_expiry();
}

#[interrupt]
fn ADC() {
    SAMPLER.on_conversion_complete(&mut Lpm::new());
}

// The compiler will emit calls to the abort() compiler intrinsic if debug assertions are
// enabled (default for dev profile). MSP430 does not actually have meaningful abort() support
// so for now, we create our own in each application where debug assertions are present.
#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
