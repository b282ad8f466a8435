//! Compile-time configuration.
//!
//! There is no run-time configuration: the buffer length, both timer roles and the converter
//! setup are fixed when the firmware image is built.

use crate::adc::{
    AdcChannel, AdcSetup, ClockDivider, ClockSource, ConversionSequence, ReferenceSelect,
    Resolution, SampleTime, TriggerSource,
};
use crate::pmm::ReferenceVoltage;
use crate::timer::TimerConfig;

/// Number of conversions stored before the done pin is raised.
pub const SAMPLE_COUNT: usize = 512;

/// ACLK ticks the internal reference is given to settle before sampling starts.
/// Roughly 46 ms with ACLK on REFOCLK (32768 Hz).
pub const SETTLING_TICKS: u16 = 1500;

/// CCR0 of the trigger timer. A conversion starts every `SAMPLE_PERIOD + 1` ACLK ticks.
pub const SAMPLE_PERIOD: u16 = 7;

/// CCR1 of the trigger timer. The compare output rises here and starts the sample-and-hold.
pub const TRIGGER_COMPARE: u16 = 4;

const _: () = assert!(TRIGGER_COMPARE < SAMPLE_PERIOD);

/// Internal reference used as VR+ for every conversion.
pub const REFERENCE: ReferenceVoltage = ReferenceVoltage::_2V5;

/// Clocking shared by the settling delay and the trigger.
pub const TIMER_CONFIG: TimerConfig = TimerConfig::aclk();

/// Converter setup: A1 sampled repeatedly on every TB1.1 rising edge, A2 routed but unused.
pub const ADC_SETUP: AdcSetup = AdcSetup {
    channel: AdcChannel::A1,
    aux_channel: AdcChannel::A2,
    clock_source: ClockSource::MODCLK,
    clock_divider: ClockDivider::_1,
    resolution: Resolution::_12BIT,
    sample_time: SampleTime::_8,
    reference: ReferenceSelect::InternalVref,
    trigger: TriggerSource::Tb1_1,
    sequence: ConversionSequence::RepeatSingleChannel,
};
