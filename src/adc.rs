//! Analog to Digital Converter (ADC) setup
//!
//! The sampler runs the ADC in repeat-single-channel mode with the sample-and-hold started by a
//! Timer_B compare output, so the settings here describe that use rather than one-shot reads.
//!
//! The ADC may read from any of the following pins:
//!
//! P1.0 - P1.7 (channels 0 to 7), P5.0 - P5.3 (channels 8 to 11)

/// How many ADCCLK cycles the ADC's sample-and-hold stage will last for.
///
/// Default: 8 cycles
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleTime {
    /// Sample for 4 ADCCLK cycles
    _4 = 0b0000,
    /// Sample for 8 ADCCLK cycles
    #[default]
    _8 = 0b0001,
    /// Sample for 16 ADCCLK cycles
    _16 = 0b0010,
    /// Sample for 32 ADCCLK cycles
    _32 = 0b0011,
    /// Sample for 64 ADCCLK cycles
    _64 = 0b0100,
    /// Sample for 128 ADCCLK cycles
    _128 = 0b0110,
    /// Sample for 256 ADCCLK cycles
    _256 = 0b1000,
    /// Sample for 1024 ADCCLK cycles
    _1024 = 0b1100,
}

impl SampleTime {
    /// ADCSHT register field value
    #[inline(always)]
    pub const fn adcsht(self) -> u8 {
        self as u8
    }
}

/// How much the ADC input clock is divided by.
///
/// Default: Divide by 1
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDivider {
    /// Divide the input clock by 1
    #[default]
    _1 = 0b000,
    /// Divide the input clock by 2
    _2 = 0b001,
    /// Divide the input clock by 4
    _4 = 0b011,
    /// Divide the input clock by 8
    _8 = 0b111,
}

impl ClockDivider {
    /// ADCDIV register field value
    #[inline(always)]
    pub const fn adcdiv(self) -> u8 {
        self as u8
    }
}

/// Which clock source the ADC uses as input.
///
/// Default: MODCLK
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Use MODCLK as the ADC input clock
    #[default]
    MODCLK = 0b00,
    /// Use ACLK as the ADC input clock
    ACLK = 0b01,
    /// Use SMCLK as the ADC input clock
    SMCLK = 0b10,
}

impl ClockSource {
    /// ADCSSEL register field value
    #[inline(always)]
    pub const fn adcssel(self) -> u8 {
        self as u8
    }
}

/// The output resolution of the ADC conversion.
///
/// Default: 10-bit resolution
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 8-bit ADC conversion result. The conversion step takes 10 ADCCLK cycles.
    _8BIT = 0b00,
    /// 10-bit ADC conversion result. The conversion step takes 12 ADCCLK cycles.
    #[default]
    _10BIT = 0b01,
    /// 12-bit ADC conversion result. The conversion step takes 14 ADCCLK cycles.
    _12BIT = 0b10,
}

impl Resolution {
    /// ADCRES register field value
    #[inline(always)]
    pub const fn adcres(self) -> u8 {
        self as u8
    }
}

/// Conversion sequence mode (ADCCONSEQ).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionSequence {
    /// One conversion of one channel per trigger, then stop
    #[default]
    SingleChannel = 0b00,
    /// One pass over a sequence of channels
    Sequence = 0b01,
    /// Convert the same channel on every trigger until ADCENC is cleared
    RepeatSingleChannel = 0b10,
    /// Repeat the channel sequence until ADCENC is cleared
    RepeatSequence = 0b11,
}

impl ConversionSequence {
    /// ADCCONSEQ register field value
    #[inline(always)]
    pub const fn adcconseq(self) -> u8 {
        self as u8
    }
}

/// Source of the sample-and-hold start signal (ADCSHS).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerSource {
    /// The ADCSC bit, set by software
    #[default]
    Software = 0b00,
    /// Timer TB1 compare output 1
    Tb1_1 = 0b01,
    /// Timer TB1 compare output 2
    Tb1_2 = 0b10,
    /// Timer TB2 compare output 1
    Tb2_1 = 0b11,
}

impl TriggerSource {
    /// ADCSHS register field value
    #[inline(always)]
    pub const fn adcshs(self) -> u8 {
        self as u8
    }
}

/// Conversion reference pair (ADCSREF).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReferenceSelect {
    /// VR+ = AVCC, VR- = AVSS
    #[default]
    Avcc = 0b000,
    /// VR+ = buffered internal reference, VR- = AVSS. The reference must be enabled in the PMM.
    InternalVref = 0b001,
}

impl ReferenceSelect {
    /// ADCSREF register field value
    #[inline(always)]
    pub const fn adcsref(self) -> u8 {
        self as u8
    }
}

/// ADC input channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel(u8);

impl AdcChannel {
    /// Channel A1, on P1.1
    pub const A1: AdcChannel = AdcChannel(1);
    /// Channel A2, on P1.2
    pub const A2: AdcChannel = AdcChannel(2);

    /// Channel by number. Returns `None` above channel 11, the last one with an external pin.
    pub const fn new(index: u8) -> Option<AdcChannel> {
        if index <= 11 {
            Some(AdcChannel(index))
        } else {
            None
        }
    }

    /// ADCINCH value for this channel.
    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Port number and pin number carrying this channel.
    pub const fn pin(self) -> (u8, u8) {
        if self.0 < 8 {
            (1, self.0)
        } else {
            (5, self.0 - 8)
        }
    }
}

/// Complete converter setup applied by [`AdcPeriph::configure`](crate::hw_traits::adc::AdcPeriph::configure).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcSetup {
    /// Channel whose conversions land in ADCMEM0.
    pub channel: AdcChannel,
    /// Second analog input routed to the ADC and never converted by the sampler.
    pub aux_channel: AdcChannel,
    /// Input clock. It is divided by `clock_divider` to generate ADCCLK.
    pub clock_source: ClockSource,
    /// How much the input clock is divided by.
    pub clock_divider: ClockDivider,
    /// Conversion result width.
    pub resolution: Resolution,
    /// Sample-and-hold duration.
    pub sample_time: SampleTime,
    /// Reference pair for conversions.
    pub reference: ReferenceSelect,
    /// What starts each sample-and-hold.
    pub trigger: TriggerSource,
    /// Single shot or repeated conversions.
    pub sequence: ConversionSequence,
}
