//! Power management module: GPIO unlock and the internal voltage reference.

/// A list of possible internal reference voltages
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReferenceVoltage {
    /// 1.5V
    _1V5 = 0b00,
    /// 2.0V
    _2V0 = 0b01,
    /// 2.5V
    _2V5 = 0b10,
}

impl ReferenceVoltage {
    /// REFVSEL register field value
    #[inline(always)]
    pub const fn refvsel(self) -> u8 {
        self as u8
    }
}
