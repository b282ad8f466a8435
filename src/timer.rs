//! Timer_B roles used by the sampler.
//!
//! The same timer is used twice: first as a one-shot delay that lets the internal reference
//! settle, then as a free-running period whose CCR1 compare output starts each conversion.

use crate::hw_traits::timerb::TimerB;

pub use crate::hw_traits::timerb::{Outmod, Tbssel, TimerDiv};

/// Clock selection shared by both timer roles
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    sel: Tbssel,
    div: TimerDiv,
}

impl TimerConfig {
    /// Configure timer clock source to ACLK
    pub const fn aclk() -> Self {
        TimerConfig {
            sel: Tbssel::Aclk,
            div: TimerDiv::_1,
        }
    }

    fn write_regs<T: TimerB>(&self, timer: &mut T) {
        timer.config_clock(self.sel, self.div);
    }
}

/// Run `timer` in up mode with the CCR0 interrupt enabled, so it fires once `ticks` have
/// elapsed. The interrupt handler is expected to stop the timer.
pub fn start_settling<T: TimerB>(timer: &mut T, config: &TimerConfig, ticks: u16) {
    config.write_regs(timer);
    timer.set_ccr0(ticks);
    timer.ccie0_set();
    timer.upmode();
}

/// Reprogram `timer` as the conversion trigger: a period of `period + 1` ticks with the CCR1
/// output set at `compare` and reset at the end of the period.
pub fn start_trigger<T: TimerB>(timer: &mut T, config: &TimerConfig, period: u16, compare: u16) {
    timer.ccie0_clr();
    timer.set_ccr0(period);
    timer.set_ccr1(compare);
    timer.config_ccr1_cmp(Outmod::SetReset);
    config.write_regs(timer);
    timer.upmode();
}
