#![allow(dead_code)]

use msp430fr2x5x_adc_sampler::adc::{AdcChannel, AdcSetup};
use msp430fr2x5x_adc_sampler::gpio::SamplerPins;
use msp430fr2x5x_adc_sampler::hw_traits::{
    adc::AdcPeriph, pmm::PmmPeriph, timerb::TimerB, watchdog::WatchdogPeriph,
};
use msp430fr2x5x_adc_sampler::lpm::{Sleep, StatusBits};
use msp430fr2x5x_adc_sampler::pmm::ReferenceVoltage;
use msp430fr2x5x_adc_sampler::timer::{Outmod, Tbssel, TimerDiv};
use msp430fr2x5x_adc_sampler::{Sampler, SharedSampler};

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use std::cell::RefCell;
use std::rc::Rc;

/// Register state of the simulated device, shared by every mock peripheral.
#[derive(Debug, Default)]
pub struct Regs {
    pub log: Vec<&'static str>,

    pub wdt_held: bool,
    pub gpio_unlocked: bool,
    pub reference: Option<ReferenceVoltage>,

    pub alarm_input: bool,
    pub done_output: bool,
    pub done_high: bool,
    pub done_rises: usize,
    pub analog: Vec<AdcChannel>,
    pub trigger_routed: bool,

    pub adc_setup: Option<AdcSetup>,
    pub adcenc: bool,
    pub adcie0: bool,
    pub adcmem0: u16,

    pub clock: Option<(Tbssel, TimerDiv)>,
    pub running: bool,
    pub counter_clears: usize,
    pub ccr0: u16,
    pub ccie0: bool,
    pub ccr1: u16,
    pub ccr1_outmod: Option<Outmod>,
}

pub type Hw = Rc<RefCell<Regs>>;

pub struct MockAdc(pub Hw);
pub struct MockTimer(pub Hw);
pub struct MockDone(pub Hw);
pub struct MockWdt(pub Hw);
pub struct MockPmm(pub Hw);
pub struct MockPins(pub Hw);

pub type TestSampler = Sampler<MockAdc, MockTimer, MockDone>;
pub type TestShared = SharedSampler<MockAdc, MockTimer, MockDone>;

impl AdcPeriph for MockAdc {
    fn configure(&mut self, setup: &AdcSetup) {
        let mut r = self.0.borrow_mut();
        r.log.push("adc.configure");
        r.adc_setup = Some(*setup);
    }

    fn adcenc_set(&mut self) {
        self.0.borrow_mut().adcenc = true;
    }

    fn adcenc_clr(&mut self) {
        self.0.borrow_mut().adcenc = false;
    }

    fn adcenc_rd(&self) -> bool {
        self.0.borrow().adcenc
    }

    fn adcie0_set(&mut self) {
        self.0.borrow_mut().adcie0 = true;
    }

    fn adcmem0_rd(&mut self) -> u16 {
        self.0.borrow().adcmem0
    }
}

impl TimerB for MockTimer {
    fn config_clock(&mut self, tbssel: Tbssel, div: TimerDiv) {
        let mut r = self.0.borrow_mut();
        r.clock = Some((tbssel, div));
        r.running = false;
    }

    fn upmode(&mut self) {
        let mut r = self.0.borrow_mut();
        r.log.push("timer.upmode");
        r.running = true;
        r.counter_clears += 1;
    }

    fn stop(&mut self) {
        self.0.borrow_mut().running = false;
    }

    fn set_ccr0(&mut self, count: u16) {
        self.0.borrow_mut().ccr0 = count;
    }

    fn ccie0_set(&mut self) {
        self.0.borrow_mut().ccie0 = true;
    }

    fn ccie0_clr(&mut self) {
        self.0.borrow_mut().ccie0 = false;
    }

    fn set_ccr1(&mut self, count: u16) {
        self.0.borrow_mut().ccr1 = count;
    }

    fn config_ccr1_cmp(&mut self, outmod: Outmod) {
        self.0.borrow_mut().ccr1_outmod = Some(outmod);
    }
}

impl ErrorType for MockDone {
    type Error = Infallible;
}

impl OutputPin for MockDone {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().done_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut r = self.0.borrow_mut();
        r.done_high = true;
        r.done_rises += 1;
        Ok(())
    }
}

impl WatchdogPeriph for MockWdt {
    fn hold(&mut self) {
        let mut r = self.0.borrow_mut();
        r.log.push("wdt.hold");
        r.wdt_held = true;
    }
}

impl PmmPeriph for MockPmm {
    fn unlock_gpio(&mut self) {
        self.0.borrow_mut().gpio_unlocked = true;
    }

    fn enable_reference(&mut self, vref: ReferenceVoltage) {
        let mut r = self.0.borrow_mut();
        r.log.push("pmm.reference");
        r.reference = Some(vref);
    }
}

impl SamplerPins for MockPins {
    fn alarm_to_input(&mut self) {
        let mut r = self.0.borrow_mut();
        r.log.push("pins.alarm");
        r.alarm_input = true;
    }

    fn done_to_output(&mut self) {
        self.0.borrow_mut().done_output = true;
    }

    fn analog_to_adc(&mut self, channel: AdcChannel) {
        self.0.borrow_mut().analog.push(channel);
    }

    fn trigger_to_timer_output(&mut self) {
        self.0.borrow_mut().trigger_routed = true;
    }
}

/// A fresh simulated device and everything needed to configure a sampler on it.
pub struct Board {
    pub hw: Hw,
    pub wdt: MockWdt,
    pub pmm: MockPmm,
    pub pins: MockPins,
}

impl Board {
    pub fn new() -> (Board, TestSampler) {
        let hw: Hw = Rc::default();
        let sampler = Sampler::new(
            MockAdc(hw.clone()),
            MockTimer(hw.clone()),
            MockDone(hw.clone()),
        );
        let board = Board {
            wdt: MockWdt(hw.clone()),
            pmm: MockPmm(hw.clone()),
            pins: MockPins(hw.clone()),
            hw,
        };
        (board, sampler)
    }

    /// Put `value` in ADCMEM0 and run the conversion-complete handler.
    pub fn convert(&self, sampler: &mut TestSampler, value: u16) -> msp430fr2x5x_adc_sampler::Conversion {
        self.hw.borrow_mut().adcmem0 = value;
        sampler.on_conversion_complete()
    }
}

/// Sampler taken through configure, settling, trigger setup and ADCENC.
pub fn sampling() -> (Board, TestSampler) {
    let (mut board, mut sampler) = Board::new();
    sampler
        .configure(&mut board.wdt, &mut board.pmm, &mut board.pins)
        .unwrap();
    assert!(sampler.on_settling_timer_expiry());
    sampler.arm_trigger().unwrap();
    sampler.enable_conversions().unwrap();
    (board, sampler)
}

/// Records low power entries without resuming anything.
#[derive(Default)]
pub struct RecordingSleep(pub Vec<StatusBits>);

impl Sleep for RecordingSleep {
    fn enter(&mut self, bits: StatusBits) {
        self.0.push(bits);
    }
}
