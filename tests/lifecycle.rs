//! The full firmware flow through `SharedSampler`, with interrupts delivered while `main` sleeps.

mod common;

use common::{Board, Hw, RecordingSleep, TestShared};
use msp430fr2x5x_adc_sampler::config::{SAMPLE_COUNT, SAMPLE_PERIOD};
use msp430fr2x5x_adc_sampler::lpm::{Sleep, StatusBits};
use msp430fr2x5x_adc_sampler::{Conversion, Error, SamplerState};
use std::collections::VecDeque;

/// Interrupts the simulated hardware raises during one low power wait.
enum Wake {
    /// Nothing fires
    Nothing,
    /// The settling timer reaches CCR0
    Settling,
    /// The trigger starts these conversions, one after the other
    Conversions(Vec<u16>),
}

struct ScriptedSleep<'a> {
    shared: &'a TestShared,
    hw: Hw,
    script: VecDeque<Wake>,
    entered: Vec<StatusBits>,
    isr_sleep: RecordingSleep,
    delivered: usize,
}

impl<'a> ScriptedSleep<'a> {
    fn new(shared: &'a TestShared, hw: Hw, script: Vec<Wake>) -> Self {
        ScriptedSleep {
            shared,
            hw,
            script: script.into(),
            entered: Vec::new(),
            isr_sleep: RecordingSleep::default(),
            delivered: 0,
        }
    }
}

impl Sleep for ScriptedSleep<'_> {
    fn enter(&mut self, bits: StatusBits) {
        self.entered.push(bits);
        match self.script.pop_front() {
            Some(Wake::Settling) => {
                let ccie0 = self.hw.borrow().ccie0;
                if ccie0 && bits.contains(StatusBits::GIE) {
                    self.shared.on_settling_timer_expiry();
                }
            }
            Some(Wake::Conversions(values)) => {
                for value in values {
                    // The trigger only starts conversions while ADCENC is set
                    if !self.hw.borrow().adcenc {
                        break;
                    }
                    self.hw.borrow_mut().adcmem0 = value;
                    self.shared.on_conversion_complete(&mut self.isr_sleep);
                    self.delivered += 1;
                }
            }
            Some(Wake::Nothing) | None => {}
        }
    }
}

fn initialized(shared: &TestShared, board: &mut Board, sampler: common::TestSampler) {
    let mut sleep = ScriptedSleep::new(shared, board.hw.clone(), vec![Wake::Settling]);
    shared
        .initialize(sampler, &mut board.wdt, &mut board.pmm, &mut board.pins, &mut sleep)
        .unwrap();
}

#[test]
fn initialize_waits_in_lpm3_then_arms_trigger() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    let mut sleep = ScriptedSleep::new(&shared, board.hw.clone(), vec![Wake::Settling]);

    shared
        .initialize(sampler, &mut board.wdt, &mut board.pmm, &mut board.pins, &mut sleep)
        .unwrap();

    assert_eq!(sleep.entered, vec![StatusBits::LPM3 | StatusBits::GIE]);
    assert_eq!(shared.state(), SamplerState::Sampling);
    let hw = board.hw.borrow();
    assert!(!hw.ccie0);
    assert_eq!(hw.ccr0, SAMPLE_PERIOD);
    assert!(!hw.adcenc);
}

#[test]
fn initialize_fails_if_settling_never_fired() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    let mut sleep = ScriptedSleep::new(&shared, board.hw.clone(), vec![Wake::Nothing]);

    assert_eq!(
        shared.initialize(sampler, &mut board.wdt, &mut board.pmm, &mut board.pins, &mut sleep),
        Err(Error::InvalidState {
            expected: SamplerState::Sampling,
            found: SamplerState::Settling,
        })
    );
    assert_eq!(shared.state(), SamplerState::Settling);
}

#[test]
fn second_initialize_is_rejected() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    initialized(&shared, &mut board, sampler);

    let (mut other, sampler) = Board::new();
    let mut sleep = ScriptedSleep::new(&shared, other.hw.clone(), vec![Wake::Settling]);
    assert_eq!(
        shared.initialize(sampler, &mut other.wdt, &mut other.pmm, &mut other.pins, &mut sleep),
        Err(Error::InvalidState {
            expected: SamplerState::Uninitialized,
            found: SamplerState::Sampling,
        })
    );
    assert!(sleep.entered.is_empty());
    assert!(!other.hw.borrow().wdt_held);
}

#[test]
fn spurious_settling_interrupt_is_ignored() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    initialized(&shared, &mut board, sampler);

    assert!(!shared.on_settling_timer_expiry());
    assert_eq!(shared.state(), SamplerState::Sampling);
    assert!(board.hw.borrow().running);
}

#[test]
fn empty_slot() {
    let shared = TestShared::default();
    let mut sleep = RecordingSleep::default();

    assert_eq!(shared.state(), SamplerState::Uninitialized);
    assert_eq!(shared.start(&mut sleep), Err(Error::NotInstalled));
    assert!(!shared.on_settling_timer_expiry());
    assert_eq!(shared.on_conversion_complete(&mut sleep), None);
    assert!(shared.with_results(|results| results[0]).is_err());
    assert!(sleep.0.is_empty());
}

#[test]
fn start_before_settling_is_rejected() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    let mut sleep = ScriptedSleep::new(&shared, board.hw.clone(), vec![Wake::Nothing]);
    assert!(shared
        .initialize(sampler, &mut board.wdt, &mut board.pmm, &mut board.pins, &mut sleep)
        .is_err());

    let mut rest = RecordingSleep::default();
    assert_eq!(
        shared.start(&mut rest),
        Err(Error::InvalidState {
            expected: SamplerState::Sampling,
            found: SamplerState::Settling,
        })
    );
    assert!(rest.0.is_empty());
}

#[test]
fn fills_buffer_then_halts_conversions() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    let values: Vec<u16> = (0..SAMPLE_COUNT as u16 + 100).collect();
    let mut sleep = ScriptedSleep::new(
        &shared,
        board.hw.clone(),
        vec![Wake::Settling, Wake::Conversions(values)],
    );

    shared
        .initialize(sampler, &mut board.wdt, &mut board.pmm, &mut board.pins, &mut sleep)
        .unwrap();
    assert!(shared.with_results(|_| ()).is_err());
    shared.start(&mut sleep).unwrap();

    assert_eq!(
        sleep.entered,
        vec![StatusBits::LPM3 | StatusBits::GIE, StatusBits::LPM0]
    );
    assert_eq!(sleep.delivered, SAMPLE_COUNT);
    assert_eq!(sleep.isr_sleep.0, vec![StatusBits::LPM3]);
    assert_eq!(shared.state(), SamplerState::Full);

    let expected: Vec<u16> = (0..SAMPLE_COUNT as u16).collect();
    let stored = shared.with_results(|results| results.to_vec()).unwrap();
    assert_eq!(stored, expected);

    let hw = board.hw.borrow();
    assert!(hw.done_high);
    assert_eq!(hw.done_rises, 1);
    assert!(!hw.adcenc);
}

#[test]
fn conversion_handler_reports_each_outcome() {
    let shared = TestShared::new();
    let (mut board, sampler) = Board::new();
    initialized(&shared, &mut board, sampler);
    let mut rest = RecordingSleep::default();
    shared.start(&mut rest).unwrap();

    let mut isr_sleep = RecordingSleep::default();
    for _ in 1..SAMPLE_COUNT {
        assert_eq!(
            shared.on_conversion_complete(&mut isr_sleep),
            Some(Conversion::Stored)
        );
    }
    assert!(isr_sleep.0.is_empty());
    assert_eq!(
        shared.on_conversion_complete(&mut isr_sleep),
        Some(Conversion::BufferFull)
    );
    assert_eq!(isr_sleep.0, vec![StatusBits::LPM3]);
    assert_eq!(shared.access(|sampler| sampler.index()), Ok(0));
}
