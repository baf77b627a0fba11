//! # Cortex-M Port Layer
//!
//! The hardware tick source for ARM Cortex-M boards: SysTick configured to
//! fire every [`TICK_UNIT_MS`], a pending flag set from the exception
//! handler, and a `wfi`-based wait that a [`crate::board::Board`]
//! implementation can delegate `wait_for_tick` to.
//!
//! This module owns the SysTick vector; a firmware linking it must not
//! define its own `SysTick` handler.

use core::sync::atomic::{AtomicBool, Ordering};

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;

use crate::config::{SYSTEM_CLOCK_HZ, TICK_UNIT_MS};

/// Set by the SysTick handler, consumed by [`SysTickSource::wait`].
static TICK_PENDING: AtomicBool = AtomicBool::new(false);

/// SysTick-driven tick source.
///
/// Taking the `SYST` peripheral by value keeps the configuration exclusive:
/// nothing else can reprogram the timer while the game runs.
pub struct SysTickSource {
    _syst: SYST,
}

impl SysTickSource {
    /// Configure SysTick for the scheduler tick and start it.
    pub fn new(mut syst: SYST) -> Self {
        let reload = (SYSTEM_CLOCK_HZ / 1_000) * TICK_UNIT_MS - 1;
        syst.set_reload(reload);
        syst.clear_current();
        syst.set_clock_source(SystClkSource::Core);
        syst.enable_counter();
        syst.enable_interrupt();
        Self { _syst: syst }
    }

    /// Block until the next tick, sleeping the core between interrupts.
    /// If a tick already fired, returns immediately — a stalled cycle is
    /// caught up rather than skipped.
    pub fn wait(&mut self) {
        while !TICK_PENDING.swap(false, Ordering::AcqRel) {
            cortex_m::asm::wfi();
        }
    }
}

#[exception]
fn SysTick() {
    TICK_PENDING.store(true, Ordering::Release);
}
