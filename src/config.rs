// rv_psp/src/config.rs

//! Platform configuration constants.

use crate::trap::InterruptLine;

/// Exception causes occupy `[0, NUM_EXCEPTION_CAUSES)`.
pub const NUM_EXCEPTION_CAUSES: usize = 16;

/// {software, timer, external} x {user, supervisor, reserved, machine}.
pub const NUM_INTERRUPT_CAUSES: usize = 12;

/// Interrupt lines re-enabled once the boot sequence has populated the tables.
pub const BOOT_ENABLED_LINES: &[InterruptLine] = &[InterruptLine::MachineExternal];

/// Name given to the mutex backing the critical-section gate.
pub const GATE_MUTEX_NAME: &str = "comrv";

/// Core clock rate in Hz.
pub const CLOCK_RATE_HZ: u64 = 25_000_000;

/// Length of one RTOS tick in milliseconds.
pub const TICK_TIME_MS: u64 = 10;

const MSEC_PER_SEC: u64 = 1000;

const _: () = assert!(CLOCK_RATE_HZ != 0 && TICK_TIME_MS != 0, "core frequency values definitions are missing");

/// Machine timer cycles per RTOS tick.
pub const TIMER_PERIOD: u64 = timer_period(CLOCK_RATE_HZ, TICK_TIME_MS);

/// Timer cycles for a tick of `tick_ms` at `clock_rate_hz`.
pub const fn timer_period(clock_rate_hz: u64, tick_ms: u64) -> u64 {
    clock_rate_hz * tick_ms / MSEC_PER_SEC
}
