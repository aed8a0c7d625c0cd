// rv_psp/src/sync/mod.rs

//! # Phase-Aware Critical Sections
//!
//! The process-wide [`CriticalSectionGate`] used by boot code, tasks and the
//! overlay manager. Before the scheduler starts it masks machine interrupts;
//! once the scheduler runs it waits on an RTOS mutex.

mod gate;
mod strategy;

pub use self::gate::CriticalSectionGate;
pub use self::strategy::{ExclusionStrategy, InterruptMask, SchedulerMutex};

use crate::rtosal::{RtosMutex, SchedulerQuery};
use crate::trap::{GateError, InterruptControl};
use spin::Once;

static GATE: Once<CriticalSectionGate<'static>> = Once::new();

/// Creates the global gate over `hardware` and `scheduler`.
///
/// # Panics
/// Panics if called more than once.
pub fn init_gate(hardware: &'static dyn InterruptControl, scheduler: &'static dyn SchedulerQuery) {
    if GATE.is_completed() {
        panic!("Critical-section gate already initialized!");
    }
    GATE.call_once(|| CriticalSectionGate::new(hardware, scheduler));
}

/// The global gate.
///
/// # Panics
/// Panics if [`init_gate`] has not run.
pub fn gate() -> &'static CriticalSectionGate<'static> {
    match GATE.get() {
        Some(gate) => gate,
        None => panic!("critical-section gate used before initialization"),
    }
}

pub fn is_initialized() -> bool {
    GATE.is_completed()
}

/// Attaches the mutex the global gate waits on once the scheduler runs.
pub fn attach_mutex(mutex: &'static dyn RtosMutex) -> bool {
    gate().attach_mutex(mutex)
}

/// Opens the global critical region.
pub fn enter_critical() -> Result<(), GateError> {
    gate().enter()
}

/// Closes the global critical region.
pub fn exit_critical() -> Result<(), GateError> {
    gate().exit()
}

/// Runs `f` inside the global critical region.
pub fn with_critical_section<R>(f: impl FnOnce() -> R) -> Result<R, GateError> {
    gate().with(f)
}

fn status(result: Result<(), GateError>) -> u32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.status(),
    }
}

/// Overlay manager hook: 0 on success, nonzero if the region was not entered.
#[no_mangle]
pub extern "C" fn psp_enter_critical_section_hook() -> u32 {
    status(enter_critical())
}

/// Overlay manager hook: 0 on success, nonzero if the release failed.
#[no_mangle]
pub extern "C" fn psp_exit_critical_section_hook() -> u32 {
    status(exit_critical())
}
