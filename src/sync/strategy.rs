// rv_psp/src/sync/strategy.rs

//! # Exclusion Strategies
//!
//! The two ways the gate establishes mutual exclusion: masking machine
//! interrupts before the scheduler runs, and waiting on an RTOS mutex after.

use crate::rtosal::{RtosMutex, WaitTimeout};
use crate::trap::{GateError, InterruptControl};
use core::sync::atomic::{AtomicBool, Ordering};
use spin::Once;

/// One way of opening and closing a critical region.
pub trait ExclusionStrategy {
    fn acquire(&self) -> Result<(), GateError>;
    fn release(&self) -> Result<(), GateError>;
}

/// Masks `mstatus.MIE` and restores it from a single snapshot slot.
///
/// Not reentrant: a second `acquire` before the matching `release`
/// overwrites the snapshot, and the outer `release` then restores the
/// masked state. Callers keep at most one region open.
pub struct InterruptMask<'a> {
    hardware: &'a dyn InterruptControl,
    snapshot: AtomicBool,
}

impl<'a> InterruptMask<'a> {
    pub const fn new(hardware: &'a dyn InterruptControl) -> Self {
        Self {
            hardware,
            snapshot: AtomicBool::new(false),
        }
    }
}

impl ExclusionStrategy for InterruptMask<'_> {
    fn acquire(&self) -> Result<(), GateError> {
        let was_enabled = self.hardware.disable_machine_interrupts();
        self.snapshot.store(was_enabled, Ordering::Relaxed);
        Ok(())
    }

    fn release(&self) -> Result<(), GateError> {
        self.hardware
            .restore_machine_interrupts(self.snapshot.load(Ordering::Relaxed));
        Ok(())
    }
}

/// Waits forever on the RTOS mutex attached at boot.
pub struct SchedulerMutex<'a> {
    mutex: Once<&'a dyn RtosMutex>,
}

impl<'a> SchedulerMutex<'a> {
    pub const fn new() -> Self {
        Self { mutex: Once::new() }
    }

    /// Attaches the mutex. Only the first call has any effect.
    pub fn attach(&self, mutex: &'a dyn RtosMutex) -> bool {
        let mut attached = false;
        self.mutex.call_once(|| {
            attached = true;
            mutex
        });
        attached
    }

    pub fn is_attached(&self) -> bool {
        self.mutex.is_completed()
    }

    fn mutex(&self) -> &'a dyn RtosMutex {
        match self.mutex.get() {
            Some(mutex) => *mutex,
            None => panic!("critical-section mutex used before it was created"),
        }
    }
}

impl Default for SchedulerMutex<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExclusionStrategy for SchedulerMutex<'_> {
    fn acquire(&self) -> Result<(), GateError> {
        self.mutex()
            .wait(WaitTimeout::Forever)
            .map_err(GateError::Acquire)
    }

    fn release(&self) -> Result<(), GateError> {
        self.mutex().release().map_err(GateError::Release)
    }
}
