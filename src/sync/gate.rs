// rv_psp/src/sync/gate.rs

//! # Critical-Section Gate
//!
//! One `enter`/`exit` pair that is correct before and after the scheduler
//! starts. The scheduler phase is queried on every call, so the first calls
//! after the scheduler starts switch from interrupt masking to the mutex with
//! no reconfiguration step.
//!
//! A failed `enter` means no exclusion was established: the caller must not
//! run the protected operation and must not call `exit`. A failed `exit`
//! leaves whatever the region protected in an unknown state. Neither is
//! retried here.

use super::strategy::{ExclusionStrategy, InterruptMask, SchedulerMutex};
use crate::rtosal::{RtosMutex, SchedulerPhase, SchedulerQuery};
use crate::trap::{GateError, InterruptControl};

pub struct CriticalSectionGate<'a> {
    scheduler: &'a dyn SchedulerQuery,
    bare_metal: InterruptMask<'a>,
    scheduled: SchedulerMutex<'a>,
}

impl<'a> CriticalSectionGate<'a> {
    pub const fn new(hardware: &'a dyn InterruptControl, scheduler: &'a dyn SchedulerQuery) -> Self {
        Self {
            scheduler,
            bare_metal: InterruptMask::new(hardware),
            scheduled: SchedulerMutex::new(),
        }
    }

    /// Attaches the mutex used once the scheduler runs. It must be attached
    /// before the first task can call `enter`.
    pub fn attach_mutex(&self, mutex: &'a dyn RtosMutex) -> bool {
        self.scheduled.attach(mutex)
    }

    pub fn has_mutex(&self) -> bool {
        self.scheduled.is_attached()
    }

    fn strategy(&self) -> &dyn ExclusionStrategy {
        match self.scheduler.scheduler_phase() {
            SchedulerPhase::NotStarted => &self.bare_metal,
            SchedulerPhase::Running => &self.scheduled,
        }
    }

    /// Opens the critical region.
    ///
    /// # Panics
    /// Panics if the scheduler runs and no mutex was attached.
    pub fn enter(&self) -> Result<(), GateError> {
        self.strategy().acquire()
    }

    /// Closes the region opened by a successful [`enter`](Self::enter).
    pub fn exit(&self) -> Result<(), GateError> {
        self.strategy().release()
    }

    /// Runs `f` inside the region. `f` is not run if entry fails; its
    /// result is dropped if exit fails.
    pub fn with<R>(&self, f: impl FnOnce() -> R) -> Result<R, GateError> {
        self.enter()?;
        let result = f();
        self.exit()?;
        Ok(result)
    }
}
