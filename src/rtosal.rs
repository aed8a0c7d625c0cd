// rv_psp/src/rtosal.rs

//! # RTOS Abstraction Layer Boundary
//!
//! The parts of the RTOS the critical-section gate and the boot sequence
//! depend on. The RTOS itself lives elsewhere; it implements these traits
//! over its own statically allocated objects.

use crate::trap::RtosError;

/// Whether the scheduler has started dispatching tasks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerPhase {
    NotStarted,
    Running,
}

/// How long a mutex wait may block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaitTimeout {
    /// Block until the mutex is acquired.
    Forever,
    /// Give up after this many ticks.
    Ticks(u32),
}

/// Whether a mutex lends its owner the priority of the highest waiter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PriorityInheritance {
    Inherit,
    NoInherit,
}

/// The scheduler-state query. Owned by the RTOS; only ever read here.
pub trait SchedulerQuery: Send + Sync {
    fn scheduler_phase(&self) -> SchedulerPhase;
}

/// An RTOS mutex living in caller-provided static storage.
///
/// Waiting blocks the calling task cooperatively: the scheduler runs other
/// tasks while it waits.
pub trait RtosMutex: Send + Sync {
    /// Initializes the mutex object.
    fn create(&self, name: &'static str, inheritance: PriorityInheritance) -> Result<(), RtosError>;

    /// Acquires the mutex, blocking for at most `timeout`.
    fn wait(&self, timeout: WaitTimeout) -> Result<(), RtosError>;

    /// Releases the mutex.
    fn release(&self) -> Result<(), RtosError>;
}
