// rv_psp/src/trap/ds/error.rs

//! # Error Definitions
//!
//! Two disjoint classes of failure exist in this crate. Programming errors
//! (bad cause numbers, null handlers, using the gate before it is wired) are
//! not representable here: they go through [`fatal_assert!`] and halt.
//! Resource failures reported by the RTOS are returned as [`GateError`] to the
//! immediate caller, which must abort the operation it was protecting.

use core::fmt;

/// Status reported by the RTOS abstraction layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtosError {
    /// The primitive reported a generic failure.
    Failed,
    /// A timed wait expired.
    Timeout,
    /// The calling task does not own the mutex it tried to release.
    NotOwner,
    /// The object was used before it was created.
    NotCreated,
}

impl fmt::Display for RtosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed => write!(f, "RTOS primitive failed"),
            Self::Timeout => write!(f, "wait timed out"),
            Self::NotOwner => write!(f, "mutex released by a task that does not own it"),
            Self::NotCreated => write!(f, "object used before creation"),
        }
    }
}

/// Failures surfaced by the critical-section gate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The mutex wait failed; no exclusion was established.
    Acquire(RtosError),
    /// The mutex release failed; whatever the region protected is suspect.
    Release(RtosError),
}

impl GateError {
    /// Nonzero status code for C-ABI consumers (0 means success).
    pub const fn status(&self) -> u32 {
        match self {
            Self::Acquire(_) => 1,
            Self::Release(_) => 2,
        }
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquire(e) => write!(f, "failed to enter critical section: {}", e),
            Self::Release(e) => write!(f, "failed to exit critical section: {}", e),
        }
    }
}

/// Failures of the boot-time initialization sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BootError {
    /// The gate's mutex could not be created.
    MutexCreation(RtosError),
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MutexCreation(e) => write!(f, "critical-section mutex creation failed: {}", e),
        }
    }
}

/// Halts on a violated precondition.
///
/// Used for programming errors only; these never turn into a returned error.
#[macro_export]
macro_rules! fatal_assert {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            panic!($($arg)+);
        }
    };
}
