// rv_psp/src/trap/ds/mod.rs

//! # Trap Data Structures Module
//!
//! Cause taxonomy, handler signature and error types shared by the trap
//! tables and the critical-section gate. Nothing here allocates.

pub mod types;
pub mod error;
pub mod handler;

pub use self::types::{
    ExceptionCause, InterruptCause, InterruptLine, TrapCause,
};

pub use self::error::{
    BootError, GateError, RtosError,
};

pub use self::handler::{
    TrapHandler, default_empty_handler, trap_unhandled, same_handler,
};
