// rv_psp/src/trap/mod.rs

//! # RISC-V Machine-Mode Trap Dispatch
//!
//! Two process-wide handler tables, one indexed by exception cause and one
//! keyed by named interrupt cause, plus the dispatch routines the trap entry
//! sequence calls into. Every slot holds a handler at all times; registering
//! replaces a slot and hands back what it held.

mod ds;
pub(crate) mod infrastructure;
mod api;

pub use self::api::*;

pub use self::ds::{
    ExceptionCause, InterruptCause, InterruptLine, TrapCause, // Cause taxonomy
    TrapHandler, default_empty_handler, trap_unhandled,      // Handlers
    same_handler,
    BootError, GateError, RtosError,                         // Errors
};

pub use self::infrastructure::di::container::TrapSystem;
pub use self::infrastructure::di::traits::InterruptControl;
pub use self::infrastructure::di::{is_initialized, trap_system};
pub use self::infrastructure::simulated::SimulatedHardware;
pub use self::infrastructure::exception_table::ExceptionTable;
pub use self::infrastructure::interrupt_registry::InterruptRegistry;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use self::infrastructure::low_level::{MachineHardware, MACHINE_HARDWARE};

/// Attaches the hardware controller to the global trap system.
///
/// The tables are usable for registration before this call; dispatch is not.
///
/// # Panics
/// Panics if called more than once.
pub fn init(hardware: &'static dyn InterruptControl) {
    infrastructure::di::initialize_trap_system(hardware);
}
