// rv_psp/src/trap/ds/handler.rs

//! # Trap Handler Definitions
//!
//! The handler signature stored in every slot, plus the two stock handlers
//! slots are filled with before anything is registered.

use crate::trap::infrastructure::di;

/// The function signature for a trap handler.
///
/// Handlers take no arguments and return nothing; the machine context has
/// already been saved by the trap entry sequence when they run.
pub type TrapHandler = fn();

/// The no-op stub every slot holds until it is claimed.
pub fn default_empty_handler() {}

/// Handler for exceptions nobody expects to see.
///
/// Reports the faulting cause and addresses, then halts. Boot installs it into
/// every exception slot except the machine-mode environment call.
pub fn trap_unhandled() {
    if di::is_initialized() {
        let hw = di::trap_system().hardware();
        crate::error_print!(
            "Unhandled trap: mcause={:#x}, mepc={:#x}, mtval={:#x}",
            hw.read_mcause(),
            hw.read_mepc(),
            hw.read_mtval()
        );
    }
    panic!("unhandled trap");
}

/// Compares two handlers by address.
#[inline]
pub fn same_handler(a: TrapHandler, b: TrapHandler) -> bool {
    a as usize == b as usize
}
