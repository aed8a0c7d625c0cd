// rv_psp/src/trap/api.rs

//! # Public API for the Trap Subsystem
//!
//! Registration and dispatch over the process-wide handler tables.
//!
//! Registration is meant for the boot window only: interrupts masked,
//! scheduler not started. Register a cause's handler before unmasking its
//! source; nothing here enforces that ordering.

use crate::trap::ds::{
    ExceptionCause, InterruptCause, InterruptLine, TrapHandler,
};
use crate::trap::infrastructure::di::trap_system;

/// Installs `handler` for an exception cause, returning the displaced handler.
///
/// Re-registering the returned handler later restores the previous state.
pub fn register_exception_handler(handler: TrapHandler, cause: ExceptionCause) -> TrapHandler {
    trap_system().exceptions().register(handler, cause)
}

/// Installs `handler` for an interrupt cause, returning the displaced handler.
pub fn register_interrupt_handler(handler: TrapHandler, cause: InterruptCause) -> TrapHandler {
    trap_system().interrupts().register(handler, cause)
}

/// Registration for callers holding an untyped cause number.
///
/// # Panics
/// Panics if `handler` is `None` or `cause` is not a valid exception code.
pub fn register_exception_handler_raw(handler: Option<TrapHandler>, cause: u32) -> TrapHandler {
    let exception = ExceptionCause::from_code(cause as usize);
    let (Some(handler), Some(exception)) = (handler, exception) else {
        panic!("invalid exception registration: cause {}, handler present: {}", cause, handler.is_some());
    };
    register_exception_handler(handler, exception)
}

/// Registration for callers holding an untyped cause number.
///
/// # Panics
/// Panics if `handler` is `None` or `cause` is not a valid interrupt code.
pub fn register_interrupt_handler_raw(handler: Option<TrapHandler>, cause: u32) -> TrapHandler {
    let interrupt = InterruptCause::from_code(cause as usize);
    let (Some(handler), Some(interrupt)) = (handler, interrupt) else {
        panic!("invalid interrupt registration: cause {}, handler present: {}", cause, handler.is_some());
    };
    register_interrupt_handler(handler, interrupt)
}

/// Replaces the exception entry (`None` restores the table dispatcher).
pub fn register_exception_entry(handler: Option<TrapHandler>) -> Option<TrapHandler> {
    trap_system().register_exception_entry(handler)
}

/// Installs `handler` into every exception slot except the machine-mode
/// environment call.
pub fn install_default_exception_handlers(handler: TrapHandler) {
    trap_system().exceptions().install_default(handler);
}

/// Reads `mcause` and runs the matching exception handler.
pub fn dispatch_exception() {
    trap_system().dispatch_exception();
}

/// Runs the handler registered for `cause`.
pub fn dispatch_interrupt(cause: InterruptCause) {
    trap_system().dispatch_interrupt(cause);
}

/// Reads `mcause` and routes to the interrupt or exception side.
pub fn dispatch_trap() {
    trap_system().dispatch_trap();
}

/// Unmasks one machine-level interrupt line.
pub fn enable_interrupt_line(line: InterruptLine) {
    trap_system().enable_interrupt_line(line);
}

/// Masks one machine-level interrupt line.
pub fn disable_interrupt_line(line: InterruptLine) {
    trap_system().disable_interrupt_line(line);
}
