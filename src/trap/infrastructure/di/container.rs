// rv_psp/src/trap/infrastructure/di/container.rs

//! # Trap System Container
//!
//! Defines the `TrapSystem` struct, which owns both handler tables, the
//! replaceable exception-entry slot, and the injected hardware controller.

use super::traits::InterruptControl;
use crate::fatal_assert;
use crate::trap::ds::{
    ExceptionCause, InterruptCause, InterruptLine, TrapCause, TrapHandler,
};
use crate::trap::infrastructure::{
    exception_table::ExceptionTable,
    interrupt_registry::InterruptRegistry,
};
use spin::{Mutex, Once};

pub struct TrapSystem {
    exceptions: ExceptionTable,
    interrupts: InterruptRegistry,
    /// Handler run for every exception before the per-cause table is consulted.
    /// `None` means the built-in table dispatcher.
    exception_entry: Mutex<Option<TrapHandler>>,
    hardware: Once<&'static dyn InterruptControl>,
}

impl TrapSystem {
    /// Creates a system with every slot holding the no-op stub and no
    /// hardware attached yet.
    pub const fn new() -> Self {
        Self {
            exceptions: ExceptionTable::new(),
            interrupts: InterruptRegistry::new(),
            exception_entry: Mutex::new(None),
            hardware: Once::new(),
        }
    }

    /// Attaches the hardware controller. Only the first call has any effect.
    pub fn attach_hardware(&self, hardware: &'static dyn InterruptControl) -> bool {
        let mut attached = false;
        self.hardware.call_once(|| {
            attached = true;
            hardware
        });
        attached
    }

    pub fn has_hardware(&self) -> bool {
        self.hardware.is_completed()
    }

    /// The attached hardware controller.
    ///
    /// # Panics
    /// Panics if no controller has been attached.
    pub fn hardware(&self) -> &'static dyn InterruptControl {
        match self.hardware.get() {
            Some(hw) => *hw,
            None => panic!("trap hardware accessed before initialization"),
        }
    }

    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    pub fn interrupts(&self) -> &InterruptRegistry {
        &self.interrupts
    }

    /// Replaces the exception entry, returning the previous one.
    /// Passing `None` restores the built-in table dispatcher.
    pub fn register_exception_entry(&self, handler: Option<TrapHandler>) -> Option<TrapHandler> {
        core::mem::replace(&mut *self.exception_entry.lock(), handler)
    }

    /// Reads `mcause` and runs the exception handler for it.
    ///
    /// # Panics
    /// Panics if the cause is outside the exception range.
    pub fn dispatch_exception(&self) {
        let cause = TrapCause::from_bits(self.hardware().read_mcause());
        let code = cause.code();
        fatal_assert!(
            !cause.is_interrupt() && code < ExceptionCause::COUNT,
            "exception cause out of range: {:?}",
            cause
        );
        if let Some(exception) = ExceptionCause::from_code(code) {
            self.exceptions.dispatch(exception);
        }
    }

    /// Runs the interrupt handler for `cause`.
    pub fn dispatch_interrupt(&self, cause: InterruptCause) {
        self.interrupts.dispatch(cause);
    }

    /// The top-level trap routine: reads `mcause` once and routes it to the
    /// interrupt registry or to the exception entry.
    ///
    /// # Panics
    /// Panics if an interrupt code is outside the 12 known causes.
    pub fn dispatch_trap(&self) {
        let cause = TrapCause::from_bits(self.hardware().read_mcause());
        if cause.is_interrupt() {
            match InterruptCause::from_code(cause.code()) {
                Some(interrupt) => self.dispatch_interrupt(interrupt),
                None => panic!("interrupt cause out of range: {:?}", cause),
            }
        } else {
            let entry = *self.exception_entry.lock();
            match entry {
                Some(handler) => handler(),
                None => self.dispatch_exception(),
            }
        }
    }

    pub fn enable_interrupt_line(&self, line: InterruptLine) {
        self.hardware().enable_interrupt_line(line);
    }

    pub fn disable_interrupt_line(&self, line: InterruptLine) {
        self.hardware().disable_interrupt_line(line);
    }
}

impl Default for TrapSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trap::infrastructure::simulated::SimulatedHardware;
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn trap_routes_interrupts_and_exceptions() {
        static HW: SimulatedHardware = SimulatedHardware::new();
        static TIMER: AtomicUsize = AtomicUsize::new(0);
        static BREAK: AtomicUsize = AtomicUsize::new(0);
        fn timer() {
            TIMER.fetch_add(1, Ordering::SeqCst);
        }
        fn breakpoint() {
            BREAK.fetch_add(1, Ordering::SeqCst);
        }

        let system = TrapSystem::new();
        assert!(system.attach_hardware(&HW));
        assert!(!system.attach_hardware(&HW));
        system.interrupts().register(timer, InterruptCause::MachineTimer);
        system.exceptions().register(breakpoint, ExceptionCause::Breakpoint);

        HW.raise(TrapCause::interrupt(InterruptCause::MachineTimer));
        system.dispatch_trap();
        HW.raise(TrapCause::exception(ExceptionCause::Breakpoint));
        system.dispatch_trap();

        assert_eq!(TIMER.load(Ordering::SeqCst), 1);
        assert_eq!(BREAK.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn replaced_exception_entry_runs_instead_of_table() {
        static HW: SimulatedHardware = SimulatedHardware::new();
        static ENTRY: AtomicUsize = AtomicUsize::new(0);
        static TABLE: AtomicUsize = AtomicUsize::new(0);
        fn entry() {
            ENTRY.fetch_add(1, Ordering::SeqCst);
        }
        fn table() {
            TABLE.fetch_add(1, Ordering::SeqCst);
        }

        let system = TrapSystem::new();
        system.attach_hardware(&HW);
        system.exceptions().register(table, ExceptionCause::IllegalInstruction);
        HW.raise(TrapCause::exception(ExceptionCause::IllegalInstruction));

        assert!(system.register_exception_entry(Some(entry)).is_none());
        system.dispatch_trap();
        assert_eq!((ENTRY.load(Ordering::SeqCst), TABLE.load(Ordering::SeqCst)), (1, 0));

        assert!(system.register_exception_entry(None).is_some());
        system.dispatch_trap();
        assert_eq!((ENTRY.load(Ordering::SeqCst), TABLE.load(Ordering::SeqCst)), (1, 1));
    }

    #[test]
    #[should_panic(expected = "exception cause out of range")]
    fn out_of_range_exception_cause_is_fatal() {
        static HW: SimulatedHardware = SimulatedHardware::new();
        let system = TrapSystem::new();
        system.attach_hardware(&HW);
        HW.set_mcause(ExceptionCause::COUNT);
        system.dispatch_exception();
    }

    #[test]
    #[should_panic(expected = "interrupt cause out of range")]
    fn unknown_interrupt_cause_is_fatal() {
        static HW: SimulatedHardware = SimulatedHardware::new();
        let system = TrapSystem::new();
        system.attach_hardware(&HW);
        HW.set_mcause(TrapCause::interrupt(InterruptCause::MachineExternal).bits() + 2);
        system.dispatch_trap();
    }
}
