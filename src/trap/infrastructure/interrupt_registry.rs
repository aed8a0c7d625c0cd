// rv_psp/src/trap/infrastructure/interrupt_registry.rs

//! # Interrupt Handler Registry
//!
//! One named slot per [`InterruptCause`]. The causes follow the privilege
//! encoding of `mcause` rather than a dense index, so the registry exposes
//! them by name: both registration and lookup go through a `match` on the
//! cause.

use crate::trap::ds::{default_empty_handler, InterruptCause, TrapHandler};
use spin::Mutex;

#[derive(Clone, Copy)]
struct InterruptSlots {
    user_software: TrapHandler,
    supervisor_software: TrapHandler,
    reserved_software: TrapHandler,
    machine_software: TrapHandler,
    user_timer: TrapHandler,
    supervisor_timer: TrapHandler,
    reserved_timer: TrapHandler,
    machine_timer: TrapHandler,
    user_external: TrapHandler,
    supervisor_external: TrapHandler,
    reserved_external: TrapHandler,
    machine_external: TrapHandler,
}

impl InterruptSlots {
    const fn new() -> Self {
        let stub: TrapHandler = default_empty_handler;
        Self {
            user_software: stub,
            supervisor_software: stub,
            reserved_software: stub,
            machine_software: stub,
            user_timer: stub,
            supervisor_timer: stub,
            reserved_timer: stub,
            machine_timer: stub,
            user_external: stub,
            supervisor_external: stub,
            reserved_external: stub,
            machine_external: stub,
        }
    }

    fn slot_mut(&mut self, cause: InterruptCause) -> &mut TrapHandler {
        match cause {
            InterruptCause::UserSoftware => &mut self.user_software,
            InterruptCause::SupervisorSoftware => &mut self.supervisor_software,
            InterruptCause::ReservedSoftware => &mut self.reserved_software,
            InterruptCause::MachineSoftware => &mut self.machine_software,
            InterruptCause::UserTimer => &mut self.user_timer,
            InterruptCause::SupervisorTimer => &mut self.supervisor_timer,
            InterruptCause::ReservedTimer => &mut self.reserved_timer,
            InterruptCause::MachineTimer => &mut self.machine_timer,
            InterruptCause::UserExternal => &mut self.user_external,
            InterruptCause::SupervisorExternal => &mut self.supervisor_external,
            InterruptCause::ReservedExternal => &mut self.reserved_external,
            InterruptCause::MachineExternal => &mut self.machine_external,
        }
    }

    fn slot(&self, cause: InterruptCause) -> TrapHandler {
        match cause {
            InterruptCause::UserSoftware => self.user_software,
            InterruptCause::SupervisorSoftware => self.supervisor_software,
            InterruptCause::ReservedSoftware => self.reserved_software,
            InterruptCause::MachineSoftware => self.machine_software,
            InterruptCause::UserTimer => self.user_timer,
            InterruptCause::SupervisorTimer => self.supervisor_timer,
            InterruptCause::ReservedTimer => self.reserved_timer,
            InterruptCause::MachineTimer => self.machine_timer,
            InterruptCause::UserExternal => self.user_external,
            InterruptCause::SupervisorExternal => self.supervisor_external,
            InterruptCause::ReservedExternal => self.reserved_external,
            InterruptCause::MachineExternal => self.machine_external,
        }
    }
}

pub struct InterruptRegistry {
    slots: Mutex<InterruptSlots>,
}

impl InterruptRegistry {
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new(InterruptSlots::new()),
        }
    }

    /// Installs `handler` for `cause`, returning the handler it displaced.
    pub fn register(&self, handler: TrapHandler, cause: InterruptCause) -> TrapHandler {
        let mut slots = self.slots.lock();
        core::mem::replace(slots.slot_mut(cause), handler)
    }

    /// Returns the handler currently installed for `cause`.
    pub fn handler(&self, cause: InterruptCause) -> TrapHandler {
        self.slots.lock().slot(cause)
    }

    /// Runs the handler for `cause`.
    pub fn dispatch(&self, cause: InterruptCause) {
        let handler = self.handler(cause);
        handler();
    }

    pub fn machine_software(&self) -> TrapHandler {
        self.handler(InterruptCause::MachineSoftware)
    }

    pub fn machine_timer(&self) -> TrapHandler {
        self.handler(InterruptCause::MachineTimer)
    }

    pub fn machine_external(&self) -> TrapHandler {
        self.handler(InterruptCause::MachineExternal)
    }

    pub fn supervisor_software(&self) -> TrapHandler {
        self.handler(InterruptCause::SupervisorSoftware)
    }

    pub fn supervisor_timer(&self) -> TrapHandler {
        self.handler(InterruptCause::SupervisorTimer)
    }

    pub fn supervisor_external(&self) -> TrapHandler {
        self.handler(InterruptCause::SupervisorExternal)
    }

    pub fn user_software(&self) -> TrapHandler {
        self.handler(InterruptCause::UserSoftware)
    }

    pub fn user_timer(&self) -> TrapHandler {
        self.handler(InterruptCause::UserTimer)
    }

    pub fn user_external(&self) -> TrapHandler {
        self.handler(InterruptCause::UserExternal)
    }
}

impl Default for InterruptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trap::ds::same_handler;
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn register_round_trips_every_cause() {
        static A: AtomicUsize = AtomicUsize::new(0);
        static B: AtomicUsize = AtomicUsize::new(0);
        fn isr_a() {
            A.fetch_add(1, Ordering::SeqCst);
        }
        fn isr_b() {
            B.fetch_add(1, Ordering::SeqCst);
        }

        let registry = InterruptRegistry::new();
        for cause in InterruptCause::ALL {
            assert!(same_handler(registry.register(isr_a, cause), default_empty_handler));
            registry.dispatch(cause);
            assert!(same_handler(registry.register(isr_b, cause), isr_a));
            registry.dispatch(cause);
            assert!(same_handler(registry.register(isr_a, cause), isr_b));
        }
        assert_eq!(A.load(Ordering::SeqCst), InterruptCause::COUNT);
        assert_eq!(B.load(Ordering::SeqCst), InterruptCause::COUNT);
    }

    #[test]
    fn each_cause_owns_a_distinct_slot() {
        static TIMER: AtomicUsize = AtomicUsize::new(0);
        fn timer() {
            TIMER.fetch_add(1, Ordering::SeqCst);
        }

        let registry = InterruptRegistry::new();
        registry.register(timer, InterruptCause::MachineTimer);

        for cause in InterruptCause::ALL {
            registry.dispatch(cause);
        }
        assert_eq!(TIMER.load(Ordering::SeqCst), 1);

        registry.machine_timer()();
        registry.supervisor_timer()();
        registry.user_timer()();
        assert_eq!(TIMER.load(Ordering::SeqCst), 2);
        assert!(same_handler(registry.machine_timer(), timer));
    }

    #[test]
    fn dispatch_invokes_named_slot_once() {
        static TICKS: AtomicUsize = AtomicUsize::new(0);
        fn tick() {
            TICKS.fetch_add(1, Ordering::SeqCst);
        }

        let registry = InterruptRegistry::new();
        registry.register(tick, InterruptCause::MachineExternal);
        registry.dispatch(InterruptCause::MachineTimer);
        assert_eq!(TICKS.load(Ordering::SeqCst), 0);
        registry.dispatch(InterruptCause::MachineExternal);
        assert_eq!(TICKS.load(Ordering::SeqCst), 1);
    }
}
