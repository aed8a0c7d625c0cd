// rv_psp/src/trap/infrastructure/exception_table.rs

//! # Exception Vector Table
//!
//! A fixed arena of handler slots, one per [`ExceptionCause`]. Every slot
//! starts out holding [`default_empty_handler`], so no cause is ever without a
//! handler.
//!
//! Slots are only meant to be changed during the boot window, while
//! interrupts are masked and the scheduler has not started. The lock is held
//! just long enough to copy a handler out; the handler itself runs unlocked.

use crate::trap::ds::{default_empty_handler, ExceptionCause, TrapHandler};
use spin::Mutex;

type SlotArray = [TrapHandler; ExceptionCause::COUNT];

pub struct ExceptionTable {
    slots: Mutex<SlotArray>,
}

impl ExceptionTable {
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new([default_empty_handler as TrapHandler; ExceptionCause::COUNT]),
        }
    }

    /// Installs `handler` for `cause`, returning the handler it displaced.
    pub fn register(&self, handler: TrapHandler, cause: ExceptionCause) -> TrapHandler {
        let mut slots = self.slots.lock();
        core::mem::replace(&mut slots[cause.index()], handler)
    }

    /// Returns the handler currently installed for `cause`.
    pub fn handler(&self, cause: ExceptionCause) -> TrapHandler {
        self.slots.lock()[cause.index()]
    }

    /// Installs `handler` into every slot except `EnvCallFromMachineMode`,
    /// which keeps its dedicated handler.
    pub fn install_default(&self, handler: TrapHandler) {
        let mut slots = self.slots.lock();
        for cause in ExceptionCause::ALL {
            if cause == ExceptionCause::EnvCallFromMachineMode {
                continue;
            }
            slots[cause.index()] = handler;
        }
    }

    /// Runs the handler for `cause`.
    pub fn dispatch(&self, cause: ExceptionCause) {
        let handler = self.handler(cause);
        handler();
    }
}

impl Default for ExceptionTable {
    fn default() -> Self {
        Self::new()
    }
}
