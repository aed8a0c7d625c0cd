// rv_psp/src/trap/infrastructure/di/mod.rs

//! # Dependency Injection System - Global Access and Initialization
//!
//! Owns the process-wide `TrapSystem`. Its tables are const-initialized, so
//! every slot holds the no-op stub from reset onward; initialization only
//! attaches the hardware controller.

pub mod container;
pub mod traits;

use self::container::TrapSystem;
use self::traits::InterruptControl;
use core::sync::atomic::{AtomicBool, Ordering};

/// The global `TrapSystem` instance.
static GLOBAL_TRAP_SYSTEM: TrapSystem = TrapSystem::new();

/// Flag to ensure the trap system is initialized only once.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Attaches `hardware` to the global trap system.
///
/// # Panics
/// Panics if called more than once.
pub fn initialize_trap_system(hardware: &'static dyn InterruptControl) {
    if INITIALIZED.compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed).is_err() {
        panic!("Trap system already initialized!");
    }
    GLOBAL_TRAP_SYSTEM.attach_hardware(hardware);
}

/// The global trap system. Registration works before initialization;
/// dispatch needs the hardware attached.
pub fn trap_system() -> &'static TrapSystem {
    &GLOBAL_TRAP_SYSTEM
}

/// Checks if the trap system has been initialized.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Relaxed)
}

/// Called by the trap entry sequence once the machine context is saved.
#[no_mangle]
pub extern "C" fn psp_handle_trap() {
    GLOBAL_TRAP_SYSTEM.dispatch_trap();
}

/// Called by the vectored exception entry once the machine context is saved.
#[no_mangle]
pub extern "C" fn psp_handle_exception() {
    GLOBAL_TRAP_SYSTEM.dispatch_exception();
}
