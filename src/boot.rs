// rv_psp/src/boot.rs

//! # Boot-Time Trap Initialization
//!
//! Populates the handler tables and wires the critical-section gate before
//! any interrupt source is unmasked. Runs in the single-threaded window
//! before the scheduler starts.

use crate::config;
use crate::rtosal::{PriorityInheritance, RtosMutex};
use crate::sync::CriticalSectionGate;
use crate::trap::{
    trap_unhandled, BootError, ExceptionCause, InterruptLine, TrapHandler, TrapSystem,
};
use crate::{error_print, info_print};

/// What the boot sequence installs and unmasks.
#[derive(Debug, Clone, Copy)]
pub struct BootConfig {
    /// Dedicated machine-mode environment call handler. `None` keeps
    /// whatever the slot already holds.
    pub ecall_handler: Option<TrapHandler>,
    /// Installed into every other exception slot.
    pub unhandled_handler: TrapHandler,
    /// Lines unmasked once everything else is in place.
    pub enabled_lines: &'static [InterruptLine],
    pub mutex_name: &'static str,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            ecall_handler: None,
            unhandled_handler: trap_unhandled,
            enabled_lines: config::BOOT_ENABLED_LINES,
            mutex_name: config::GATE_MUTEX_NAME,
        }
    }
}

/// Runs the boot sequence against `system` and `gate`:
///
/// 1. mask every machine interrupt line;
/// 2. install the ecall handler, then the unhandled handler everywhere else;
/// 3. create the gate's mutex and attach it;
/// 4. unmask the configured lines.
///
/// On mutex creation failure every line stays masked.
pub fn init_traps<'a>(
    system: &TrapSystem,
    gate: &CriticalSectionGate<'a>,
    mutex: &'a dyn RtosMutex,
    config: &BootConfig,
) -> Result<(), BootError> {
    for line in InterruptLine::ALL {
        system.disable_interrupt_line(line);
    }

    if let Some(ecall) = config.ecall_handler {
        system
            .exceptions()
            .register(ecall, ExceptionCause::EnvCallFromMachineMode);
    }
    system.exceptions().install_default(config.unhandled_handler);
    info_print!("Exception table populated.");

    if let Err(e) = mutex.create(config.mutex_name, PriorityInheritance::Inherit) {
        error_print!("{} mutex creation failed: {}", config.mutex_name, e);
        return Err(BootError::MutexCreation(e));
    }
    gate.attach_mutex(mutex);

    for line in config.enabled_lines {
        system.enable_interrupt_line(*line);
    }
    info_print!("Interrupt lines enabled: {:?}", config.enabled_lines);

    Ok(())
}
