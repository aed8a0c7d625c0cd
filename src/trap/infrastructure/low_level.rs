// rv_psp/src/trap/infrastructure/low_level.rs

//! # Low-Level Trap Hardware Control
//!
//! Direct access to the machine-mode trap CSRs. Only built for RISC-V targets.

use crate::trap::ds::InterruptLine;
use crate::trap::infrastructure::di::traits::InterruptControl;
use core::arch::asm;
use riscv::register::{mcause, mepc, mie, mtval};

/// `mstatus.MIE`.
const MSTATUS_MIE: usize = 1 << 3;

/// The machine-mode hart this code runs on.
pub struct MachineHardware;

/// The one controller instance, for installation into the trap system.
pub static MACHINE_HARDWARE: MachineHardware = MachineHardware;

/// Disables machine-level interrupts globally for the current hart.
///
/// # Returns
///
/// `true` if interrupts were previously enabled, `false` otherwise.
#[inline]
pub fn disable_interrupts() -> bool {
    let mstatus: usize;
    unsafe {
        asm!("csrrci {}, mstatus, 8", out(reg) mstatus);
    }
    (mstatus & MSTATUS_MIE) != 0
}

/// Restores the machine-level interrupt enable bit to `was_enabled`.
#[inline]
pub fn restore_interrupts(was_enabled: bool) {
    unsafe {
        if was_enabled {
            asm!("csrsi mstatus, 8");
        } else {
            asm!("csrci mstatus, 8");
        }
    }
}

/// Reads the machine-level interrupt enable bit.
#[inline]
pub fn interrupts_enabled() -> bool {
    let mstatus: usize;
    unsafe {
        asm!("csrr {}, mstatus", out(reg) mstatus);
    }
    (mstatus & MSTATUS_MIE) != 0
}

impl InterruptControl for MachineHardware {
    fn read_mcause(&self) -> usize {
        mcause::read().bits()
    }

    fn read_mepc(&self) -> usize {
        mepc::read()
    }

    fn read_mtval(&self) -> usize {
        mtval::read()
    }

    fn disable_machine_interrupts(&self) -> bool {
        disable_interrupts()
    }

    fn restore_machine_interrupts(&self, was_enabled: bool) {
        restore_interrupts(was_enabled);
    }

    fn machine_interrupts_enabled(&self) -> bool {
        interrupts_enabled()
    }

    fn enable_interrupt_line(&self, line: InterruptLine) {
        unsafe {
            match line {
                InterruptLine::MachineSoftware => mie::set_msoft(),
                InterruptLine::MachineTimer => mie::set_mtimer(),
                InterruptLine::MachineExternal => mie::set_mext(),
            }
        }
    }

    fn disable_interrupt_line(&self, line: InterruptLine) {
        unsafe {
            match line {
                InterruptLine::MachineSoftware => mie::clear_msoft(),
                InterruptLine::MachineTimer => mie::clear_mtimer(),
                InterruptLine::MachineExternal => mie::clear_mext(),
            }
        }
    }
}
