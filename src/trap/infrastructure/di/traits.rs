// rv_psp/src/trap/infrastructure/di/traits.rs

//! # Dependency Injection Traits
//!
//! Hardware access is injected behind [`InterruptControl`] so the tables and
//! the critical-section gate run unchanged on silicon and against the
//! simulated controller used by the self-tests.

use crate::trap::ds::InterruptLine;

/// Interface for machine-mode interrupt and trap CSR control.
pub trait InterruptControl: Send + Sync {
    /// Reads `mcause`.
    fn read_mcause(&self) -> usize;

    /// Reads `mepc`.
    fn read_mepc(&self) -> usize;

    /// Reads `mtval`.
    fn read_mtval(&self) -> usize;

    /// Clears `mstatus.MIE`.
    /// Returns `true` if interrupts were previously enabled.
    fn disable_machine_interrupts(&self) -> bool;

    /// Sets `mstatus.MIE` to exactly `was_enabled`.
    fn restore_machine_interrupts(&self, was_enabled: bool);

    /// Reads `mstatus.MIE`.
    fn machine_interrupts_enabled(&self) -> bool;

    /// Sets the line's bit in `mie`.
    fn enable_interrupt_line(&self, line: InterruptLine);

    /// Clears the line's bit in `mie`.
    fn disable_interrupt_line(&self, line: InterruptLine);
}
