// rv_psp/src/trap/infrastructure/simulated.rs

//! # Simulated Trap Hardware
//!
//! An [`InterruptControl`] backed by atomics instead of CSRs. The self-test
//! suite uses it to raise traps with a chosen cause and to observe the
//! interrupt-enable bit without touching the real hart.

use crate::trap::ds::{InterruptLine, TrapCause};
use crate::trap::infrastructure::di::traits::InterruptControl;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub struct SimulatedHardware {
    mcause: AtomicUsize,
    mepc: AtomicUsize,
    mtval: AtomicUsize,
    mie_bit: AtomicBool,
    lines: AtomicUsize,
    /// Number of times the enable bit was cleared or restored.
    toggles: AtomicUsize,
}

impl SimulatedHardware {
    pub const fn new() -> Self {
        Self {
            mcause: AtomicUsize::new(0),
            mepc: AtomicUsize::new(0),
            mtval: AtomicUsize::new(0),
            mie_bit: AtomicBool::new(false),
            lines: AtomicUsize::new(0),
            toggles: AtomicUsize::new(0),
        }
    }

    /// Latches the cause the next dispatch will read.
    pub fn raise(&self, cause: TrapCause) {
        self.mcause.store(cause.bits(), Ordering::SeqCst);
    }

    /// Latches a raw `mcause` value, valid or not.
    pub fn set_mcause(&self, bits: usize) {
        self.mcause.store(bits, Ordering::SeqCst);
    }

    pub fn set_fault_addresses(&self, mepc: usize, mtval: usize) {
        self.mepc.store(mepc, Ordering::SeqCst);
        self.mtval.store(mtval, Ordering::SeqCst);
    }

    /// Forces `mstatus.MIE` without counting a toggle.
    pub fn set_interrupts_enabled(&self, enabled: bool) {
        self.mie_bit.store(enabled, Ordering::SeqCst);
    }

    pub fn line_enabled(&self, line: InterruptLine) -> bool {
        self.lines.load(Ordering::SeqCst) & line.mask() != 0
    }

    /// Raw `mie` line bits.
    pub fn lines(&self) -> usize {
        self.lines.load(Ordering::SeqCst)
    }

    pub fn toggle_count(&self) -> usize {
        self.toggles.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptControl for SimulatedHardware {
    fn read_mcause(&self) -> usize {
        self.mcause.load(Ordering::SeqCst)
    }

    fn read_mepc(&self) -> usize {
        self.mepc.load(Ordering::SeqCst)
    }

    fn read_mtval(&self) -> usize {
        self.mtval.load(Ordering::SeqCst)
    }

    fn disable_machine_interrupts(&self) -> bool {
        self.toggles.fetch_add(1, Ordering::SeqCst);
        self.mie_bit.swap(false, Ordering::SeqCst)
    }

    fn restore_machine_interrupts(&self, was_enabled: bool) {
        self.toggles.fetch_add(1, Ordering::SeqCst);
        self.mie_bit.store(was_enabled, Ordering::SeqCst);
    }

    fn machine_interrupts_enabled(&self) -> bool {
        self.mie_bit.load(Ordering::SeqCst)
    }

    fn enable_interrupt_line(&self, line: InterruptLine) {
        self.lines.fetch_or(line.mask(), Ordering::SeqCst);
    }

    fn disable_interrupt_line(&self, line: InterruptLine) {
        self.lines.fetch_and(!line.mask(), Ordering::SeqCst);
    }
}
