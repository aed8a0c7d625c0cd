// rv_psp/src/trap/ds/types.rs

//! # Trap Cause Definitions
//!
//! Machine-mode exception and interrupt causes, as reported in `mcause`.

use crate::config::{NUM_EXCEPTION_CAUSES, NUM_INTERRUPT_CAUSES};
use core::fmt;

/// Synchronous trap reasons (`mcause` with the interrupt bit clear).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExceptionCause {
    InstructionAddressMisaligned = 0,
    InstructionAccessFault = 1,
    IllegalInstruction = 2,
    Breakpoint = 3,
    LoadAddressMisaligned = 4,
    LoadAccessFault = 5,
    StoreAmoAddressMisaligned = 6,
    StoreAmoAccessFault = 7,
    EnvCallFromUserMode = 8,
    EnvCallFromSupervisorMode = 9,
    Reserved10 = 10,
    /// Pre-bound at system init; never touched by default sweeps.
    EnvCallFromMachineMode = 11,
    InstructionPageFault = 12,
    LoadPageFault = 13,
    Reserved14 = 14,
    StoreAmoPageFault = 15,
}

impl ExceptionCause {
    /// The number of exception causes; valid codes are `[0, COUNT)`.
    pub const COUNT: usize = NUM_EXCEPTION_CAUSES;

    /// Every exception cause, in code order.
    pub const ALL: [ExceptionCause; NUM_EXCEPTION_CAUSES] = [
        ExceptionCause::InstructionAddressMisaligned,
        ExceptionCause::InstructionAccessFault,
        ExceptionCause::IllegalInstruction,
        ExceptionCause::Breakpoint,
        ExceptionCause::LoadAddressMisaligned,
        ExceptionCause::LoadAccessFault,
        ExceptionCause::StoreAmoAddressMisaligned,
        ExceptionCause::StoreAmoAccessFault,
        ExceptionCause::EnvCallFromUserMode,
        ExceptionCause::EnvCallFromSupervisorMode,
        ExceptionCause::Reserved10,
        ExceptionCause::EnvCallFromMachineMode,
        ExceptionCause::InstructionPageFault,
        ExceptionCause::LoadPageFault,
        ExceptionCause::Reserved14,
        ExceptionCause::StoreAmoPageFault,
    ];

    /// Converts a raw exception code, returning `None` when out of range.
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// The slot index of this cause in the exception table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Asynchronous trap reasons (`mcause` with the interrupt bit set).
///
/// Three trigger kinds at four privilege levels. The registry keys handlers by
/// these names rather than by a dense index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum InterruptCause {
    UserSoftware = 0,
    SupervisorSoftware = 1,
    ReservedSoftware = 2,
    MachineSoftware = 3,
    UserTimer = 4,
    SupervisorTimer = 5,
    ReservedTimer = 6,
    MachineTimer = 7,
    UserExternal = 8,
    SupervisorExternal = 9,
    ReservedExternal = 10,
    MachineExternal = 11,
}

impl InterruptCause {
    pub const COUNT: usize = NUM_INTERRUPT_CAUSES;

    pub const ALL: [InterruptCause; NUM_INTERRUPT_CAUSES] = [
        InterruptCause::UserSoftware,
        InterruptCause::SupervisorSoftware,
        InterruptCause::ReservedSoftware,
        InterruptCause::MachineSoftware,
        InterruptCause::UserTimer,
        InterruptCause::SupervisorTimer,
        InterruptCause::ReservedTimer,
        InterruptCause::MachineTimer,
        InterruptCause::UserExternal,
        InterruptCause::SupervisorExternal,
        InterruptCause::ReservedExternal,
        InterruptCause::MachineExternal,
    ];

    /// Converts a raw interrupt code, returning `None` when out of range.
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }
}

/// Machine-level interrupt enable lines in the `mie` register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(usize)]
pub enum InterruptLine {
    MachineSoftware = 3,
    MachineTimer = 7,
    MachineExternal = 11,
}

impl InterruptLine {
    pub const ALL: [InterruptLine; 3] = [
        InterruptLine::MachineSoftware,
        InterruptLine::MachineTimer,
        InterruptLine::MachineExternal,
    ];

    /// The bit mask of this line in `mie`.
    pub const fn mask(self) -> usize {
        1 << (self as usize)
    }
}

/// A wrapper for the `mcause` register, providing a safe interface to interpret its value.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct TrapCause {
    bits: usize,
}

impl TrapCause {
    const INTERRUPT_BIT: usize = 1 << (usize::BITS - 1);

    /// Creates a `TrapCause` from the raw bits of `mcause`.
    pub const fn from_bits(bits: usize) -> Self {
        Self { bits }
    }

    /// Builds the `mcause` value the hardware reports for an exception.
    pub const fn exception(cause: ExceptionCause) -> Self {
        Self { bits: cause as usize }
    }

    /// Builds the `mcause` value the hardware reports for an interrupt.
    pub const fn interrupt(cause: InterruptCause) -> Self {
        Self { bits: Self::INTERRUPT_BIT | cause as usize }
    }

    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// The most significant bit of `mcause` is set for interrupts.
    pub const fn is_interrupt(&self) -> bool {
        self.bits & Self::INTERRUPT_BIT != 0
    }

    /// Returns the interrupt or exception code.
    pub const fn code(&self) -> usize {
        self.bits & !Self::INTERRUPT_BIT
    }
}

impl fmt::Debug for TrapCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_interrupt() {
            match InterruptCause::from_code(self.code()) {
                Some(cause) => write!(f, "Interrupt::{:?}", cause)?,
                None => write!(f, "Interrupt::Unknown({})", self.code())?,
            }
        } else {
            match ExceptionCause::from_code(self.code()) {
                Some(cause) => write!(f, "Exception::{:?}", cause)?,
                None => write!(f, "Exception::Unknown({})", self.code())?,
            }
        }
        write!(f, " (raw: {:#x})", self.bits)
    }
}
