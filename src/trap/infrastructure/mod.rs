// rv_psp/src/trap/infrastructure/mod.rs

//! # Trap Infrastructure Module
//!
//! The handler tables, the container that owns them, and the hardware
//! controllers they dispatch through.

// The Dependency Injection (DI) framework.
pub mod di;

// Low-level hardware interaction layer.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub mod low_level;

// Atomics-backed controller for self-tests.
pub mod simulated;

// Handler tables.
pub mod exception_table;
pub mod interrupt_registry;
