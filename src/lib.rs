// rv_psp/src/lib.rs

#![cfg_attr(not(test), no_std)]

// 声明模块，console 必须最先声明，其余模块依赖它的打印宏
pub mod console;
pub mod config;
pub mod trap;
pub mod rtosal;
pub mod sync;
pub mod boot;
pub mod test;

pub use boot::BootConfig;

use rtosal::{RtosMutex, SchedulerQuery};
use trap::{BootError, InterruptControl};

/// Panic处理器 - 当发生panic时调用
#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // 先关中断，防止在打印过程中再次陷入
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    trap::infrastructure::low_level::disable_interrupts();

    error_print!("KERNEL PANIC!");
    error_print!("  {}", info);

    if trap::is_initialized() {
        let hw = trap::trap_system().hardware();
        error_print!(
            "  mcause: {:#x}, mepc: {:#x}, mtval: {:#x}",
            hw.read_mcause(),
            hw.read_mepc(),
            hw.read_mtval()
        );
    }

    error_print!("System halted.");
    loop {
        #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
        unsafe {
            core::arch::asm!("wfi");
        }
    }
}

/// 平台初始化：挂接硬件、创建临界区门并执行启动序列
///
/// 必须在调度器启动前、单线程环境中调用一次。
pub fn init(
    hardware: &'static dyn InterruptControl,
    scheduler: &'static dyn SchedulerQuery,
    mutex: &'static dyn RtosMutex,
    config: &BootConfig,
) -> Result<(), BootError> {
    info_print!("PSP trap core initializing...");

    trap::init(hardware);
    sync::init_gate(hardware, scheduler);
    info_print!("Trap system and critical-section gate attached.");

    boot::init_traps(trap::trap_system(), sync::gate(), mutex, config)?;

    info_print!("PSP initialization completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtosal::{PriorityInheritance, SchedulerPhase, WaitTimeout};
    use crate::trap::{
        ExceptionCause, InterruptCause, InterruptLine, RtosError, SimulatedHardware, TrapCause,
    };
    use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    static HW: SimulatedHardware = SimulatedHardware::new();

    struct Scheduler(AtomicBool);

    impl SchedulerQuery for Scheduler {
        fn scheduler_phase(&self) -> SchedulerPhase {
            if self.0.load(Ordering::SeqCst) {
                SchedulerPhase::Running
            } else {
                SchedulerPhase::NotStarted
            }
        }
    }

    static SCHEDULER: Scheduler = Scheduler(AtomicBool::new(false));

    struct CountingMutex {
        waits: AtomicUsize,
        releases: AtomicUsize,
    }

    impl RtosMutex for CountingMutex {
        fn create(&self, _name: &'static str, _inheritance: PriorityInheritance) -> Result<(), RtosError> {
            Ok(())
        }

        fn wait(&self, _timeout: WaitTimeout) -> Result<(), RtosError> {
            self.waits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn release(&self) -> Result<(), RtosError> {
            self.releases.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    static MUTEX: CountingMutex = CountingMutex {
        waits: AtomicUsize::new(0),
        releases: AtomicUsize::new(0),
    };

    static ECALLS: AtomicUsize = AtomicUsize::new(0);
    static TICKS: AtomicUsize = AtomicUsize::new(0);

    fn ecall() {
        ECALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn tick() {
        TICKS.fetch_add(1, Ordering::SeqCst);
    }

    // 唯一一个接触全局状态的测试
    #[test]
    fn global_boot_then_dispatch_and_hooks() {
        let config = BootConfig {
            ecall_handler: Some(ecall),
            ..BootConfig::default()
        };
        init(&HW, &SCHEDULER, &MUTEX, &config).unwrap();
        assert!(trap::is_initialized());
        assert!(sync::is_initialized());
        assert!(HW.line_enabled(InterruptLine::MachineExternal));

        trap::register_interrupt_handler(tick, InterruptCause::MachineTimer);
        HW.raise(TrapCause::interrupt(InterruptCause::MachineTimer));
        trap::infrastructure::di::psp_handle_trap();
        HW.raise(TrapCause::exception(ExceptionCause::EnvCallFromMachineMode));
        trap::dispatch_trap();
        assert_eq!(TICKS.load(Ordering::SeqCst), 1);
        assert_eq!(ECALLS.load(Ordering::SeqCst), 1);

        HW.set_interrupts_enabled(true);
        assert_eq!(sync::psp_enter_critical_section_hook(), 0);
        assert!(!HW.machine_interrupts_enabled());
        assert_eq!(sync::psp_exit_critical_section_hook(), 0);
        assert!(HW.machine_interrupts_enabled());

        SCHEDULER.0.store(true, Ordering::SeqCst);
        assert_eq!(sync::with_critical_section(|| 7), Ok(7));
        assert_eq!(MUTEX.waits.load(Ordering::SeqCst), 1);
        assert_eq!(MUTEX.releases.load(Ordering::SeqCst), 1);
    }
}
