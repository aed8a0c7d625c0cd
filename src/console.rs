// 控制台输出模块
// 默认通过SBI输出字符，平台代码可以安装自己的UART写入函数

use core::fmt;
use spin::RwLock;

/// 控制台写入函数类型
pub type ConsoleWriter = fn(&str);

/// 平台安装的写入函数；为空时使用默认输出
static WRITER: RwLock<Option<ConsoleWriter>> = RwLock::new(None);

/// 安装控制台写入函数，返回之前安装的函数
pub fn set_writer(writer: ConsoleWriter) -> Option<ConsoleWriter> {
    WRITER.write().replace(writer)
}

/// 格式化输出函数
pub fn print(args: fmt::Arguments) {
    use core::fmt::Write;
    let _ = Stdout.write_fmt(args);
}

/// 直接输出字符串
pub fn print_str(s: &str) {
    let writer = *WRITER.read();
    match writer {
        Some(write) => write(s),
        None => default_write(s),
    }
}

#[cfg(test)]
fn default_write(s: &str) {
    std::print!("{}", s);
}

#[cfg(all(not(test), any(target_arch = "riscv32", target_arch = "riscv64")))]
#[allow(deprecated)]
fn default_write(s: &str) {
    for byte in s.bytes() {
        sbi_rt::legacy::console_putchar(byte as usize);
    }
}

#[cfg(all(not(test), not(any(target_arch = "riscv32", target_arch = "riscv64"))))]
fn default_write(_s: &str) {}

/// 标准输出结构体，实现Write trait以支持格式化输出
struct Stdout;

impl core::fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print_str(s);
        Ok(())
    }
}

/// print宏 - 格式化输出
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::print(format_args!($($arg)*))
    };
}

/// println宏 - 格式化输出并换行
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}

/// 调试输出宏 - 带有文件和行号信息
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {{
        $crate::print!("[{}:{}] ", file!(), line!());
        $crate::println!($($arg)*);
    }};
}

/// 错误输出宏 - 红色高亮显示
#[macro_export]
macro_rules! error_print {
    ($($arg:tt)*) => {{
        $crate::print!("\x1b[31m[ERROR] ");
        $crate::print!($($arg)*);
        $crate::print!("\x1b[0m\n");
    }};
}

/// 警告输出宏 - 黄色高亮显示
#[macro_export]
macro_rules! warn_print {
    ($($arg:tt)*) => {{
        $crate::print!("\x1b[33m[WARN] ");
        $crate::print!($($arg)*);
        $crate::print!("\x1b[0m\n");
    }};
}

/// 信息输出宏 - 绿色高亮显示
#[macro_export]
macro_rules! info_print {
    ($($arg:tt)*) => {{
        $crate::print!("\x1b[32m[INFO] ");
        $crate::print!($($arg)*);
        $crate::print!("\x1b[0m\n");
    }};
}
