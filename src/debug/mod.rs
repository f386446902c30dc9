//! Debug output and logging
//!
//! `kprint!` / `kprintln!` format through the configured standard output
//! stream, so everything printed here reaches the registered observers as
//! well as the device. The leveled macros compile to nothing unless their
//! level (or a more verbose one) is enabled via the `log-*` features.

use core::fmt;

use crate::stdio::Stream;

/// Debug writer (uses the standard output stream)
pub struct DebugWriter;

impl fmt::Write for DebugWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        crate::config::STDIO.stdout().write(s.as_bytes());
        Ok(())
    }
}

/// Print macro for kernel
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => ({
        use core::fmt::Write;
        let _ = write!($crate::debug::DebugWriter, $($arg)*);
    });
}

/// Print with newline macro for kernel
#[macro_export]
macro_rules! kprintln {
    () => ($crate::kprint!("\n"));
    ($($arg:tt)*) => ({
        use core::fmt::Write;
        let _ = writeln!($crate::debug::DebugWriter, $($arg)*);
    });
}

/// Error-level log line.
#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => {
        #[cfg(any(
            feature = "log-error",
            feature = "log-warn",
            feature = "log-info",
            feature = "log-debug",
            feature = "log-trace"
        ))]
        {
            $crate::kprintln!("[ERROR] {}", ::core::format_args!($($arg)*));
        }
    };
}

/// Warn-level log line.
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {
        #[cfg(any(
            feature = "log-warn",
            feature = "log-info",
            feature = "log-debug",
            feature = "log-trace"
        ))]
        {
            $crate::kprintln!("[WARN ] {}", ::core::format_args!($($arg)*));
        }
    };
}

/// Info-level log line.
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "log-info", feature = "log-debug", feature = "log-trace"))]
        {
            $crate::kprintln!("[INFO ] {}", ::core::format_args!($($arg)*));
        }
    };
}

/// Debug-level log line.
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "log-debug", feature = "log-trace"))]
        {
            $crate::kprintln!("[DEBUG] {}", ::core::format_args!($($arg)*));
        }
    };
}

/// Trace-level log line.
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log-trace")]
        {
            $crate::kprintln!("[TRACE] {}", ::core::format_args!($($arg)*));
        }
    };
}
