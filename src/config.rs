//! Crate configuration and component composition
//!
//! Compile-time selection of the console device component and static
//! construction of the process-wide multiplexer and standard stream table.
//! Cargo features pick the device the same way the kernel picks any other
//! built-in component:
//! - `console-pl011`: PL011 UART console (default for QEMU virt)
//! - `console-null`: no console output (production builds)
//!
//! Test builds substitute the mock console so the whole path is observable
//! on the host. When both device features are enabled, PL011 wins.

use spin::Once;

use crate::components::console::ConsoleDevice;
use crate::mux::ConsoleMux;
use crate::stdio::Stdio;

#[cfg(test)]
use crate::components::console::mock::MockConsole;
#[cfg(all(not(test), feature = "console-null", not(feature = "console-pl011")))]
use crate::components::console::null::{NullConfig, NullConsole};
#[cfg(all(not(test), any(feature = "console-pl011", not(feature = "console-null"))))]
use crate::components::console::pl011::{Pl011Config, Pl011Console};

/// Console device component selection (compile-time).
///
/// Defaults to PL011 when no console feature is specified.
#[cfg(all(not(test), any(feature = "console-pl011", not(feature = "console-null"))))]
pub static CONSOLE: Pl011Console = Pl011Console::new(Pl011Config {
    mmio_base: 0x9000000, // QEMU virt PL011 UART base address
});

#[cfg(all(not(test), feature = "console-null", not(feature = "console-pl011")))]
pub static CONSOLE: NullConsole = NullConsole::new(NullConfig);

#[cfg(test)]
pub static CONSOLE: MockConsole = MockConsole::new();

/// The process-wide console multiplexer, bound to the selected device.
pub static CONSOLE_MUX: ConsoleMux<'static> = ConsoleMux::new(&CONSOLE);

/// The standard stream table, bound to the multiplexer.
pub static STDIO: Stdio<'static> = Stdio::new(&CONSOLE_MUX);

static CONSOLE_INIT: Once = Once::new();

/// Initialize the console device component.
///
/// Must be called early in the boot sequence, before the first debug
/// output. Later calls are no-ops; the stream table is never reconfigured
/// after this point.
pub fn init_console() {
    CONSOLE_INIT.call_once(|| {
        CONSOLE.init();
    });
}

/// Get a reference to the global console device.
pub fn console() -> &'static impl ConsoleDevice {
    &CONSOLE
}

/// Get a reference to the global standard stream table.
pub fn stdio() -> &'static Stdio<'static> {
    &STDIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_console_is_idempotent() {
        init_console();
        init_console();
    }
}
