//! Null console component (no device)
//!
//! Output is discarded and input reports [`ConsoleError::NotSupported`].
//! Production builds select this with the `console-null` feature to strip
//! console hardware access entirely; observers still see every write, so
//! logging consumers keep working without a physical device.

use super::{ConsoleDevice, ConsoleError};

/// Null console configuration (empty - no configuration needed)
#[derive(Clone, Copy)]
pub struct NullConfig;

/// Null console component
///
/// All output operations compile down to nothing; the compiler can remove
/// the calls since they have no side effects.
pub struct NullConsole;

impl NullConsole {
    /// Create a new null console.
    pub const fn new(_config: NullConfig) -> Self {
        Self
    }

    /// Initialize the null console (no-op).
    pub fn init(&self) {
        // Nothing to initialize
    }
}

impl ConsoleDevice for NullConsole {
    #[inline(always)]
    fn putc(&self, _c: u8) {
        // Discard output
    }

    fn getc(&self, _blocking: bool) -> Result<u8, ConsoleError> {
        Err(ConsoleError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_console_discards_and_rejects() {
        let console = NullConsole::new(NullConfig);
        console.init();
        console.putc(b'x');
        assert_eq!(console.getc(false), Err(ConsoleError::NotSupported));
        assert_eq!(console.getc(true), Err(ConsoleError::NotSupported));
    }
}
