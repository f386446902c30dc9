//! Console device components
//!
//! The physical end of the console: a device that can emit one byte and
//! (when the hardware has an RX path) produce one byte. The multiplexer
//! drives exactly this trait and nothing more - no buffering, no line
//! discipline, no interrupt plumbing.
//!
//! # Design Philosophy
//! Kernel-side console components are MINIMAL. A dead or absent device is
//! represented by [`null::NullConsole`], which swallows output rather than
//! failing, so the logging path can never take the system down with it.

pub mod null;
pub mod pl011;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

/// Errors a console device can report on the input path.
///
/// The output path never reports: a byte that cannot be transmitted is
/// silently dropped by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// No data available and the caller asked not to block
    WouldBlock,
    /// The device has no usable input path
    NotSupported,
}

/// Console device trait
///
/// Implementations must be `Send + Sync`: the multiplexer is called from
/// arbitrary execution contexts on any CPU, including interrupt handlers.
pub trait ConsoleDevice: Send + Sync {
    /// Write a single byte to the device.
    ///
    /// Blocking: waits for the hardware to accept the byte. Never fails;
    /// a non-functioning device drops the byte instead.
    fn putc(&self, c: u8);

    /// Read a single byte from the device.
    ///
    /// With `blocking` set, suspends (a hardware-flag spin) until data
    /// arrives or the device reports a permanent failure. Without it,
    /// returns [`ConsoleError::WouldBlock`] when no data is pending.
    fn getc(&self, blocking: bool) -> Result<u8, ConsoleError>;
}
