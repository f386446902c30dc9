//! Standard stream table
//!
//! Three preconfigured stream descriptors - input, output, error - all
//! bound to the console multiplexer. The split is a convention for
//! callers; nothing here treats the three differently. Generic code holds
//! a `&dyn Stream`, and [`StreamWriter`] bridges a stream to
//! `core::fmt::Write` for the `kprint!` family.

use core::fmt;

use crate::components::console::ConsoleError;
use crate::mux::ConsoleMux;

/// Identifies one of the three standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamId {
    Stdin = 0,
    Stdout = 1,
    Stderr = 2,
}

/// A readable/writable byte stream.
pub trait Stream: Send + Sync {
    /// Write a span; returns how many bytes were consumed.
    fn write(&self, bytes: &[u8]) -> usize;

    /// Read one byte, blocking until data or a device fault.
    fn read_byte(&self) -> Result<u8, ConsoleError>;
}

/// A standard stream bound to the console multiplexer.
#[derive(Clone, Copy)]
pub struct StdStream<'a> {
    mux: &'a ConsoleMux<'a>,
}

impl Stream for StdStream<'_> {
    /// Forwards the span unmodified and in full to the multiplexer.
    ///
    /// Always reports the full length as written: the multiplexer has no
    /// partial-write concept - the device either takes each byte or drops
    /// it silently.
    fn write(&self, bytes: &[u8]) -> usize {
        self.mux.write(bytes);
        bytes.len()
    }

    fn read_byte(&self) -> Result<u8, ConsoleError> {
        self.mux.read_byte(true)
    }
}

/// The three standard streams, constructed once at composition time and
/// never reconfigured.
pub struct Stdio<'a> {
    streams: [StdStream<'a>; 3],
}

impl<'a> Stdio<'a> {
    /// Bind all three streams to one multiplexer.
    pub const fn new(mux: &'a ConsoleMux<'a>) -> Self {
        Self {
            streams: [StdStream { mux }; 3],
        }
    }

    pub fn stdin(&self) -> &StdStream<'a> {
        &self.streams[StreamId::Stdin as usize]
    }

    pub fn stdout(&self) -> &StdStream<'a> {
        &self.streams[StreamId::Stdout as usize]
    }

    pub fn stderr(&self) -> &StdStream<'a> {
        &self.streams[StreamId::Stderr as usize]
    }

    pub fn stream(&self, id: StreamId) -> &StdStream<'a> {
        &self.streams[id as usize]
    }
}

/// Adapter implementing `core::fmt::Write` over any stream.
pub struct StreamWriter<'a> {
    stream: &'a dyn Stream,
}

impl<'a> StreamWriter<'a> {
    pub const fn new(stream: &'a dyn Stream) -> Self {
        Self { stream }
    }
}

impl fmt::Write for StreamWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.stream.write(s.as_bytes());
        Ok(())
    }
}
