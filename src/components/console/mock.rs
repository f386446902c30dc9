//! Mock console component (testing only)
//!
//! Captures TX into a fixed buffer and serves RX from a queue the test
//! feeds. Const-constructible so tests can build isolated device + mux
//! pairs on the stack; no allocation, so it works in `no_std` consumers
//! that enable the `testing` feature.

use core::sync::atomic::{AtomicBool, Ordering};

use spin::Mutex;

use super::{ConsoleDevice, ConsoleError};

/// Capacity of the captured-output buffer; further bytes are dropped.
const TX_CAPACITY: usize = 4096;

/// Capacity of the queued-input ring.
const RX_CAPACITY: usize = 256;

struct TxLog {
    buf: [u8; TX_CAPACITY],
    len: usize,
}

impl TxLog {
    const fn new() -> Self {
        Self {
            buf: [0; TX_CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        if self.len < TX_CAPACITY {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }
}

struct RxQueue {
    buf: [u8; RX_CAPACITY],
    head: usize,
    len: usize,
}

impl RxQueue {
    const fn new() -> Self {
        Self {
            buf: [0; RX_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        if self.len < RX_CAPACITY {
            self.buf[(self.head + self.len) % RX_CAPACITY] = byte;
            self.len += 1;
        }
    }

    fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let byte = self.buf[self.head];
        self.head = (self.head + 1) % RX_CAPACITY;
        self.len -= 1;
        Some(byte)
    }
}

/// Mock console device for unit tests.
pub struct MockConsole {
    tx: Mutex<TxLog>,
    rx: Mutex<RxQueue>,
    fail_reads: AtomicBool,
}

impl MockConsole {
    /// Create a new mock console with empty buffers.
    pub const fn new() -> Self {
        Self {
            tx: Mutex::new(TxLog::new()),
            rx: Mutex::new(RxQueue::new()),
            fail_reads: AtomicBool::new(false),
        }
    }

    /// Initialize the mock console (no-op, mirrors the real components).
    pub fn init(&self) {}

    /// Queue bytes for subsequent `getc` calls to return.
    pub fn push_input(&self, bytes: &[u8]) {
        let mut rx = self.rx.lock();
        for &byte in bytes {
            rx.push(byte);
        }
    }

    /// Make every read report a permanent device failure.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Run `f` over everything written to the device so far.
    pub fn with_output<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let tx = self.tx.lock();
        f(&tx.buf[..tx.len])
    }

    /// Discard all captured output.
    pub fn clear_output(&self) {
        self.tx.lock().len = 0;
    }
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDevice for MockConsole {
    fn putc(&self, c: u8) {
        self.tx.lock().push(c);
    }

    fn getc(&self, blocking: bool) -> Result<u8, ConsoleError> {
        loop {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(ConsoleError::NotSupported);
            }
            if let Some(byte) = self.rx.lock().pop() {
                return Ok(byte);
            }
            if !blocking {
                return Err(ConsoleError::WouldBlock);
            }
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_clear() {
        let console = MockConsole::new();
        console.putc(b'a');
        console.putc(b'b');
        console.with_output(|out| assert_eq!(out, b"ab"));
        console.clear_output();
        console.with_output(|out| assert!(out.is_empty()));
    }

    #[test]
    fn test_input_queue_is_fifo() {
        let console = MockConsole::new();
        console.push_input(b"xy");
        assert_eq!(console.getc(false), Ok(b'x'));
        assert_eq!(console.getc(true), Ok(b'y'));
        assert_eq!(console.getc(false), Err(ConsoleError::WouldBlock));
    }

    #[test]
    fn test_failing_device() {
        let console = MockConsole::new();
        console.push_input(b"z");
        console.set_fail_reads(true);
        assert_eq!(console.getc(true), Err(ConsoleError::NotSupported));
    }
}
