//! Console multiplexer
//!
//! The single serialization point for console output. Every write is
//! fanned out to the registered observers under the interrupt-masking
//! console lock, then pushed byte-by-byte to the physical device. Input
//! bypasses the registry entirely.
//!
//! The multiplexer is an explicit value, not an ambient global: the
//! process-wide instance is composed in `crate::config`, and tests build
//! isolated instances over a mock device.

mod observer;

pub use observer::{ConsoleObserver, RegistryError, MAX_OBSERVERS};

use core::sync::atomic::{AtomicUsize, Ordering};

use observer::ObserverRegistry;

use crate::components::console::{ConsoleDevice, ConsoleError};
use crate::sync::IrqLock;

/// Console multiplexer: observer fan-out plus a borrowed physical device.
///
/// Owns neither the device nor the observers; it orchestrates calls across
/// them while holding the registry lock.
pub struct ConsoleMux<'a> {
    device: &'a dyn ConsoleDevice,
    observers: IrqLock<ObserverRegistry<'a>>,
    // Mirror of the registry length, readable without taking the lock so
    // the common no-observer write skips the critical section entirely.
    observer_count: AtomicUsize,
}

impl<'a> ConsoleMux<'a> {
    /// Create a multiplexer over a console device.
    pub const fn new(device: &'a dyn ConsoleDevice) -> Self {
        Self {
            device,
            observers: IrqLock::new(ObserverRegistry::new()),
            observer_count: AtomicUsize::new(0),
        }
    }

    /// Write a byte span to every observer, then to the device.
    ///
    /// Zero-length spans are a no-op. The fan-out pass and the device
    /// write are not mutually atomic, but no two fan-out passes ever
    /// interleave and a pass never interleaves with a registry mutation.
    /// Never fails: a dead device degrades to a per-byte no-op.
    pub fn write(&self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        if self.observer_count.load(Ordering::Relaxed) != 0 {
            let registry = self.observers.lock();
            for observer in registry.newest_first() {
                observer.on_output(bytes);
            }
        }

        for &byte in bytes {
            self.device.putc(byte);
        }
    }

    /// Read exactly one byte from the device.
    ///
    /// Input is not fanned out. The device's error is propagated unchanged
    /// so callers can tell would-block from a device fault.
    pub fn read_byte(&self, blocking: bool) -> Result<u8, ConsoleError> {
        self.device.getc(blocking)
    }

    /// Register an observer; newest registrations are visited first.
    ///
    /// Safe from any execution context, including interrupt handlers; the
    /// mutation happens inside the bounded critical section only.
    pub fn register_observer(&self, observer: &'a dyn ConsoleObserver) -> Result<(), RegistryError> {
        let mut registry = self.observers.lock();
        registry.register(observer)?;
        self.observer_count.store(registry.len(), Ordering::Relaxed);
        Ok(())
    }

    /// Unregister an observer by identity.
    ///
    /// Serialized with in-flight writes by the shared lock: the observer
    /// either sees the whole span of a concurrent write or none of it, and
    /// never receives a callback after this returns.
    pub fn unregister_observer(
        &self,
        observer: &'a dyn ConsoleObserver,
    ) -> Result<(), RegistryError> {
        let mut registry = self.observers.lock();
        registry.unregister(observer)?;
        self.observer_count.store(registry.len(), Ordering::Relaxed);
        Ok(())
    }

    /// Number of currently registered observers (racy snapshot).
    pub fn observer_count(&self) -> usize {
        self.observer_count.load(Ordering::Relaxed)
    }
}
