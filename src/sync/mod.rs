//! Synchronization primitives
//!
//! Only one primitive lives here: [`IrqLock`], the interrupt-masking spin
//! lock that guards state shared with interrupt handlers. Ordinary
//! `spin::Mutex` is fine for thread-only state; anything an interrupt
//! handler can touch must use `IrqLock` instead, and the distinct type is
//! what keeps the two from being mixed up.

mod irq_lock;

pub use irq_lock::{IrqLock, IrqLockGuard};
