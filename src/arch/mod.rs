//! Architecture-specific code
//!
//! The console lock must be able to mask interrupts for the duration of a
//! critical section, so each architecture backend provides exactly two
//! operations: save-and-mask and restore. On AArch64 these are DAIF
//! accesses; every other target gets the mock backend so the crate builds
//! and unit-tests on a development host.

use bitflags::bitflags;

bitflags! {
    /// Interrupt sources a critical section may mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IrqMask: u8 {
        /// Standard interrupts
        const IRQ = 1 << 0;
        /// Fast interrupts (secure monitor traffic on some platforms)
        const FIQ = 1 << 1;
    }
}

impl IrqMask {
    /// Sources masked by kernel critical sections on this build.
    #[cfg(feature = "secure-monitor")]
    pub const KERNEL: IrqMask = IrqMask::IRQ.union(IrqMask::FIQ);

    /// Sources masked by kernel critical sections on this build.
    #[cfg(not(feature = "secure-monitor"))]
    pub const KERNEL: IrqMask = IrqMask::IRQ;
}

/// Saved interrupt state, returned by [`irq_save`] and consumed by
/// [`irq_restore`]. Opaque to callers; the payload is the pre-mask DAIF
/// value on AArch64.
#[derive(Clone, Copy)]
pub struct IrqState(u64);

#[cfg(target_arch = "aarch64")]
pub mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::{irq_save, irq_restore};

#[cfg(not(target_arch = "aarch64"))]
pub mod mock;
#[cfg(not(target_arch = "aarch64"))]
pub use mock::{irq_save, irq_restore};
