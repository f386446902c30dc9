//! Interrupt-masking spin lock
//!
//! `spin::Mutex` alone is not enough for state shared with interrupt
//! handlers: an interrupt arriving while the lock is held on the same CPU
//! would spin on itself forever. [`IrqLock`] masks the configured interrupt
//! sources before spinning and restores the saved state when the guard
//! drops, so the critical section is bounded and cannot be preempted by the
//! sources it races with.
//!
//! Acquisition never sleeps. Critical sections must stay short; holders
//! must not call anything that can take the same lock again on the same
//! context.

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};

use spin::{Mutex, MutexGuard};

use crate::arch::{self, IrqMask, IrqState};

/// A spin lock that masks interrupts for the duration of the guard.
pub struct IrqLock<T> {
    mask: IrqMask,
    inner: Mutex<T>,
}

impl<T> IrqLock<T> {
    /// Create a lock using the build's kernel interrupt mask.
    pub const fn new(value: T) -> Self {
        Self::with_mask(value, IrqMask::KERNEL)
    }

    /// Create a lock masking a specific set of interrupt sources.
    pub const fn with_mask(value: T, mask: IrqMask) -> Self {
        Self {
            mask,
            inner: Mutex::new(value),
        }
    }

    /// Mask interrupts, then spin until the lock is acquired.
    ///
    /// The returned guard unlocks and restores the saved interrupt state
    /// when dropped, in that order.
    pub fn lock(&self) -> IrqLockGuard<'_, T> {
        let saved = arch::irq_save(self.mask);
        IrqLockGuard {
            inner: ManuallyDrop::new(self.inner.lock()),
            saved,
        }
    }
}

/// Guard for [`IrqLock`]; derefs to the protected value.
pub struct IrqLockGuard<'a, T> {
    inner: ManuallyDrop<MutexGuard<'a, T>>,
    saved: IrqState,
}

impl<T> Deref for IrqLockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for IrqLockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Drop for IrqLockGuard<'_, T> {
    fn drop(&mut self) {
        // Release the mutex before unmasking, mirroring the acquire order.
        unsafe {
            ManuallyDrop::drop(&mut self.inner);
        }
        arch::irq_restore(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_guards_value() {
        let lock = IrqLock::new(7u32);
        {
            let mut guard = lock.lock();
            assert_eq!(*guard, 7);
            *guard = 11;
        }
        assert_eq!(*lock.lock(), 11);
    }

    #[test]
    fn test_lock_is_mutually_exclusive() {
        let lock = IrqLock::new(0u64);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1000 {
                        *lock.lock() += 1;
                    }
                });
            }
        });

        assert_eq!(*lock.lock(), 4000);
    }

    #[test]
    fn test_custom_mask() {
        let lock = IrqLock::with_mask([0u8; 4], IrqMask::IRQ.union(IrqMask::FIQ));
        assert_eq!(lock.lock().len(), 4);
    }
}
