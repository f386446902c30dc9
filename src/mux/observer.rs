//! Console observer registry
//!
//! A fixed-capacity slot table of registered observers, ordered newest
//! first. The registry does not own observer memory: entries are borrows,
//! identity is pointer identity, and the registerer must unregister before
//! the observer goes away. Only the multiplexer may traverse the table,
//! always under its lock; no iteration API leaves this module.

/// Maximum number of concurrently registered observers.
pub const MAX_OBSERVERS: usize = 8;

/// Errors reported by observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The observer is already registered
    AlreadyRegistered,
    /// The observer is not currently registered
    NotRegistered,
    /// The registry has no free slot
    Full { capacity: usize },
}

/// A consumer of console output.
///
/// Implementations must be `Send + Sync`; the callback runs under the
/// console lock on whatever context performed the write, including
/// interrupt handlers on any CPU.
pub trait ConsoleObserver: Send + Sync {
    /// Receive one written span.
    ///
    /// Called once per `write` with exactly the bytes the writer passed.
    /// Must be short and non-blocking, and must NOT write to the console
    /// itself: the console lock is held, and re-entering the write path on
    /// the same context self-deadlocks.
    fn on_output(&self, bytes: &[u8]);
}

/// Observer identity: the data pointer, ignoring the vtable.
fn identity(observer: &dyn ConsoleObserver) -> *const () {
    observer as *const dyn ConsoleObserver as *const ()
}

/// Fixed-capacity observer table, newest registration first.
pub(super) struct ObserverRegistry<'a> {
    slots: [Option<&'a dyn ConsoleObserver>; MAX_OBSERVERS],
    len: usize,
}

impl<'a> ObserverRegistry<'a> {
    pub(super) const fn new() -> Self {
        Self {
            slots: [None; MAX_OBSERVERS],
            len: 0,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Register an observer at the head of the ordering.
    pub(super) fn register(
        &mut self,
        observer: &'a dyn ConsoleObserver,
    ) -> Result<(), RegistryError> {
        if self.position(observer).is_some() {
            return Err(RegistryError::AlreadyRegistered);
        }
        if self.len == MAX_OBSERVERS {
            return Err(RegistryError::Full {
                capacity: MAX_OBSERVERS,
            });
        }
        self.slots[self.len] = Some(observer);
        self.len += 1;
        Ok(())
    }

    /// Remove an observer by identity.
    pub(super) fn unregister(
        &mut self,
        observer: &dyn ConsoleObserver,
    ) -> Result<(), RegistryError> {
        let index = self.position(observer).ok_or(RegistryError::NotRegistered)?;

        // Close the gap; relative order of the survivors is preserved.
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1];
        }
        self.len -= 1;
        self.slots[self.len] = None;
        Ok(())
    }

    /// Iterate observers, most recently registered first.
    pub(super) fn newest_first(&self) -> impl Iterator<Item = &'a dyn ConsoleObserver> + '_ {
        self.slots[..self.len].iter().rev().filter_map(|slot| *slot)
    }

    fn position(&self, observer: &dyn ConsoleObserver) -> Option<usize> {
        let needle = identity(observer);
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.map_or(false, |registered| identity(registered) == needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag {
        _tag: u8,
    }

    impl ConsoleObserver for Tag {
        fn on_output(&self, _bytes: &[u8]) {}
    }

    #[test]
    fn test_newest_first_ordering() {
        let a = Tag { _tag: b'a' };
        let b = Tag { _tag: b'b' };
        let c = Tag { _tag: b'c' };
        let mut registry = ObserverRegistry::new();
        registry.register(&a).unwrap();
        registry.register(&b).unwrap();
        registry.register(&c).unwrap();

        let order: std::vec::Vec<*const ()> =
            registry.newest_first().map(super::identity).collect();
        assert_eq!(
            order,
            std::vec![
                super::identity(&c),
                super::identity(&b),
                super::identity(&a)
            ]
        );
    }

    #[test]
    fn test_duplicate_registration_is_reported() {
        let a = Tag { _tag: b'a' };
        let mut registry = ObserverRegistry::new();
        registry.register(&a).unwrap();
        assert_eq!(registry.register(&a), Err(RegistryError::AlreadyRegistered));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_absent_is_reported() {
        let a = Tag { _tag: b'a' };
        let mut registry = ObserverRegistry::new();
        assert_eq!(registry.unregister(&a), Err(RegistryError::NotRegistered));
    }

    #[test]
    fn test_unregister_middle_preserves_order() {
        let a = Tag { _tag: b'a' };
        let b = Tag { _tag: b'b' };
        let c = Tag { _tag: b'c' };
        let mut registry = ObserverRegistry::new();
        registry.register(&a).unwrap();
        registry.register(&b).unwrap();
        registry.register(&c).unwrap();

        registry.unregister(&b).unwrap();

        let order: std::vec::Vec<*const ()> =
            registry.newest_first().map(super::identity).collect();
        assert_eq!(
            order,
            std::vec![super::identity(&c), super::identity(&a)]
        );
    }

    #[test]
    fn test_capacity_is_enforced() {
        let observers: std::vec::Vec<Tag> = (0..MAX_OBSERVERS as u8).map(|tag| Tag { _tag: tag }).collect();
        let overflow = Tag { _tag: 0xff };
        let mut registry = ObserverRegistry::new();

        for observer in &observers {
            registry.register(observer).unwrap();
        }
        assert_eq!(
            registry.register(&overflow),
            Err(RegistryError::Full {
                capacity: MAX_OBSERVERS
            })
        );

        // Freeing one slot makes registration possible again.
        registry.unregister(&observers[0]).unwrap();
        registry.register(&overflow).unwrap();
        assert_eq!(registry.len(), MAX_OBSERVERS);
    }
}
