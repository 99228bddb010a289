//! Single-slot latest-value mailbox
//!
//! The only state-exchange channel in the control graph. A publish
//! overwrites unconditionally; a peek copies without consuming. Neither
//! side ever blocks, so a slow consumer simply misses intermediate values
//! and the next publish heals any lost update.
//!
//! Each mailbox is protected by its own raw mutex, held only for the copy
//! itself, never across a wait. Readers therefore always see a complete
//! value, but reads from different mailboxes in one task body are not a
//! consistent cross-mailbox snapshot, and are not meant to be.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Single-slot, latest-value channel with non-blocking reads.
pub struct Mailbox<M: RawMutex, T: Copy> {
    slot: Mutex<M, Cell<Option<T>>>,
}

impl<M: RawMutex, T: Copy> Mailbox<M, T> {
    /// An empty mailbox; `peek` returns the default until first publish.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Overwrite the slot with `value`. Never blocks, keeps no history.
    pub fn publish(&self, value: T) {
        self.slot.lock(|slot| slot.set(Some(value)));
    }

    /// Copy of the most recent publish, or `None` if nothing was ever
    /// published. Never blocks, never consumes.
    pub fn peek(&self) -> Option<T> {
        self.slot.lock(|slot| slot.get())
    }

    /// `peek` with a caller-supplied default for the never-published case.
    pub fn peek_or(&self, default: T) -> T {
        self.peek().unwrap_or(default)
    }
}

impl<M: RawMutex, T: Copy + Default> Mailbox<M, T> {
    /// `peek` with the type's zero value for the never-published case.
    pub fn peek_or_default(&self) -> T {
        self.peek().unwrap_or_default()
    }
}

impl<M: RawMutex, T: Copy> Default for Mailbox<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use proptest::prelude::*;

    type TestMailbox<T> = Mailbox<CriticalSectionRawMutex, T>;

    #[test]
    fn test_empty_mailbox_reads_default() {
        let mailbox: TestMailbox<u16> = Mailbox::new();
        assert_eq!(mailbox.peek(), None);
        assert_eq!(mailbox.peek_or(42), 42);
        assert_eq!(mailbox.peek_or_default(), 0);
    }

    #[test]
    fn test_publish_overwrites() {
        let mailbox: TestMailbox<u16> = Mailbox::new();
        mailbox.publish(1);
        mailbox.publish(2);
        mailbox.publish(3);
        assert_eq!(mailbox.peek(), Some(3));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mailbox: TestMailbox<bool> = Mailbox::new();
        mailbox.publish(true);
        assert_eq!(mailbox.peek(), Some(true));
        assert_eq!(mailbox.peek(), Some(true));
        assert_eq!(mailbox.peek_or(false), true);
    }

    #[test]
    fn test_republishing_same_value_is_harmless() {
        let mailbox: TestMailbox<i16> = Mailbox::new();
        for _ in 0..3 {
            mailbox.publish(-7);
        }
        assert_eq!(mailbox.peek(), Some(-7));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let mailbox: Arc<TestMailbox<u32>> = Arc::new(Mailbox::new());
        let producer = {
            let mailbox = Arc::clone(&mailbox);
            std::thread::spawn(move || {
                for value in 1..=1000 {
                    mailbox.publish(value);
                }
            })
        };
        // Concurrent peeks only ever see complete published values.
        loop {
            match mailbox.peek() {
                None => {}
                Some(value) => assert!((1..=1000).contains(&value)),
            }
            if producer.is_finished() {
                break;
            }
        }
        producer.join().unwrap();
        assert_eq!(mailbox.peek(), Some(1000));
    }

    proptest! {
        #[test]
        fn prop_peek_returns_latest_publish(values in prop::collection::vec(any::<i16>(), 1..50)) {
            let mailbox: TestMailbox<i16> = Mailbox::new();
            for &value in &values {
                mailbox.publish(value);
                prop_assert_eq!(mailbox.peek(), Some(value));
            }
            prop_assert_eq!(mailbox.peek(), Some(*values.last().unwrap()));
        }
    }
}
