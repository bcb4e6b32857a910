//! Latest-value cells shared with interrupt context

use core::cell::Cell;

use critical_section::Mutex;

/// One-slot mailbox with last-value-wins semantics
///
/// The value and its "new data" flag live in one `Option` updated inside a
/// critical section, so the consumer either sees a complete value or
/// nothing. Used for the pending command byte.
pub struct Mailbox<T: Copy> {
    slot: Mutex<Cell<Option<T>>>,
}

impl<T: Copy> Mailbox<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Store a value, replacing any unread one (interrupt context)
    pub fn post(&self, value: T) {
        critical_section::with(|cs| self.slot.borrow(cs).set(Some(value)));
    }

    /// Take the pending value, leaving the mailbox empty (main loop)
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// Check for a pending value without taking it
    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).get().is_some())
    }
}

impl<T: Copy> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Most recent raw sample, written by the producer and copied out by the
/// consumer
///
/// Stands in for a peripheral result register: it always holds a value,
/// and whether that value is new is tracked separately by an
/// [`super::EventFlag`].
pub struct SampleSlot<T: Copy> {
    value: Mutex<Cell<T>>,
}

impl<T: Copy> SampleSlot<T> {
    pub const fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(Cell::new(initial)),
        }
    }

    /// Overwrite the stored sample
    pub fn store(&self, value: T) {
        critical_section::with(|cs| self.value.borrow(cs).set(value));
    }

    /// Copy the stored sample out
    pub fn load(&self) -> T {
        critical_section::with(|cs| self.value.borrow(cs).get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mailbox_empty() {
        let mailbox: Mailbox<u8> = Mailbox::new();
        assert!(!mailbox.is_full());
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_mailbox_take_once() {
        let mailbox = Mailbox::new();
        mailbox.post(b'C');
        assert!(mailbox.is_full());
        assert_eq!(mailbox.take(), Some(b'C'));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_slot_overwrites() {
        let slot = SampleSlot::new(0i16);
        slot.store(-5);
        slot.store(0x0ABC);
        assert_eq!(slot.load(), 0x0ABC);
        // Loading does not consume
        assert_eq!(slot.load(), 0x0ABC);
    }

    proptest! {
        /// Posting several values before a take yields only the last one.
        #[test]
        fn prop_last_value_wins(values in proptest::collection::vec(any::<u8>(), 1..32)) {
            let mailbox = Mailbox::new();
            for &v in &values {
                mailbox.post(v);
            }
            prop_assert_eq!(mailbox.take(), values.last().copied());
            prop_assert_eq!(mailbox.take(), None);
        }
    }
}
