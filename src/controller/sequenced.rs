use crate::errors::StakingError;
use std::cell::{Cell, RefCell};

/// Identifies a refresh by the order in which it was started
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Holds a snapshot that is replaced wholesale by refreshes.
///
/// Every refresh takes a ticket when it starts. A result is only published if no refresh that
/// was started later has already been published, i.e., a slow older refresh can never overwrite a
/// newer snapshot.
pub(crate) struct SequencedCell<T> {
    value: RefCell<T>,
    /// last ticket that was handed out
    issued: Cell<u64>,
    /// ticket of the currently published value
    published: Cell<u64>,
}

impl<T: Clone + Default> SequencedCell<T> {
    pub fn new() -> Self {
        Self {
            value: RefCell::new(T::default()),
            issued: Cell::new(0),
            published: Cell::new(0),
        }
    }

    pub fn begin(&self) -> RefreshTicket {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        RefreshTicket(ticket)
    }

    /// ## Errors
    /// [StakingError::StaleRefresh] if a newer refresh has already been published
    pub fn publish(&self, ticket: RefreshTicket, value: T) -> Result<(), StakingError> {
        if ticket.0 <= self.published.get() {
            return Err(StakingError::StaleRefresh);
        }
        self.published.set(ticket.0);
        *self.value.borrow_mut() = value;
        Ok(())
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Resets the value to its default.
    ///
    /// All refreshes that are still in flight become stale.
    pub fn reset(&self) {
        self.published.set(self.issued.get());
        *self.value.borrow_mut() = T::default();
    }

    /// returns true if a refresh was started after the current value was published
    #[cfg(test)]
    pub fn has_pending_refresh(&self) -> bool {
        self.issued.get() > self.published.get()
    }
}
