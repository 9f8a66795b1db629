use crate::domain::{ActionKind, ActionState};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Default)]
struct ActionSlot {
    state: ActionState,
    /// true from the moment an attempt is accepted until it completes - covers login
    in_flight: bool,
}

/// Per [ActionKind] state with single-flight submission.
///
/// Resetting bumps the generation, which detaches any attempt still in flight: its later state
/// updates are ignored. The kind stays claimed until the detached attempt completes, so a new
/// attempt of the same kind cannot be submitted while the previous contract call is outstanding.
pub(crate) struct ActionSlots {
    slots: RefCell<[ActionSlot; 4]>,
    generation: Cell<u64>,
}

impl ActionSlots {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Default::default()),
            generation: Cell::new(0),
        }
    }

    pub fn state(&self, kind: ActionKind) -> ActionState {
        self.slots.borrow()[kind.index()].state.clone()
    }

    #[cfg(test)]
    pub fn is_in_flight(&self, kind: ActionKind) -> bool {
        self.slots.borrow()[kind.index()].in_flight
    }

    /// Returns None if an attempt of the same kind is already in flight.
    ///
    /// The previous outcome is cleared, i.e., the state is reset to [ActionState::Idle].
    pub fn try_acquire(&self, kind: ActionKind) -> Option<Flight<'_>> {
        let mut slots = self.slots.borrow_mut();
        let slot = &mut slots[kind.index()];
        if slot.in_flight {
            return None;
        }
        slot.in_flight = true;
        slot.state = ActionState::Idle;
        Some(Flight {
            slots: self,
            kind,
            generation: self.generation.get(),
        })
    }

    /// All states are reset to [ActionState::Idle]. Attempts in flight keep their claim.
    pub fn reset(&self) {
        self.generation.set(self.generation.get() + 1);
        for slot in self.slots.borrow_mut().iter_mut() {
            slot.state = ActionState::Idle;
        }
    }

    fn update_state(&self, kind: ActionKind, generation: u64, f: impl FnOnce(&mut ActionState)) {
        if generation != self.generation.get() {
            return;
        }
        f(&mut self.slots.borrow_mut()[kind.index()].state);
    }

    fn release(&self, kind: ActionKind) {
        self.slots.borrow_mut()[kind.index()].in_flight = false;
    }
}

/// Exclusive claim on an action kind - released when dropped
pub(crate) struct Flight<'a> {
    slots: &'a ActionSlots,
    kind: ActionKind,
    generation: u64,
}

impl Flight<'_> {
    pub fn set_state(&self, state: ActionState) {
        self.slots
            .update_state(self.kind, self.generation, |current| *current = state);
    }
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.slots.release(self.kind);
        self.slots.update_state(self.kind, self.generation, |state| {
            // the attempt was abandoned while the contract call was pending
            if state.is_submitting() {
                *state = ActionState::Idle;
            }
        });
    }
}
