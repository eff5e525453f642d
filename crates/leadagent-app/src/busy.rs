//! Busy state for triggers that start a service call
//!
//! A trigger is disabled and shows its busy label between `try_acquire`
//! and `release`. The handler that acquires it is paired with a completion
//! message that always releases it, whatever the outcome.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyTrigger {
    idle_label: &'static str,
    busy_label: &'static str,
    busy: bool,
}

impl BusyTrigger {
    pub const fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            idle_label,
            busy_label,
            busy: false,
        }
    }

    /// Enter the busy state. Returns false (and changes nothing) when the
    /// trigger is already busy.
    pub fn try_acquire(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn release(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_enabled(&self) -> bool {
        !self.busy
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            self.busy_label
        } else {
            self.idle_label
        }
    }
}
