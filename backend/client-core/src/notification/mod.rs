//! Single-slot toast notifications and the copy-button pulse.
//!
//! Both are tickets against a slot: showing a new toast replaces the old
//! one, and an expiry only clears the slot if its ticket is still current.
//! Timers live in the session; this module only tracks state.

use std::time::Duration;

use log::debug;

pub const COPY_PULSE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub ticket: ToastTicket,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notifier {
    issued: u64,
    current: Option<Toast>,
}

impl Notifier {
    /// Show `message`, replacing any visible toast.
    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.issued += 1;
        let ticket = ToastTicket(self.issued);
        let message = message.into();

        if let Some(previous) = self.current.take() {
            debug!("Toast {:?} replaced by {:?}", previous.ticket, ticket);
        }
        debug!("Showing toast {:?}: {}", ticket, message);

        self.current = Some(Toast { ticket, message });
        ticket
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Dismiss the toast for `ticket`. Returns false if it was already replaced.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        match &self.current {
            Some(toast) if toast.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Number of toasts shown so far.
    pub fn shown_count(&self) -> u64 {
        self.issued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PulseTicket(u64);

/// Highlight on the copy button after a successful copy.
#[derive(Debug, Default)]
pub struct CopyPulse {
    issued: u64,
    active: Option<PulseTicket>,
}

impl CopyPulse {
    pub fn start(&mut self) -> PulseTicket {
        self.issued += 1;
        let ticket = PulseTicket(self.issued);
        self.active = Some(ticket);
        ticket
    }

    pub fn end(&mut self, ticket: PulseTicket) -> bool {
        if self.active == Some(ticket) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
