//! Per-session advisory request sequencing
//!
//! Classic stale-response guard: every request takes a monotonically
//! increasing ticket and only the response holding the latest ticket may
//! be published. A response that finishes after a newer ticket was issued
//! is discarded, regardless of arrival order. An in-flight flag rejects
//! duplicate submissions outright.
//!
//! Tickets are RAII guards: if the request future is dropped mid-flight
//! (client disconnect), the guard's `Drop` releases the gate, so an
//! abandoned request can never wedge the session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use shared::error::{AppError, AppResult, ErrorCode};

/// Sequencing gate, lock-free, one per session
#[derive(Debug, Default)]
pub struct AdvisorGate {
    latest: AtomicU64,
    in_flight: AtomicBool,
}

impl AdvisorGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a new request, rejecting duplicates.
    ///
    /// Fails with [`ErrorCode::AdvisorBusy`] while another request on this
    /// session is still in flight.
    pub fn try_begin(self: &Arc<Self>) -> AppResult<AdvisorTicket> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(AppError::new(ErrorCode::AdvisorBusy));
        }
        Ok(self.issue())
    }

    /// Take a ticket unconditionally, superseding any in-flight request.
    #[cfg(test)]
    fn begin(self: &Arc<Self>) -> AdvisorTicket {
        self.in_flight.store(true, Ordering::Release);
        self.issue()
    }

    fn issue(self: &Arc<Self>) -> AdvisorTicket {
        AdvisorTicket {
            gate: self.clone(),
            ticket: self.latest.fetch_add(1, Ordering::AcqRel) + 1,
            done: false,
        }
    }

    /// Retire `ticket`: true iff it is still the latest issued. A stale
    /// ticket does not clear the in-flight flag, which belongs to the
    /// newer request.
    fn finish(&self, ticket: u64) -> bool {
        if self.latest.load(Ordering::Acquire) == ticket {
            self.in_flight.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }
}

/// An in-flight advisory request's ticket.
///
/// Call [`AdvisorTicket::complete`] when the upstream answer arrives;
/// dropping the ticket without completing it (the request future was
/// abandoned) releases the gate instead.
#[derive(Debug)]
pub struct AdvisorTicket {
    gate: Arc<AdvisorGate>,
    ticket: u64,
    done: bool,
}

impl AdvisorTicket {
    /// Finish the request. Returns whether the result may be published:
    /// true iff this ticket is still the latest issued.
    pub fn complete(mut self) -> bool {
        self.done = true;
        self.gate.finish(self.ticket)
    }
}

impl Drop for AdvisorTicket {
    fn drop(&mut self) {
        if !self.done {
            self.gate.finish(self.ticket);
        }
    }
}
