#![forbid(unsafe_code)]

//! Fetch ticketing.
//!
//! Every window fetch is tagged with a monotonically increasing ticket.
//! A response is applied only while its ticket is still the latest
//! issued, so a slow fetch whose result arrives after a newer navigation
//! can never clobber the newer window. This replaces the untagged
//! last-write-wins behavior of the original frontend; see DESIGN.md for
//! the decision record.

/// Identity of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// Issues tickets and decides whether a completed fetch is still
/// current.
#[derive(Debug, Default)]
pub struct FetchLedger {
    issued: u64,
}

impl FetchLedger {
    /// Create a ledger with no fetches issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. Issuing invalidates all earlier tickets.
    pub fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}
