//! Per-endpoint request sequencing.
//!
//! Poll cycles can overlap: a slow response may arrive after a newer request
//! for the same endpoint was issued. Every request takes a [`Ticket`]; only
//! the holder of the latest ticket for an endpoint may render.

use std::sync::atomic::{AtomicU64, Ordering};

/// Endpoints whose responses replace displayed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SystemState,
    SensorBoard,
    Events,
    SensorEvents,
    Notifications,
    ControlBoardUrl,
}

impl Endpoint {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            Self::SystemState => 0,
            Self::SensorBoard => 1,
            Self::Events => 2,
            Self::SensorEvents => 3,
            Self::Notifications => 4,
            Self::ControlBoardUrl => 5,
        }
    }
}

/// Sequence number handed to one outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    endpoint: Endpoint,
    seq: u64,
}

impl Ticket {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Issues monotonically increasing tickets per endpoint.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: [AtomicU64; Endpoint::COUNT],
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket for `endpoint`, superseding all earlier ones.
    pub fn issue(&self, endpoint: Endpoint) -> Ticket {
        let seq = self.latest[endpoint.index()].fetch_add(1, Ordering::Relaxed) + 1;
        Ticket { endpoint, seq }
    }

    /// Whether no newer ticket has been issued for the ticket's endpoint.
    #[must_use]
    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        self.latest[ticket.endpoint.index()].load(Ordering::Relaxed) == ticket.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_only_latest_ticket() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue(Endpoint::SystemState);
        assert!(sequencer.is_latest(&first));

        let second = sequencer.issue(Endpoint::SystemState);
        assert!(!sequencer.is_latest(&first));
        assert!(sequencer.is_latest(&second));
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn should_track_endpoints_independently() {
        let sequencer = RequestSequencer::new();
        let state = sequencer.issue(Endpoint::SystemState);
        let events = sequencer.issue(Endpoint::Events);
        let _newer_events = sequencer.issue(Endpoint::Events);

        assert!(sequencer.is_latest(&state));
        assert!(!sequencer.is_latest(&events));
        assert_eq!(state.endpoint(), Endpoint::SystemState);
    }
}
