//! Fetch generation tickets
//!
//! Every menu fetch is issued a ticket. Only a result carrying the latest
//! issued ticket may be applied; anything older has been superseded.

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl std::fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch#{}", self.generation)
    }
}

/// Monotonic ticket counter
#[derive(Debug, Clone, Default)]
pub struct FetchGenerations {
    latest: u64,
}

impl FetchGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch, superseding all earlier tickets
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            generation: self.latest,
        }
    }

    /// Supersede every outstanding ticket without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}
