//! Generation tokens guarding against stale image loads
//!
//! Image decoding completes asynchronously. A user may pick a new file before
//! the previous one finished, so every request gets a token and only the most
//! recent one is allowed to deliver metrics.

/// Identifies one image load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadToken(u64);

impl LoadToken {
    /// Request sequence number, starting at 1
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Hands out load tokens and accepts only the latest completion
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    generation: u64,
    pending: Option<LoadToken>,
}

impl LoadTracker {
    /// Create a tracker with no request issued
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Start a new request, superseding any pending one
    pub const fn begin(&mut self) -> LoadToken {
        self.generation = self.generation.wrapping_add(1);
        let token = LoadToken(self.generation);
        self.pending = Some(token);
        token
    }

    /// Accept the completion for `token` if it is the pending request
    ///
    /// Returns `false` for superseded or already completed tokens.
    pub fn finish(&mut self, token: LoadToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Pending request, if one is in flight
    pub const fn pending(&self) -> Option<LoadToken> {
        self.pending
    }
}
