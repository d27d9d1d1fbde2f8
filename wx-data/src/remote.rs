//! Per-operation state slot: `Idle -> Loading -> Success | Error`.
//!
//! Every trigger calls [`Remote::begin`], which moves the slot to `Loading`
//! and hands out a [`Ticket`]. Only the most recently issued ticket may
//! resolve the slot, so a slow response to an earlier trigger cannot
//! overwrite the result of a later one.

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading,
    Success(T),
    Error(FetchError),
}

/// Proof that a request was started; consumed by [`Remote::resolve`].
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// What [`Remote::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed,
    /// A newer request was started; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Remote<T> {
    state: RemoteState<T>,
    issued: u64,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Remote<T> {
    pub fn new() -> Self {
        Self {
            state: RemoteState::Idle,
            issued: 0,
        }
    }

    /// Start a request: clears any previous payload or error.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = RemoteState::Loading;
        Ticket(self.issued)
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, FetchError>) -> Resolution {
        if ticket.0 != self.issued {
            return Resolution::Stale;
        }
        match outcome {
            Ok(payload) => {
                self.state = RemoteState::Success(payload);
                Resolution::Succeeded
            }
            Err(error) => {
                self.state = RemoteState::Error(error);
                Resolution::Failed
            }
        }
    }

    /// [`resolve`](Self::resolve), then hand the new payload to `on_success`.
    ///
    /// `on_success` runs only for the latest request and only when it
    /// succeeded; failed and stale outcomes never reach it.
    pub fn resolve_with<F>(
        &mut self,
        ticket: Ticket,
        outcome: Result<T, FetchError>,
        on_success: F,
    ) -> Resolution
    where
        F: FnOnce(&T),
    {
        let resolution = self.resolve(ticket, outcome);
        if resolution == Resolution::Succeeded {
            if let Some(payload) = self.data() {
                on_success(payload);
            }
        }
        resolution
    }

    /// Fail without issuing a request; any request in flight becomes stale.
    pub fn reject(&mut self, error: FetchError) {
        self.issued += 1;
        self.state = RemoteState::Error(error);
    }

    pub fn state(&self) -> &RemoteState<T> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, RemoteState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RemoteState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            RemoteState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            RemoteState::Error(error) => Some(error),
            _ => None,
        }
    }
}
