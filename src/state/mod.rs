//! Three-state load results and the channel that publishes them.

pub mod channel;

pub use channel::{Cycle, StateChannel, Subscription};

use serde::{Deserialize, Serialize};

/// Outcome of one logical request as seen by a screen.
///
/// A request cycle always publishes `Pending` first and then exactly one of
/// `Success` or `Failure`. A new cycle starts over at `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LoadState<T> {
    Pending,
    Success(T),
    Failure(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            LoadState::Pending => false,
            LoadState::Success(_) | LoadState::Failure(_) => true,
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            LoadState::Pending | LoadState::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failure(message) => Some(message),
            LoadState::Pending | LoadState::Success(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Pending => LoadState::Pending,
            LoadState::Success(value) => LoadState::Success(f(value)),
            LoadState::Failure(message) => LoadState::Failure(message),
        }
    }
}

impl<T> From<Result<T, crate::error::SdkError>> for LoadState<T> {
    fn from(result: Result<T, crate::error::SdkError>) -> Self {
        match result {
            Ok(value) => LoadState::Success(value),
            Err(err) => LoadState::Failure(err.failure_message()),
        }
    }
}
