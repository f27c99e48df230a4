//! Load coordinators — the screen-facing side of the SDK.
//!
//! A coordinator owns one `StateChannel` per logical request, issues the
//! fetches for the current parameters, and publishes each result through the
//! channel's cycle protocol. Coordinator methods are plain `async fn`s on
//! `&self`; callers decide whether to await them inline or spawn them.

pub mod detail;
pub mod list;

pub use detail::DetailCoordinator;
pub use list::ListCoordinator;

use crate::error::SdkError;
use crate::state::{Cycle, LoadState, StateChannel};
use std::future::Future;

/// Run one request cycle on `channel`.
///
/// Publishes `Pending`, awaits `fetch`, then publishes the flattened result.
/// Returns whether the result was published (it is dropped if a newer cycle
/// began while `fetch` was in flight).
pub(crate) async fn run_cycle<T, F>(channel: &StateChannel<T>, request: &str, fetch: F) -> bool
where
    T: Clone,
    F: Future<Output = Result<T, SdkError>>,
{
    let cycle = channel.begin().await;
    settle_cycle(channel, cycle, request, fetch).await
}

/// Await `fetch` and publish its flattened result as the outcome of `cycle`.
pub(crate) async fn settle_cycle<T, F>(
    channel: &StateChannel<T>,
    cycle: Cycle,
    request: &str,
    fetch: F,
) -> bool
where
    T: Clone,
    F: Future<Output = Result<T, SdkError>>,
{
    let state = match fetch.await {
        Ok(value) => LoadState::Success(value),
        Err(err) => {
            let message = err.failure_message();
            tracing::warn!(request, error = %err, failure = %message, "Load failed");
            LoadState::Failure(message)
        }
    };

    let published = channel.finish(cycle, state).await;
    if !published {
        tracing::debug!(request, "Discarding superseded result");
    }
    published
}
