//! `StateChannel` — an observable `LoadState` with per-cycle publishing.
//!
//! Each request cycle takes a `Cycle` token from `begin()`, which publishes
//! `Pending`. The terminal value goes through `finish()`, which drops it if a
//! newer cycle has begun in the meantime. A slow response can therefore never
//! overwrite the state of a request issued after it.

use super::LoadState;
use async_lock::Mutex;
use futures_util::stream::Stream;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Token for one request cycle on one channel. Later cycles compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cycle(u64);

struct Shared<T> {
    current: LoadState<T>,
    generation: u64,
    settled: bool,
    subscribers: Vec<mpsc::UnboundedSender<LoadState<T>>>,
}

impl<T: Clone> Shared<T> {
    fn publish(&mut self, state: LoadState<T>) {
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
        self.current = state;
    }
}

/// Observable current value of one logical request.
///
/// Starts out `Pending`. Clones share the same state.
pub struct StateChannel<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for StateChannel<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone> Default for StateChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> StateChannel<T> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                current: LoadState::Pending,
                generation: 0,
                settled: false,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the latest published value.
    pub async fn current(&self) -> LoadState<T> {
        self.shared.lock().await.current.clone()
    }

    /// Receive every value published from now on, in order.
    ///
    /// The current value is not replayed; read it with `current()`.
    pub async fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.lock().await.subscribers.push(tx);
        Subscription { rx }
    }

    /// Start a new cycle: publishes `Pending` and supersedes any cycle in flight.
    pub async fn begin(&self) -> Cycle {
        let mut shared = self.shared.lock().await;
        shared.generation += 1;
        shared.settled = false;
        shared.publish(LoadState::Pending);
        Cycle(shared.generation)
    }

    /// Publish the terminal value of `cycle`.
    ///
    /// Returns `false` (publishing nothing) when a newer cycle has begun,
    /// when the cycle already published its terminal value, or when `state`
    /// is `Pending`.
    pub async fn finish(&self, cycle: Cycle, state: LoadState<T>) -> bool {
        let mut shared = self.shared.lock().await;
        if cycle.0 != shared.generation || shared.settled || !state.is_terminal() {
            return false;
        }
        shared.settled = true;
        shared.publish(state);
        true
    }

    /// Whether `cycle` is still the newest one.
    pub async fn is_current(&self, cycle: Cycle) -> bool {
        self.shared.lock().await.generation == cycle.0
    }
}

/// Ordered feed of values published on a `StateChannel`.
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<LoadState<T>>,
}

impl<T> Subscription<T> {
    /// Wait for the next published value.
    ///
    /// Returns `None` once the channel and every clone of it are dropped.
    pub async fn recv(&mut self) -> Option<LoadState<T>> {
        self.rx.recv().await
    }

    /// Next already-published value, without waiting.
    pub fn try_recv(&mut self) -> Option<LoadState<T>> {
        self.rx.try_recv().ok()
    }

    /// Drain everything published so far.
    pub fn drain(&mut self) -> Vec<LoadState<T>> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    pub fn into_stream(self) -> impl Stream<Item = LoadState<T>> {
        futures_util::stream::unfold(self.rx, |mut rx| async move {
            rx.recv().await.map(|state| (state, rx))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_starts_pending() {
        let channel: StateChannel<u32> = StateChannel::new();
        assert_eq!(channel.current().await, LoadState::Pending);
    }

    #[tokio::test]
    async fn test_cycle_publishes_pending_then_terminal() {
        let channel = StateChannel::new();
        let mut sub = channel.subscribe().await;

        let cycle = channel.begin().await;
        assert!(channel.finish(cycle, LoadState::Success(7u32)).await);

        assert_eq!(sub.drain(), vec![LoadState::Pending, LoadState::Success(7)]);
        assert_eq!(channel.current().await, LoadState::Success(7));
    }

    #[tokio::test]
    async fn test_superseded_cycle_is_dropped() {
        let channel = StateChannel::new();
        let mut sub = channel.subscribe().await;

        let old = channel.begin().await;
        let new = channel.begin().await;
        assert!(!channel.is_current(old).await);
        assert!(channel.finish(new, LoadState::Success(2u32)).await);
        assert!(!channel.finish(old, LoadState::Success(1u32)).await);

        assert_eq!(
            sub.drain(),
            vec![LoadState::Pending, LoadState::Pending, LoadState::Success(2)]
        );
        assert_eq!(channel.current().await, LoadState::Success(2));
    }

    #[tokio::test]
    async fn test_cycles_are_ordered() {
        let channel = StateChannel::<u32>::new();
        let first = channel.begin().await;
        let second = channel.begin().await;
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_finish_twice_publishes_once() {
        let channel = StateChannel::new();
        let cycle = channel.begin().await;
        assert!(channel.finish(cycle, LoadState::Failure("a".into())).await);
        assert!(!channel.finish(cycle, LoadState::Success(1u32)).await);
        assert_eq!(channel.current().await, LoadState::Failure("a".into()));
    }

    #[tokio::test]
    async fn test_pending_is_not_terminal() {
        let channel = StateChannel::<u32>::new();
        let cycle = channel.begin().await;
        assert!(!channel.finish(cycle, LoadState::Pending).await);
        assert!(channel.finish(cycle, LoadState::Success(1)).await);
    }

    #[tokio::test]
    async fn test_dropped_subscriber_is_pruned() {
        let channel = StateChannel::<u32>::new();
        let sub = channel.subscribe().await;
        drop(sub);
        channel.begin().await;
        assert!(channel.shared.lock().await.subscribers.is_empty());
    }

    #[tokio::test]
    async fn test_stream_yields_in_order() {
        let channel = StateChannel::new();
        let stream = channel.subscribe().await.into_stream();
        let cycle = channel.begin().await;
        channel.finish(cycle, LoadState::Success("done")).await;

        let states: Vec<_> = stream.take(2).collect().await;
        assert_eq!(states, vec![LoadState::Pending, LoadState::Success("done")]);
    }
}
