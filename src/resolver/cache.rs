//! In-flight resolution registry.
//!
//! Callers asking for a key that is already being resolved join the running
//! computation instead of starting another one. Entries live only while the
//! computation runs, so a failure is never replayed to later callers.
//! Process-local: separate processes can still race each other.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use tracing::debug;

use crate::domain::{ResolutionKey, VendorProductId};
use crate::error::ResolveError;

pub type ResolveOutcome = Result<VendorProductId, ResolveError>;

type Waiters = Vec<oneshot::Sender<ResolveOutcome>>;
type PendingMap = Arc<Mutex<HashMap<ResolutionKey, Waiters>>>;

fn lock(pending: &PendingMap) -> MutexGuard<'_, HashMap<ResolutionKey, Waiters>> {
    // The map stays consistent even if a holder panicked; no lock is held across an await.
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cheap to clone; clones share the same registry.
#[derive(Clone, Default)]
pub struct ResolverCache {
    pending: PendingMap,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the resolution running for `key`, or starts one with `start`.
    ///
    /// `start` is only called when no resolution is pending. The computation
    /// is spawned onto the runtime and runs to completion even if every
    /// handle is dropped. Must be called from within a tokio runtime.
    pub fn acquire<F, Fut>(&self, key: ResolutionKey, start: F) -> PendingResolution
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ResolveOutcome> + Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();

        {
            let mut pending = lock(&self.pending);
            if let Some(waiters) = pending.get_mut(&key) {
                debug!(%key, waiters = waiters.len(), "Joining pending resolution");
                waiters.push(respond_to);
                return PendingResolution { key, response };
            }
            pending.insert(key, vec![respond_to]);
        }

        debug!(%key, "Starting resolution");
        let guard = PendingGuard {
            key,
            pending: Arc::clone(&self.pending),
            released: false,
        };
        let computation = start();
        tokio::spawn(async move {
            let outcome = computation.await;
            guard.complete(outcome);
        });

        PendingResolution { key, response }
    }

    pub fn is_pending(&self, key: &ResolutionKey) -> bool {
        lock(&self.pending).contains_key(key)
    }

    pub fn pending_len(&self) -> usize {
        lock(&self.pending).len()
    }
}

/// Handle on one pending resolution.
#[derive(Debug)]
pub struct PendingResolution {
    key: ResolutionKey,
    response: oneshot::Receiver<ResolveOutcome>,
}

impl PendingResolution {
    pub fn key(&self) -> ResolutionKey {
        self.key
    }

    /// Waits for the shared outcome.
    pub async fn wait(self) -> ResolveOutcome {
        let key = self.key;
        self.response
            .await
            .unwrap_or(Err(ResolveError::Abandoned(key)))
    }
}

/// Removes the registry entry when the computation ends, however it ends.
struct PendingGuard {
    key: ResolutionKey,
    pending: PendingMap,
    released: bool,
}

impl PendingGuard {
    fn take_waiters(&self) -> Waiters {
        lock(&self.pending).remove(&self.key).unwrap_or_default()
    }

    fn complete(mut self, outcome: ResolveOutcome) {
        let waiters = self.take_waiters();
        self.released = true;
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        // Only reached unreleased when the computation panicked. Dropping the
        // senders wakes the waiters with `Abandoned`.
        if !self.released {
            self.take_waiters();
        }
    }
}
