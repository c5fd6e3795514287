//! Single-flight request coordination.
//!
//! The list engine itself is pure; the layer that fetches raw pages is not,
//! and tends to fire the same request several times when multiple views
//! render at once. Instead of module-level "is fetching" flags, callers own
//! an explicit [`FlightGroup`]: concurrent calls with the same key await
//! one shared execution, and the result is broadcast to every waiter.
//!
//! # Example
//!
//! ```
//! use recount_flight::FlightGroup;
//!
//! # #[tokio::main(flavor = "current_thread")] async fn main() {
//! let group: FlightGroup<String, u32> = FlightGroup::new();
//! let (a, b) = tokio::join!(
//!     group.run("invoices?limit=10".to_string(), || async { 7 }),
//!     group.run("invoices?limit=10".to_string(), || async { 7 }),
//! );
//! assert_eq!((a, b), (7, 7));
//! # }
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::hash::Hash;
use tokio::sync::{Mutex, watch};

/// De-duplicates concurrent executions keyed by `K`.
///
/// While a call for a key is in flight, later calls with the same key wait
/// for its result instead of executing. Once the leader finishes, the entry
/// is removed: a subsequent call starts a fresh execution. There is no
/// caching, only in-flight coalescing.
#[derive(Debug)]
pub struct FlightGroup<K, V> {
    inflight: Mutex<HashMap<K, watch::Receiver<Option<V>>>>,
}

enum Role<V> {
    Leader(watch::Sender<Option<V>>),
    Waiter(watch::Receiver<Option<V>>),
}

impl<K, V> FlightGroup<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Number of keys currently in flight.
    pub async fn in_flight(&self) -> usize {
        self.inflight.lock().await.len()
    }

    /// Runs `work` for `key`, coalescing with any in-flight execution.
    ///
    /// If another call for the same key is already running, this one awaits
    /// its result and `work` is never invoked. If the leader is dropped
    /// before producing a value (cancelled or panicked), one waiter takes
    /// over leadership and runs its own `work`.
    pub async fn run<F, Fut>(&self, key: K, work: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        loop {
            let role = {
                let mut inflight = self.inflight.lock().await;
                match inflight.entry(key.clone()) {
                    Entry::Occupied(entry) => Role::Waiter(entry.get().clone()),
                    Entry::Vacant(slot) => {
                        let (tx, rx) = watch::channel(None);
                        slot.insert(rx);
                        Role::Leader(tx)
                    }
                }
            };

            match role {
                Role::Leader(tx) => {
                    let value = work().await;
                    // Remove before broadcasting so a call arriving after
                    // completion starts a fresh execution.
                    self.inflight.lock().await.remove(&key);
                    let _ = tx.send(Some(value.clone()));
                    return value;
                }
                Role::Waiter(mut rx) => {
                    // Clone the broadcast value out so the watch guard (and
                    // its borrow of `rx`) ends before the recovery path
                    // below inspects the channel again.
                    let received: Option<V> = match rx.wait_for(Option::is_some).await {
                        Ok(guard) => guard.clone(),
                        Err(_) => None,
                    };
                    match received {
                        Some(value) => return value,
                        None => {
                            // Leader dropped without a result; clear the
                            // stale entry (only if it is still ours, another
                            // waiter may have re-led already) and contend
                            // for leadership.
                            tracing::debug!("single-flight leader dropped, retrying");
                            let mut inflight = self.inflight.lock().await;
                            if inflight.get(&key).is_some_and(|r| r.same_channel(&rx)) {
                                inflight.remove(&key);
                            }
                            continue;
                        }
                    }
                }
            }
        }
    }
}

impl<K, V> Default for FlightGroup<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
