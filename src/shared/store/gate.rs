// src/shared/store/gate.rs

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use super::connection::{ConnectionState, StoreStatus};

/// Lets the gate tell an unreachable or faulty store apart from a legitimate
/// miss (not-found), which must never be masked by fallback data.
pub trait StoreFailure {
    fn is_store_failure(&self) -> bool;
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Database is {0}")]
pub struct StoreUnavailable(pub ConnectionState);

/// Routes reads between the live store and an in-process source depending on
/// connection state.
#[derive(Clone)]
pub struct AvailabilityGate {
    status: Arc<dyn StoreStatus>,
}

impl fmt::Debug for AvailabilityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityGate")
            .field("state", &self.status.state())
            .finish()
    }
}

impl AvailabilityGate {
    pub fn new(status: Arc<dyn StoreStatus>) -> Self {
        Self { status }
    }

    pub fn state(&self) -> ConnectionState {
        self.status.state()
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    /// Live when connected, `fallback` when not, and `fallback` again when the
    /// live query fails with a store failure. Both futures are lazy; the one
    /// not chosen is never polled.
    pub async fn read<T, E, L, F>(&self, resource: &'static str, live: L, fallback: F) -> Result<T, E>
    where
        L: Future<Output = Result<T, E>>,
        F: Future<Output = Result<T, E>>,
        E: StoreFailure + fmt::Display,
    {
        if !self.status.is_connected() {
            debug!(
                resource,
                state = %self.status.state(),
                "Database not connected, using fallback data"
            );
            return fallback.await;
        }

        match live.await {
            Err(e) if e.is_store_failure() => {
                warn!(resource, error = %e, "Live query failed, using fallback data");
                fallback.await
            }
            other => other,
        }
    }

    /// Empty collection when not connected; failures of a connected query
    /// are returned to the caller.
    pub async fn read_or_empty<T, E, L>(&self, resource: &'static str, live: L) -> Result<T, E>
    where
        T: Default,
        L: Future<Output = Result<T, E>>,
    {
        if !self.status.is_connected() {
            debug!(
                resource,
                state = %self.status.state(),
                "Database not connected, returning empty result"
            );
            return Ok(T::default());
        }

        live.await
    }

    /// For paths with no fallback: fail fast instead of waiting on the pool.
    pub fn ensure_connected(&self) -> Result<(), StoreUnavailable> {
        match self.status.state() {
            ConnectionState::Connected => Ok(()),
            other => Err(StoreUnavailable(other)),
        }
    }
}
