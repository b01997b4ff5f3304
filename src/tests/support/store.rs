use std::sync::atomic::{AtomicU8, Ordering};

use crate::shared::store::{ConnectionState, StoreStatus};

/// Store status pinned to a given state, switchable mid-test.
pub struct FixedStoreStatus {
    state: AtomicU8,
}

impl FixedStoreStatus {
    pub fn new(state: ConnectionState) -> Self {
        Self {
            state: AtomicU8::new(encode(state)),
        }
    }

    pub fn set(&self, state: ConnectionState) {
        self.state.store(encode(state), Ordering::SeqCst);
    }
}

impl StoreStatus for FixedStoreStatus {
    fn state(&self) -> ConnectionState {
        match self.state.load(Ordering::SeqCst) {
            0 => ConnectionState::Connecting,
            1 => ConnectionState::Connected,
            _ => ConnectionState::Disconnected,
        }
    }
}

fn encode(state: ConnectionState) -> u8 {
    match state {
        ConnectionState::Connecting => 0,
        ConnectionState::Connected => 1,
        ConnectionState::Disconnected => 2,
    }
}
