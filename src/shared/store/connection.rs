// src/shared/store/connection.rs

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

//
// ──────────────────────────────────────────────────────────
// Connection state
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionState {
    fn to_u8(self) -> u8 {
        match self {
            ConnectionState::Connecting => 0,
            ConnectionState::Connected => 1,
            ConnectionState::Disconnected => 2,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => ConnectionState::Connecting,
            1 => ConnectionState::Connected,
            _ => ConnectionState::Disconnected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the store connection, handed to everything that serves
/// requests. Only [`StoreHandle`] ever changes the state.
pub trait StoreStatus: Send + Sync {
    fn state(&self) -> ConnectionState;

    fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }
}

//
// ──────────────────────────────────────────────────────────
// Store handle
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub heartbeat_interval: Duration,
}

/// Owns the single pool and the connection flag for the whole process.
#[derive(Clone)]
pub struct StoreHandle {
    db: Arc<DatabaseConnection>,
    state: Arc<AtomicU8>,
    connect_timeout: Duration,
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("state", &self.state())
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl StoreHandle {
    /// Builds a lazily connecting pool. Nothing here waits on the database;
    /// the state stays `Connecting` until the first probe.
    pub async fn open(config: &StoreConfig) -> Self {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(10)
            .min_connections(0)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy(true)
            .sqlx_logging(false);

        match Database::connect(opt).await {
            Ok(db) => Self::from_connection(db, ConnectionState::Connecting, config.connect_timeout),
            Err(e) => {
                error!(error = %e, "Invalid store configuration, serving fallback data only");
                Self::from_connection(
                    DatabaseConnection::Disconnected,
                    ConnectionState::Disconnected,
                    config.connect_timeout,
                )
            }
        }
    }

    pub fn from_connection(
        db: DatabaseConnection,
        initial: ConnectionState,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            db: Arc::new(db),
            state: Arc::new(AtomicU8::new(initial.to_u8())),
            connect_timeout,
        }
    }

    pub fn connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.db)
    }

    /// Pings the store once, bounded by the connect timeout, and records the
    /// outcome.
    pub async fn probe(&self) -> ConnectionState {
        let next = match tokio::time::timeout(self.connect_timeout, self.db.ping()).await {
            Ok(Ok(())) => ConnectionState::Connected,
            Ok(Err(e)) => {
                debug!(error = %e, "Store ping failed");
                ConnectionState::Disconnected
            }
            Err(_) => {
                debug!(
                    timeout_secs = self.connect_timeout.as_secs(),
                    "Store ping timed out"
                );
                ConnectionState::Disconnected
            }
        };

        let previous = ConnectionState::from_u8(self.state.swap(next.to_u8(), Ordering::AcqRel));
        if previous != next {
            match next {
                ConnectionState::Connected => info!("Database connected successfully"),
                _ => warn!(
                    previous = %previous,
                    "Database unavailable, running without database (fallback data)"
                ),
            }
        }

        next
    }

    /// Periodic probe; this is how a recovered database flips reads back to
    /// the live path. The first tick fires immediately.
    pub fn spawn_heartbeat(&self, interval: Duration) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                handle.probe().await;
            }
        })
    }
}

impl StoreStatus for StoreHandle {
    fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }
}
