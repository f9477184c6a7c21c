use axum::extract::FromRef;

use crate::dashboard::Dashboard;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The dashboard is built before serving and never changes afterwards, so
/// handlers share it without locking.
pub type GuardedDashboard = Arc<Dashboard>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub dashboard: GuardedDashboard,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, dashboard: GuardedDashboard) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            dashboard,
            hash: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedDashboard {
    fn from_ref(input: &ServerState) -> Self {
        input.dashboard.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
