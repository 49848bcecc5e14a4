use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use shared::cart::CartLedger;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::content::{Achievement, Executive, Service, seed_executives, seed_history, seed_services};
use shared::models::product::{Product, seed_catalog};
use shared::util::now_millis;

use crate::advisor::{AdvisorAnswer, AdvisorClient, AdvisorGate, GeminiAdvisor};
use crate::core::Config;

/// One browsing session: a cart ledger plus the advisory sequencing gate.
///
/// All mutations to a session go through its mutex, so concurrent requests
/// against the same session are serialized; distinct sessions never
/// contend.
#[derive(Debug)]
pub struct Session {
    pub cart: CartLedger,
    /// Arc so in-flight advisory tickets can outlive the session lock
    pub gate: Arc<AdvisorGate>,
    /// Latest published advisory answer (stale responses never land here)
    pub advisor_answer: Option<AdvisorAnswer>,
    pub created_at: i64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            cart: CartLedger::new(),
            gate: Arc::new(AdvisorGate::new()),
            advisor_answer: None,
            created_at: now_millis(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared server state
///
/// Cheap to clone: everything mutable or large sits behind an Arc.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Immutable configuration |
/// | catalog | Arc<Vec<Product>> | Fixed nine-product catalog |
/// | services / executives / history | Arc<Vec<_>> | Static company content |
/// | sessions | DashMap<Uuid, Arc<Mutex<Session>>> | Per-session carts |
/// | advisor | Arc<dyn AdvisorClient> | Advisory upstream |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Vec<Product>>,
    pub services: Arc<Vec<Service>>,
    pub executives: Arc<Vec<Executive>>,
    pub history: Arc<Vec<Achievement>>,
    pub sessions: Arc<DashMap<Uuid, Arc<Mutex<Session>>>>,
    pub advisor: Arc<dyn AdvisorClient>,
    /// Process start, UTC millis (uptime reference for health checks)
    pub started_at: i64,
}

impl ServerState {
    /// Build the state from configuration: seed the static catalog and
    /// content, start with an empty session table
    pub fn initialize(config: &Config) -> Self {
        let advisor = GeminiAdvisor::new(
            &config.advisor_api_key,
            &config.advisor_model,
            config.advisor_timeout_ms,
        );

        Self::with_advisor(config, Arc::new(advisor))
    }

    /// Build the state with a caller-supplied advisor (test seam)
    pub fn with_advisor(config: &Config, advisor: Arc<dyn AdvisorClient>) -> Self {
        Self {
            config: config.clone(),
            catalog: Arc::new(seed_catalog()),
            services: Arc::new(seed_services()),
            executives: Arc::new(seed_executives()),
            history: Arc::new(seed_history()),
            sessions: Arc::new(DashMap::new()),
            advisor,
            started_at: now_millis(),
        }
    }

    /// Mint a fresh session and return its id
    pub fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(Session::new())));
        tracing::debug!(session = %id, "session created");
        id
    }

    /// Look up a session by id
    pub fn session(&self, id: &Uuid) -> AppResult<Arc<Mutex<Session>>> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::new(ErrorCode::SessionNotFound))
    }

    /// Look up a catalog product by id
    pub fn product(&self, id: &str) -> AppResult<Product> {
        self.catalog
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id))
            })
    }
}
