//! Smart Solutions Lanka - storefront HTTP server
//!
//! Thin axum facade over the pure domain core in `shared`:
//!
//! - **core**: configuration, shared state, server lifecycle
//! - **api**: HTTP routes and handlers (one module per resource)
//! - **advisor**: AI advisory upstream client and per-session sequencing
//! - **utils**: logging setup
//!
//! ```text
//! store-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── advisor/       # advisory client + sequencing gate
//! └── utils/         # logger
//! ```

pub mod advisor;
pub mod api;
pub mod core;
pub mod utils;

pub use advisor::{AdvisorAnswer, AdvisorClient, AdvisorGate, GeminiAdvisor};
pub use core::{Config, Server, ServerState, Session};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging. Call once, before anything logs.
pub fn setup_environment() -> anyhow::Result<()> {
    // Missing .env is fine; env vars may come from the shell
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____                      __
  / ___/____ ___  ____ ______/ /_
  \__ \/ __ `__ \/ __ `/ ___/ __/
 ___/ / / / / / / /_/ / /  / /_
/____/_/ /_/ /_/\__,_/_/   \__/
   _____       __      __  _
  / ___/____  / /_  __/ /_(_)___  ____  _____
  \__ \/ __ \/ / / / / __/ / __ \/ __ \/ ___/
 ___/ / /_/ / / /_/ / /_/ / /_/ / / / (__  )
/____/\____/_/\__,_/\__/_/\____/_/ /_/____/
    "#
    );
}
