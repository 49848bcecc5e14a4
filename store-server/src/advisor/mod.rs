//! AI advisory collaborator
//!
//! The advisory feature is strictly bounded: it produces text and
//! citations, never touches the catalog, cart, or pricing, and every
//! upstream failure degrades to a fixed apology string.
//!
//! - [`AdvisorClient`] - upstream abstraction (stubbed in tests)
//! - [`GeminiAdvisor`] - production Gemini REST implementation
//! - [`AdvisorGate`] - per-session request sequencing

mod gate;
mod gemini;

pub use gate::{AdvisorGate, AdvisorTicket};
pub use gemini::GeminiAdvisor;

use serde::{Deserialize, Serialize};
use shared::error::AppResult;

/// Shown whenever the upstream fails, times out, or is unconfigured
pub const FALLBACK_TEXT: &str =
    "I'm having trouble searching the web right now. Please try again or contact our sales team.";

/// A web source the advisory answer was grounded on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

/// An advisory answer: free text plus grounding citations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorAnswer {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl AdvisorAnswer {
    /// The degraded answer used on any upstream failure
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_string(),
            citations: Vec::new(),
        }
    }
}

/// Advisory upstream abstraction
#[async_trait::async_trait]
pub trait AdvisorClient: Send + Sync {
    /// Ask the upstream for a recommendation. Callers are expected to map
    /// errors to [`AdvisorAnswer::fallback`] rather than surface them.
    async fn ask(&self, prompt: &str) -> AppResult<AdvisorAnswer>;
}
