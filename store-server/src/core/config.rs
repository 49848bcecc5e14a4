/// Server configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | Runtime environment |
/// | WHATSAPP_NUMBER | 94779980801 | Sales WhatsApp number (intl, no `+`) |
/// | ADVISOR_API_KEY | (empty) | Gemini API key; empty disables real calls |
/// | ADVISOR_MODEL | gemini-3-flash-preview | Generative model id |
/// | ADVISOR_TIMEOUT_MS | 15000 | Advisory upstream timeout (ms) |
/// | LOG_LEVEL | info | Tracing level filter |
/// | LOG_DIR | (unset) | Daily log file directory, stdout only if unset |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 ADVISOR_API_KEY=... cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Sales WhatsApp number for order deep links
    pub whatsapp_number: String,
    /// Gemini API key for the advisory endpoint
    pub advisor_api_key: String,
    /// Generative model id passed to the advisory upstream
    pub advisor_model: String,
    /// Advisory upstream request timeout (milliseconds)
    pub advisor_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| shared::order::whatsapp::DEFAULT_NUMBER.into()),
            advisor_api_key: std::env::var("ADVISOR_API_KEY").unwrap_or_default(),
            advisor_model: std::env::var("ADVISOR_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".into()),
            advisor_timeout_ms: std::env::var("ADVISOR_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(15_000),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
