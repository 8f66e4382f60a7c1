//! Store configuration
//!
//! A single [`StoreConfig`] is built from process environment once and
//! injected into [`RestStore`](crate::db::RestStore); data access code never
//! reads the environment ad hoc per call.

use std::env;

use crate::db::error::StoreError;

/// Environment variable holding the backend base URL.
pub const ENV_API_URL: &str = "CODEPATH_API_URL";

/// Environment variable holding the backend API key.
pub const ENV_API_KEY: &str = "CODEPATH_API_KEY";

/// Environment variable holding the preferred default roadmap id (optional).
pub const ENV_DEFAULT_ROADMAP: &str = "CODEPATH_DEFAULT_ROADMAP";

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the backend, without the `/rest/v1` suffix.
    pub base_url: String,
    /// API key sent as both `apikey` header and bearer token.
    pub api_key: String,
    /// Roadmap id the UI should preselect, if configured.
    pub default_roadmap_id: Option<String>,
}

impl StoreConfig {
    /// Create a config from explicit values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            default_roadmap_id: None,
        }
    }

    /// Set the preferred default roadmap id.
    pub fn with_default_roadmap(mut self, roadmap_id: impl Into<String>) -> Self {
        self.default_roadmap_id = Some(roadmap_id.into());
        self
    }

    /// Build a config from process environment.
    ///
    /// Requires [`ENV_API_URL`] and [`ENV_API_KEY`]; [`ENV_DEFAULT_ROADMAP`]
    /// is optional. Missing or empty required variables are a
    /// [`StoreError::MissingConfig`], never a panic.
    pub fn from_env() -> Result<Self, StoreError> {
        let base_url = require_var(ENV_API_URL)?;
        let api_key = require_var(ENV_API_KEY)?;
        let default_roadmap_id = env::var(ENV_DEFAULT_ROADMAP)
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            base_url,
            api_key,
            default_roadmap_id,
        })
    }
}

fn require_var(var: &'static str) -> Result<String, StoreError> {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| StoreError::missing_config(var))
}
