//! RestStore - RoadmapStore implementation for the hosted backend
//!
//! Queries the backend's PostgREST-style endpoint
//! (`GET {base}/rest/v1/{table}`) with `select`, `eq.` filter, and `order`
//! query parameters. Authentication uses the configured API key as both the
//! `apikey` header and a bearer token, matching the hosted service's
//! anonymous read access to these three collections.
//!
//! All methods surface transport, status, and decode failures as
//! [`StoreError`]; the service layer decides how to degrade.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::db::config::StoreConfig;
use crate::db::error::StoreError;
use crate::db::roadmap_store::RoadmapStore;
use crate::models::{Chapter, NodeRecord, Roadmap};

const TABLE_ROADMAPS: &str = "roadmaps";
const TABLE_CHAPTERS: &str = "chapters";
const TABLE_NODES: &str = "nodes";

/// RoadmapStore backed by the hosted REST endpoint.
pub struct RestStore {
    http: Client,
    config: StoreConfig,
}

impl RestStore {
    /// Create a store from a prepared configuration.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = Client::builder().build().map_err(StoreError::Client)?;
        Ok(Self { http, config })
    }

    /// The collection endpoint for a table.
    fn endpoint(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            table
        )
    }

    /// Run one collection query and decode the row array.
    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &'static str,
        roadmap_id: Option<&str>,
        order: &str,
    ) -> Result<Vec<T>, StoreError> {
        let mut request = self
            .http
            .get(self.endpoint(table))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .query(&[("select", "*"), ("order", order)]);

        if let Some(id) = roadmap_id {
            let filter = eq_filter(id);
            request = request.query(&[("roadmap_id", filter.as_str())]);
        }

        tracing::debug!(table, ?roadmap_id, "querying backend collection");

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::request(table, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::unexpected_status(table, status));
        }

        response.json().await.map_err(|e| StoreError::decode(table, e))
    }
}

#[async_trait]
impl RoadmapStore for RestStore {
    async fn fetch_roadmaps(&self) -> Result<Vec<Roadmap>, StoreError> {
        self.get_rows(TABLE_ROADMAPS, None, "title.asc").await
    }

    async fn fetch_chapters(&self, roadmap_id: &str) -> Result<Vec<Chapter>, StoreError> {
        self.get_rows(TABLE_CHAPTERS, Some(roadmap_id), "num_id.asc")
            .await
    }

    async fn fetch_nodes(&self, roadmap_id: &str) -> Result<Vec<NodeRecord>, StoreError> {
        self.get_rows(TABLE_NODES, Some(roadmap_id), "chapter.asc")
            .await
    }
}

/// PostgREST equality filter value for a column.
fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}
