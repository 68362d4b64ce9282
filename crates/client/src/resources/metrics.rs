//! Dashboard metric routes.

use crate::{client::ApiClient, error::Result, payload::Payload};

impl ApiClient {
    /// `GET /metricas`.
    pub async fn metrics(&self) -> Result<Payload> {
        self.get("/metricas").await
    }

    /// `GET /metricas/timeline`.
    pub async fn metrics_timeline(&self) -> Result<Payload> {
        self.get("/metricas/timeline").await
    }
}
