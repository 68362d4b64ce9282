//! Liveness probe.

use reqwest::Method;

use crate::{
    client::{ApiClient, RequestOptions},
    error::Result,
    payload::Payload,
};

impl ApiClient {
    /// `GET /health`. Unauthenticated; useful before login.
    pub async fn health(&self) -> Result<Payload> {
        self.request(
            Method::GET,
            "/health",
            None,
            RequestOptions { skip_auth: true },
        )
        .await
    }
}
