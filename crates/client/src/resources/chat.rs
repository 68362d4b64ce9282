//! Per-project chat routes.

use serde_json::json;

use crate::{client::ApiClient, error::Result, model::Page, payload::Payload};

impl ApiClient {
    /// `POST /chat/{projeto_id}/messages`.
    pub async fn send_message(&self, project_id: i64, conteudo: &str) -> Result<Payload> {
        self.post(
            &format!("/chat/{project_id}/messages"),
            &json!({"conteudo": conteudo}),
        )
        .await
    }

    /// `GET /chat/{projeto_id}/messages`. The default window here is 50
    /// messages, not the 100 used by the other listings.
    pub async fn list_messages(&self, project_id: i64, page: Option<Page>) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or(Page::new(0, 50));
        self.get(&format!(
            "/chat/{project_id}/messages?skip={skip}&limit={limit}"
        ))
        .await
    }
}
