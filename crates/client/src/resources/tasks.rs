//! Task routes.

use crate::{
    client::ApiClient,
    error::Result,
    model::{Page, TaskDraft, TaskPatch},
    payload::Payload,
};

impl ApiClient {
    /// `GET /tarefas`, optionally filtered by status.
    pub async fn list_tasks(&self, status: Option<&str>, page: Option<Page>) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or_default();
        let mut path = format!("/tarefas?skip={skip}&limit={limit}");
        if let Some(status) = status {
            path.push_str(&format!("&status={}", urlencoding::encode(status)));
        }
        self.get(&path).await
    }

    /// `GET /tarefas/{id}`.
    pub async fn get_task(&self, id: i64) -> Result<Payload> {
        self.get(&format!("/tarefas/{id}")).await
    }

    /// `POST /tarefas`.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Payload> {
        self.post("/tarefas", draft).await
    }

    /// `PUT /tarefas/{id}`.
    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Payload> {
        self.put(&format!("/tarefas/{id}"), patch).await
    }

    /// `DELETE /tarefas/{id}`.
    pub async fn delete_task(&self, id: i64) -> Result<Payload> {
        self.delete(&format!("/tarefas/{id}")).await
    }
}
