//! Project routes.

use crate::{
    client::ApiClient,
    error::Result,
    model::{Page, ProjectDraft, ProjectPatch},
    payload::Payload,
};

impl ApiClient {
    /// `GET /projetos`, optionally filtered by status.
    pub async fn list_projects(
        &self,
        status: Option<&str>,
        page: Option<Page>,
    ) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or_default();
        let mut path = format!("/projetos?skip={skip}&limit={limit}");
        if let Some(status) = status {
            path.push_str(&format!("&status={}", urlencoding::encode(status)));
        }
        self.get(&path).await
    }

    /// `GET /projetos/{id}`.
    pub async fn get_project(&self, id: i64) -> Result<Payload> {
        self.get(&format!("/projetos/{id}")).await
    }

    /// `POST /projetos`.
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Payload> {
        self.post("/projetos", draft).await
    }

    /// `PUT /projetos/{id}`.
    pub async fn update_project(&self, id: i64, patch: &ProjectPatch) -> Result<Payload> {
        self.put(&format!("/projetos/{id}"), patch).await
    }

    /// `DELETE /projetos/{id}`.
    pub async fn delete_project(&self, id: i64) -> Result<Payload> {
        self.delete(&format!("/projetos/{id}")).await
    }

    /// `GET /projetos/{id}/tarefas`.
    pub async fn list_project_tasks(&self, project_id: i64) -> Result<Payload> {
        self.get(&format!("/projetos/{project_id}/tarefas")).await
    }

    /// `GET /projetos/{id}/documentos`.
    pub async fn list_project_documents(&self, project_id: i64) -> Result<Payload> {
        self.get(&format!("/projetos/{project_id}/documentos"))
            .await
    }
}
