//! Material catalog routes.

use crate::{
    client::ApiClient,
    error::Result,
    model::{MaterialDraft, MaterialPatch, Page},
    payload::Payload,
};

impl ApiClient {
    /// `GET /materiais`.
    pub async fn list_materials(&self, page: Option<Page>) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or_default();
        self.get(&format!("/materiais?skip={skip}&limit={limit}"))
            .await
    }

    /// `POST /materiais`.
    pub async fn create_material(&self, draft: &MaterialDraft) -> Result<Payload> {
        self.post("/materiais", draft).await
    }

    /// `PUT /materiais/{id}`.
    pub async fn update_material(&self, id: i64, patch: &MaterialPatch) -> Result<Payload> {
        self.put(&format!("/materiais/{id}"), patch).await
    }

    /// `DELETE /materiais/{id}`.
    pub async fn delete_material(&self, id: i64) -> Result<Payload> {
        self.delete(&format!("/materiais/{id}")).await
    }
}
