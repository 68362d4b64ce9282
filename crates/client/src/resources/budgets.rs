//! Budget routes.

use crate::{
    client::ApiClient,
    error::Result,
    model::{BudgetDraft, BudgetPatch, Page},
    payload::Payload,
};

impl ApiClient {
    /// `GET /orcamentos`.
    pub async fn list_budgets(&self, page: Option<Page>) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or_default();
        self.get(&format!("/orcamentos?skip={skip}&limit={limit}"))
            .await
    }

    /// `POST /orcamentos`.
    pub async fn create_budget(&self, draft: &BudgetDraft) -> Result<Payload> {
        self.post("/orcamentos", draft).await
    }

    /// `PUT /orcamentos/{id}`.
    pub async fn update_budget(&self, id: i64, patch: &BudgetPatch) -> Result<Payload> {
        self.put(&format!("/orcamentos/{id}"), patch).await
    }

    /// `DELETE /orcamentos/{id}`.
    pub async fn delete_budget(&self, id: i64) -> Result<Payload> {
        self.delete(&format!("/orcamentos/{id}")).await
    }
}
