//! Team routes.

use crate::{
    client::ApiClient,
    error::Result,
    model::{Page, TeamMemberDraft},
    payload::Payload,
};

impl ApiClient {
    /// `GET /equipes`.
    pub async fn list_teams(&self, page: Option<Page>) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or_default();
        self.get(&format!("/equipes?skip={skip}&limit={limit}")).await
    }

    /// `GET /equipes/{id}`.
    pub async fn get_team(&self, id: i64) -> Result<Payload> {
        self.get(&format!("/equipes/{id}")).await
    }

    /// `POST /equipes/{id}/members`.
    pub async fn add_team_member(
        &self,
        team_id: i64,
        member: &TeamMemberDraft,
    ) -> Result<Payload> {
        self.post(&format!("/equipes/{team_id}/members"), member)
            .await
    }

    /// `DELETE /equipes/{id}/members/{usuario_id}`.
    pub async fn remove_team_member(&self, team_id: i64, user_id: i64) -> Result<Payload> {
        self.delete(&format!("/equipes/{team_id}/members/{user_id}"))
            .await
    }
}
