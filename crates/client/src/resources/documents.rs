//! Document routes, including the one multipart upload in the contract.

use crate::{client::ApiClient, error::Result, model::Page, payload::Payload};

impl ApiClient {
    /// `GET /documentos`.
    pub async fn list_documents(&self, page: Option<Page>) -> Result<Payload> {
        let Page { skip, limit } = page.unwrap_or_default();
        self.get(&format!("/documentos?skip={skip}&limit={limit}"))
            .await
    }

    /// `POST /documentos/{projeto_id}/upload` with a multipart body.
    pub async fn upload_document(
        &self,
        project_id: i64,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Payload> {
        self.upload_file(&format!("/documentos/{project_id}/upload"), file_name, bytes)
            .await
    }

    /// `DELETE /documentos/{id}`.
    pub async fn delete_document(&self, id: i64) -> Result<Payload> {
        self.delete(&format!("/documentos/{id}")).await
    }

    /// Absolute URL for `GET /documentos/{id}/download`.
    ///
    /// Downloads are handed to an external agent (browser, curl), so this
    /// builds the URL without performing a request.
    pub fn download_url(&self, id: i64) -> String {
        format!("{}/documentos/{id}/download", self.base_url())
    }
}
