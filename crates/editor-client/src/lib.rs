//! REST API client for the editor service.
//!
//! Wraps the editor's HTTP endpoints (document creation, versioning,
//! publishing, history retrieval) using [`reqwest`]. The content service
//! talks to the editor exclusively through this client; cross-service
//! calls stay synchronous request/response, one method per operation.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use velum_core::document::{AppendVersion, CreateDocument, DocumentSnapshot};
use velum_core::types::DocumentId;

/// HTTP client for a single editor service instance.
pub struct EditorClient {
    client: reqwest::Client,
    base_url: String,
}

/// Success envelope used by all editor endpoints.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Errors from the editor client layer.
#[derive(Debug, thiserror::Error)]
pub enum EditorClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The editor returned a non-2xx status code.
    #[error("Editor API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl EditorClient {
    /// Create a new client for an editor instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Probe the editor's root-level health endpoint.
    pub async fn health(&self) -> Result<(), EditorClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Create a new document lineage. `POST /api/v1/documents`.
    pub async fn create(
        &self,
        input: &CreateDocument,
    ) -> Result<DocumentSnapshot, EditorClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/documents", self.base_url))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Append a new version to a lineage.
    /// `POST /api/v1/documents/{id}/versions`.
    pub async fn append_version(
        &self,
        id: DocumentId,
        input: &AppendVersion,
    ) -> Result<DocumentSnapshot, EditorClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/documents/{}/versions", self.base_url, id))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Update the current draft of a lineage. Same optimistic-lock guarded
    /// operation as [`append_version`](Self::append_version), exposed on
    /// `PUT /api/v1/documents/{id}`.
    pub async fn update_draft(
        &self,
        id: DocumentId,
        input: &AppendVersion,
    ) -> Result<DocumentSnapshot, EditorClientError> {
        let response = self
            .client
            .put(format!("{}/api/v1/documents/{}", self.base_url, id))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Publish the current head of a lineage.
    /// `POST /api/v1/documents/{id}/publish`.
    pub async fn publish(&self, id: DocumentId) -> Result<DocumentSnapshot, EditorClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/documents/{}/publish", self.base_url, id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Full version history for a lineage, newest first.
    /// `GET /api/v1/documents/{id}/versions`.
    pub async fn list_versions(
        &self,
        id: DocumentId,
    ) -> Result<Vec<DocumentSnapshot>, EditorClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1/documents/{}/versions", self.base_url, id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// The latest snapshot of every known lineage.
    /// `GET /api/v1/documents`.
    pub async fn list_all_latest(&self) -> Result<Vec<DocumentSnapshot>, EditorClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1/documents", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`EditorClientError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, EditorClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EditorClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Unwrap the `{ "data": ... }` envelope from a success response.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, EditorClientError> {
        let response = Self::ensure_success(response).await?;
        let envelope: DataEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Like [`parse_response`](Self::parse_response) for endpoints whose
    /// body we discard.
    async fn check_status(response: reqwest::Response) -> Result<(), EditorClientError> {
        Self::ensure_success(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_snapshot() {
        let id = uuid::Uuid::new_v4();
        let author = uuid::Uuid::new_v4();
        let json = serde_json::json!({
            "data": {
                "id": id,
                "title": "T",
                "content": "C",
                "creator_id": author,
                "creation_date": "2026-01-01T00:00:00Z",
                "last_updated_date": "2026-01-02T00:00:00Z",
                "last_update_author_id": null,
                "version": 1,
                "is_published": false,
            }
        });

        let envelope: DataEnvelope<DocumentSnapshot> =
            serde_json::from_value(json).expect("envelope should deserialize");
        assert_eq!(envelope.data.id, id);
        assert_eq!(envelope.data.version, 1);
        assert_eq!(envelope.data.last_update_author_id, None);
    }

    #[test]
    fn trailing_slash_trimmed_from_base_url() {
        let client = EditorClient::new("http://localhost:3000/".into());
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
