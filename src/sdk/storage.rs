//! Image upload to an HTTP storage gateway.
//!
//! The contract is the minimal one the NFT scripts need: POST the bytes,
//! read the hosted URI out of the JSON response.

use super::error::LabError;

/// Environment variable naming the upload endpoint.
pub const UPLOAD_URL_ENV: &str = "STORAGE_UPLOAD_URL";

pub struct StorageClient {
    endpoint: String,
    http: reqwest::Client,
}

impl StorageClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Endpoint from `STORAGE_UPLOAD_URL`.
    pub fn from_env() -> Result<Self, LabError> {
        let endpoint = std::env::var(UPLOAD_URL_ENV)
            .map_err(|_| LabError::InvalidConfig(format!("{UPLOAD_URL_ENV} not set")))?;
        Ok(Self::new(endpoint))
    }

    /// Upload raw bytes; returns the hosted URI from the `uri` field of
    /// the JSON response.
    pub async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, LabError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| LabError::Storage(format!("upload request: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LabError::Storage(format!("upload failed: HTTP {status}")));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| LabError::Storage(format!("upload response: {e}")))?;
        body.get("uri")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| LabError::Storage("upload response missing uri".into()))
    }
}
