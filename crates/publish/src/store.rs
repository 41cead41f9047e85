// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Object storage boundary.
//!
//! The pipeline only ever needs one operation from storage: put these bytes
//! under this name, give back a public URL. The concrete implementation PUTs
//! into a pre-authorized (SAS-style) blob container URL.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("upload of `{name}` failed: {source}")]
    Upload {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upload of `{name}` rejected with status {status}")]
    Rejected { name: String, status: reqwest::StatusCode },
}

/// Upload bytes, get a public URL back.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, StoreError>;
}

/// Blob container addressed by a pre-authorized URL.
///
/// The container URL may carry a query string (a SAS token); object URLs
/// splice the blob name in front of it, and the returned public link has the
/// token stripped.
pub struct BlobContainerStore {
    container_url: String,
    client: reqwest::Client,
}

impl BlobContainerStore {
    pub fn new(container_url: impl Into<String>) -> Self {
        Self { container_url: container_url.into(), client: reqwest::Client::new() }
    }

    /// Full (authorized) URL of `name` inside the container.
    fn object_url(&self, name: &str) -> String {
        match self.container_url.split_once('?') {
            Some((base, query)) => {
                format!("{}/{name}?{query}", base.trim_end_matches('/'))
            }
            None => format!("{}/{name}", self.container_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ObjectStore for BlobContainerStore {
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, StoreError> {
        let url = self.object_url(name);
        tracing::debug!(name, size = bytes.len(), "uploading artifact");

        let response = self
            .client
            .put(&url)
            .header("x-ms-blob-type", "BlockBlob")
            .header(reqwest::header::CONTENT_TYPE, content_type_for(name))
            .body(bytes)
            .send()
            .await
            .map_err(|source| StoreError::Upload { name: name.to_string(), source })?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected { name: name.to_string(), status: response.status() });
        }

        // Public link, without the authorization query.
        let public = url.split('?').next().unwrap_or(&url).to_string();
        Ok(public)
    }
}

/// Content type inferred from the file extension.
pub fn content_type_for(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "zip" => "application/zip",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        _ => "text/plain",
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
