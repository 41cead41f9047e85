// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker boundary.
//!
//! Two operations: turn a large text artifact into a shareable paste, and
//! post a comment on an issue. The GitHub implementation uses gists for
//! pastes and the issues API for comments, authenticated with the app's
//! token.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("{op} request failed: {source}")]
    Request {
        op: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{op} rejected with status {status}")]
    Rejected { op: &'static str, status: reqwest::StatusCode },

    #[error("{op} response is missing `{field}`")]
    MalformedResponse { op: &'static str, field: &'static str },
}

/// Paste large text, comment on issues.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Store `content` as a shareable snippet, returning its URL.
    async fn create_paste(&self, file_name: &str, content: &str) -> Result<String, TrackerError>;

    /// Post `body` as a comment on the given issue.
    async fn post_comment(&self, issue: u64, body: &str) -> Result<(), TrackerError>;
}

/// GitHub-backed tracker: gists as pastes, issue comments for publishing.
pub struct GithubTracker {
    app_name: String,
    token: String,
    owner: String,
    repo: String,
    api_base: String,
    client: reqwest::Client,
}

impl GithubTracker {
    pub fn new(
        app_name: impl Into<String>,
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
            api_base: "https://api.github.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, url: String, body: serde_json::Value) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, &self.app_name)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&body)
    }
}

#[async_trait]
impl IssueTracker for GithubTracker {
    async fn create_paste(&self, file_name: &str, content: &str) -> Result<String, TrackerError> {
        const OP: &str = "create paste";
        let body = serde_json::json!({
            "description": format!("{} artifact", self.app_name),
            "public": false,
            "files": { file_name: { "content": content } },
        });

        let response = self
            .request(format!("{}/gists", self.api_base), body)
            .send()
            .await
            .map_err(|source| TrackerError::Request { op: OP, source })?;
        if !response.status().is_success() {
            return Err(TrackerError::Rejected { op: OP, status: response.status() });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|source| TrackerError::Request { op: OP, source })?;
        payload["html_url"]
            .as_str()
            .map(str::to_string)
            .ok_or(TrackerError::MalformedResponse { op: OP, field: "html_url" })
    }

    async fn post_comment(&self, issue: u64, body: &str) -> Result<(), TrackerError> {
        const OP: &str = "post comment";
        let url = format!(
            "{}/repos/{}/{}/issues/{issue}/comments",
            self.api_base, self.owner, self.repo
        );

        let response = self
            .request(url, serde_json::json!({ "body": body }))
            .send()
            .await
            .map_err(|source| TrackerError::Request { op: OP, source })?;
        if !response.status().is_success() {
            return Err(TrackerError::Rejected { op: OP, status: response.status() });
        }
        Ok(())
    }
}
