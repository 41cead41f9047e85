// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store and tracker for tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::store::{ObjectStore, StoreError};
use crate::tracker::{IssueTracker, TrackerError};

/// Records uploads; returns deterministic URLs.
#[derive(Default)]
pub struct FakeStore {
    pub uploads: Mutex<Vec<(String, usize)>>,
    pub fail: bool,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads.lock().iter().map(|(name, _)| name.clone()).collect()
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, StoreError> {
        if self.fail {
            return Err(StoreError::Rejected {
                name: name.to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        self.uploads.lock().push((name.to_string(), bytes.len()));
        Ok(format!("https://store.invalid/{name}"))
    }
}

/// Records pastes and comments; optionally refuses comments.
#[derive(Default)]
pub struct FakeTracker {
    pub pastes: Mutex<Vec<(String, String)>>,
    pub comments: Mutex<Vec<(u64, String)>>,
    pub fail_comments: bool,
}

impl FakeTracker {
    pub fn refusing_comments() -> Self {
        Self { fail_comments: true, ..Self::default() }
    }

    pub fn posted_bodies(&self) -> Vec<String> {
        self.comments.lock().iter().map(|(_, body)| body.clone()).collect()
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn create_paste(&self, file_name: &str, content: &str) -> Result<String, TrackerError> {
        self.pastes.lock().push((file_name.to_string(), content.to_string()));
        Ok(format!("https://paste.invalid/{file_name}"))
    }

    async fn post_comment(&self, issue: u64, body: &str) -> Result<(), TrackerError> {
        if self.fail_comments {
            return Err(TrackerError::Rejected {
                op: "post comment",
                status: reqwest::StatusCode::FORBIDDEN,
            });
        }
        self.comments.lock().push((issue, body.to_string()));
        Ok(())
    }
}
