// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.
//!
//! Credentials and publish targets come from the environment so they stay
//! out of argv. This is the only module that reads ambient state; everything
//! below the CLI works from the explicit [`bp_core::Config`].

/// Token used for pastes and issue comments.
pub fn github_token() -> Option<String> {
    std::env::var("BP_GITHUB_TOKEN").ok().filter(|s| !s.is_empty())
}

/// Pre-authorized blob container URL artifacts are uploaded into.
pub fn blob_container() -> Option<String> {
    std::env::var("BP_BLOB_CONTAINER").ok().filter(|s| !s.is_empty())
}

/// Repository the issue lives in, as `owner/name`.
pub fn github_repo() -> (String, String) {
    std::env::var("BP_GITHUB_REPO")
        .ok()
        .and_then(|value| {
            value.split_once('/').map(|(owner, repo)| (owner.to_string(), repo.to_string()))
        })
        .unwrap_or_else(|| ("dotnet".to_string(), "runtime".to_string()))
}
