// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Patch retrieval.

use anyhow::Context;

/// Fetch the unified diff from `url`.
///
/// An empty or whitespace-only body is a fatal input error; there is
/// nothing to build a "PR" side from.
pub async fn fetch(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let text = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("fetching patch from {url}"))?
        .text()
        .await
        .with_context(|| format!("reading patch body from {url}"))?;

    ensure_not_blank(&text)?;
    Ok(text)
}

/// Reject a patch with no content.
pub fn ensure_not_blank(patch: &str) -> anyhow::Result<()> {
    anyhow::ensure!(!patch.trim().is_empty(), "fetched patch is empty");
    Ok(())
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
