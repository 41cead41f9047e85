// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The publish step.

use std::path::Path;

use bp_core::Side;

use crate::archive;
use crate::artifacts;
use crate::comment::{self, CommentInput, SideLinks};
use crate::store::ObjectStore;
use crate::tracker::IssueTracker;

/// Publishes one run's results to the issue tracker.
///
/// This layer never fails the run: optional artifacts that cannot be
/// packaged or uploaded degrade to placeholders, and a failure to reach the
/// tracker itself is logged, not raised and not retried.
pub struct Publisher<'a> {
    store: &'a dyn ObjectStore,
    tracker: &'a dyn IssueTracker,
}

impl<'a> Publisher<'a> {
    pub fn new(store: &'a dyn ObjectStore, tracker: &'a dyn IssueTracker) -> Self {
        Self { store, tracker }
    }

    /// Upload everything worth linking, then post the comparison comment.
    pub async fn publish(&self, issue: u64, results_dir: &Path, results_md: &str, asm_md: &str) {
        let mut input =
            CommentInput { results_md: results_md.to_string(), ..CommentInput::default() };

        input.archive_url = self.upload_archive(issue, results_dir).await;

        for side in Side::ALL {
            let links = self.upload_side_files(issue, results_dir, side).await;
            if !links.is_empty() {
                input.side_links.push(SideLinks { side, links });
            }
        }

        if !asm_md.trim().is_empty() {
            match self.tracker.create_paste("disassembly.md", asm_md).await {
                Ok(url) => input.asm_paste_url = Some(url),
                Err(err) => tracing::warn!(error = %err, "disassembly paste failed"),
            }
        }

        let body = comment::format_comment(&input);
        match self.tracker.post_comment(issue, &body).await {
            Ok(()) => tracing::info!(issue, "benchmark comment posted"),
            Err(err) => tracing::error!(error = %err, issue, "failed to post benchmark comment"),
        }
    }

    async fn upload_archive(&self, issue: u64, results_dir: &Path) -> Option<String> {
        let bytes = match archive::zip_dir(results_dir) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(error = %err, "artifact archive packaging failed");
                return None;
            }
        };
        match self.store.upload(&format!("bench-artifacts-{issue}.zip"), bytes).await {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(error = %err, "artifact archive upload failed");
                None
            }
        }
    }

    async fn upload_side_files(
        &self,
        issue: u64,
        results_dir: &Path,
        side: Side,
    ) -> Vec<(String, String)> {
        let found = artifacts::discover(results_dir, side);
        let mut links = Vec::new();

        for path in found.flame_graphs.iter().chain(found.hot_functions.iter()) {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let bytes = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(error = %err, path = %path.display(), "artifact unreadable");
                    continue;
                }
            };
            match self.store.upload(&format!("{issue}-{name}"), bytes).await {
                Ok(url) => links.push((name.to_string(), url)),
                Err(err) => {
                    tracing::warn!(error = %err, name, "artifact upload failed");
                }
            }
        }
        links
    }
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
