// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source control operations over a working tree.
//!
//! Each operation is a fixed sequence of `git` invocations against a given
//! directory. Failures are not caught here; they propagate to the
//! orchestrator, which treats them as fatal for the whole run. The working
//! tree is not protected against concurrent use; callers serialize.

use std::path::{Path, PathBuf};

use bp_exec::{ExecError, Invocation};

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git {op} failed: {source}")]
    Command {
        op: &'static str,
        #[source]
        source: ExecError,
    },

    #[error("failed to write patch file {}: {source}", .path.display())]
    PatchWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Materialize `repo_url` as a subdirectory of `parent_dir`.
pub async fn clone(repo_url: &str, parent_dir: &Path) -> Result<(), GitError> {
    git(parent_dir, "clone", ["clone", repo_url]).await?;
    Ok(())
}

/// Discard local modifications and untracked files, then fast-forward to the
/// remote's latest default branch state.
///
/// Used to reuse an already-cloned tree across runs instead of re-cloning:
/// faster, at the cost of assuming `origin/main` is always the wanted
/// baseline.
pub async fn reset_and_update(tree: &Path) -> Result<(), GitError> {
    git(tree, "checkout", ["checkout", "."]).await?;
    git(tree, "clean", ["clean", "-f"]).await?;
    git(tree, "pull", ["pull", "origin", "main"]).await?;
    Ok(())
}

/// Apply a unified diff to the tree.
///
/// The patch text is written to a uniquely named file inside the tree so
/// `git apply` resolves it without path games; the file is removed on every
/// exit path, including apply failure.
pub async fn apply_patch(patch: &str, tree: &Path) -> Result<(), GitError> {
    let file_name = format!("{}.patch", uuid::Uuid::new_v4().simple());
    let patch_file = ScopedFile::new(tree.join(&file_name));

    tokio::fs::write(&patch_file.path, patch).await.map_err(|source| {
        GitError::PatchWrite { path: patch_file.path.clone(), source }
    })?;

    git(tree, "apply", ["apply", &file_name]).await?;
    Ok(())
}

async fn git<const N: usize>(
    dir: &Path,
    op: &'static str,
    args: [&str; N],
) -> Result<String, GitError> {
    bp_exec::run(Invocation::new("git").args(args).current_dir(dir))
        .await
        .map_err(|source| GitError::Command { op, source })
}

/// File deleted when the guard goes out of scope.
struct ScopedFile {
    path: PathBuf,
}

impl ScopedFile {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for ScopedFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
