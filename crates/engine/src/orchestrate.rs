// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dual-build orchestrator.
//!
//! One run, strictly sequential: acquire the tree, build the baseline, move
//! its output into the `Main` slot, apply the patch, build again, move that
//! output into the `PR` slot, return both executables. The build tooling
//! always writes to one canonical location, so each isolation step must
//! complete before the next build starts; the [`PhaseTracker`] makes that
//! ordering a checked transition instead of a convention.
//!
//! There is no partial success here: the caller gets both paths or an error.
//! (On a failure after baseline isolation the `Main` slot is left on disk
//! for postmortems, but never returned.)

use std::path::{Path, PathBuf};

use bp_core::{Config, Side};

use crate::build::{self, BuildError, Platform};
use crate::git::{self, GitError};
use crate::phase::{IllegalTransition, Phase, PhaseTracker};

/// Suffix of the one canonical build output directory.
const CONFIG_SUFFIX: &str = ".Release";

/// Name of the runnable the build produces inside its output directory.
const RUNNER_NAME: &str = "corerun";

/// The two executables a successful run yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualBuild {
    /// Baseline ("Main") executable.
    pub base_exe: PathBuf,
    /// Patched ("PR") executable.
    pub diff_exe: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestrateError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Phase(#[from] IllegalTransition),

    #[error("no build output under {} ends with `{suffix}`", .dir.display())]
    MissingCanonicalOutput { dir: PathBuf, suffix: &'static str },

    #[error("{count} build outputs under {} end with `{suffix}`, expected exactly one", .dir.display())]
    AmbiguousCanonicalOutput { dir: PathBuf, suffix: &'static str, count: usize },

    #[error("failed to prepare {}: {source}", .dir.display())]
    Workspace {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move build output {} -> {}: {source}", .from.display(), .to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run the full dual build.
///
/// `progress` receives per-stage build timing lines (a side channel; see
/// [`build::build`]).
pub async fn run<F>(
    config: &Config,
    patch: &str,
    progress: &F,
) -> Result<DualBuild, OrchestrateError>
where
    F: Fn(&str) + Sync,
{
    let mut phase = PhaseTracker::new();
    match run_inner(config, patch, progress, &mut phase).await {
        Ok(dual) => Ok(dual),
        Err(err) => {
            if !phase.current().is_terminal() {
                let _ = phase.advance(Phase::Failed);
            }
            Err(err)
        }
    }
}

async fn run_inner<F>(
    config: &Config,
    patch: &str,
    progress: &F,
    phase: &mut PhaseTracker,
) -> Result<DualBuild, OrchestrateError>
where
    F: Fn(&str) + Sync,
{
    let platform = Platform::host();
    let tree = config.tree_path();

    // Acquire: a directory-existence check, not a flag.
    if tree.is_dir() {
        tracing::info!(tree = %tree.display(), "reusing existing tree");
        git::reset_and_update(&tree).await?;
    } else {
        std::fs::create_dir_all(&config.work_dir).map_err(|source| {
            OrchestrateError::Workspace { dir: config.work_dir.clone(), source }
        })?;
        tracing::info!(url = %config.repo_url, "cloning fresh tree");
        git::clone(&config.repo_url, &config.work_dir).await?;
    }

    phase.advance(Phase::BuildingBaseline)?;
    build::build(&tree, platform, config.build_timeout, progress).await?;

    phase.advance(Phase::IsolatingBaseline)?;
    let layout = OutputLayout::locate(&tree)?;
    layout.clear_slots()?;
    layout.isolate(Side::Base)?;

    phase.advance(Phase::Patching)?;
    git::apply_patch(patch, &tree).await?;

    phase.advance(Phase::BuildingPatched)?;
    build::build(&tree, platform, config.build_timeout, progress).await?;

    phase.advance(Phase::IsolatingPatched)?;
    layout.isolate(Side::Diff)?;

    phase.advance(Phase::Done)?;
    let runner = platform.exe(RUNNER_NAME);
    Ok(DualBuild {
        base_exe: layout.slot(Side::Base).join(&runner),
        diff_exe: layout.slot(Side::Diff).join(&runner),
    })
}

/// Where the build put its output, and where the stable slots live.
#[derive(Debug)]
struct OutputLayout {
    /// Parent of the canonical output and of both slots.
    tests_dir: PathBuf,
    /// The canonical location every build writes to.
    core_root: PathBuf,
}

impl OutputLayout {
    /// Locate the canonical output: the single directory under
    /// `artifacts/tests/coreclr` carrying the expected configuration suffix.
    fn locate(tree: &Path) -> Result<Self, OrchestrateError> {
        let coreclr = tree.join("artifacts").join("tests").join("coreclr");
        let dir = single_dir_with_suffix(&coreclr, CONFIG_SUFFIX)?;
        let tests_dir = dir.join("Tests");
        Ok(Self { core_root: tests_dir.join("Core_Root"), tests_dir })
    }

    fn slot(&self, side: Side) -> PathBuf {
        self.tests_dir.join(side.label())
    }

    /// Delete stale slots from a prior run. Nothing accumulates across runs.
    fn clear_slots(&self) -> Result<(), OrchestrateError> {
        for side in Side::ALL {
            let slot = self.slot(side);
            if slot.exists() {
                tracing::debug!(slot = %slot.display(), "removing stale slot");
                std::fs::remove_dir_all(&slot)
                    .map_err(|source| OrchestrateError::Workspace { dir: slot.clone(), source })?;
            }
        }
        Ok(())
    }

    /// Evacuate the canonical output into the side's stable slot.
    fn isolate(&self, side: Side) -> Result<(), OrchestrateError> {
        let slot = self.slot(side);
        std::fs::rename(&self.core_root, &slot).map_err(|source| OrchestrateError::Relocate {
            from: self.core_root.clone(),
            to: slot,
            source,
        })
    }
}

fn single_dir_with_suffix(dir: &Path, suffix: &'static str) -> Result<PathBuf, OrchestrateError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Err(OrchestrateError::MissingCanonicalOutput { dir: dir.to_path_buf(), suffix }),
    };

    let matches: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(suffix))
        })
        .collect();

    match matches.len() {
        0 => Err(OrchestrateError::MissingCanonicalOutput { dir: dir.to_path_buf(), suffix }),
        1 => Ok(matches.into_iter().next().unwrap_or_default()),
        count => Err(OrchestrateError::AmbiguousCanonicalOutput {
            dir: dir.to_path_buf(),
            suffix,
            count,
        }),
    }
}

#[cfg(test)]
#[path = "orchestrate_tests.rs"]
mod tests;
