// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dual-build pipeline specs.

use crate::prelude::*;

use bp_engine::orchestrate::{self, OrchestrateError};
use bp_engine::GitError;

#[tokio::test]
async fn fresh_clone_yields_two_distinct_suffixed_executables() {
    let project = StubProject::new().await;

    let dual = orchestrate::run(&project.config, ADD_FILE_PATCH, &quiet).await.unwrap();

    assert!(dual.base_exe.exists(), "baseline executable missing: {:?}", dual.base_exe);
    assert!(dual.diff_exe.exists(), "patched executable missing: {:?}", dual.diff_exe);
    assert_ne!(dual.base_exe, dual.diff_exe);
    assert!(dual.base_exe.ends_with("Main/corerun"));
    assert!(dual.diff_exe.ends_with("PR/corerun"));
    // The patch really was applied between the two builds.
    assert!(project.tree().join("added.txt").exists());
}

#[tokio::test]
async fn second_run_reuses_the_tree_and_recreates_slots() {
    let project = StubProject::new().await;

    let first = orchestrate::run(&project.config, ADD_FILE_PATCH, &quiet).await.unwrap();

    // Leftovers planted in both slots must not survive into the next run.
    for exe in [&first.base_exe, &first.diff_exe] {
        let slot = exe.parent().unwrap();
        std::fs::write(slot.join("leftover.txt"), "run N").unwrap();
    }

    let second = orchestrate::run(&project.config, ADD_FILE_PATCH, &quiet).await.unwrap();

    for exe in [&second.base_exe, &second.diff_exe] {
        let slot = exe.parent().unwrap();
        assert!(exe.exists());
        assert!(
            !slot.join("leftover.txt").exists(),
            "slot {slot:?} must be recreated, not appended to"
        );
    }
}

#[tokio::test]
async fn patch_failure_aborts_with_main_isolated_and_no_pr() {
    let project = StubProject::new().await;

    let err = orchestrate::run(&project.config, "not a diff at all\n", &quiet)
        .await
        .unwrap_err();
    assert!(
        matches!(err, OrchestrateError::Git(GitError::Command { op: "apply", .. })),
        "got: {err:?}"
    );

    // Partial-failure state: the baseline slot was isolated and stays on
    // disk, the patched slot never came to be, and no result was returned.
    let tests_dir = project
        .tree()
        .join("artifacts/tests/coreclr/stub.x64.Release/Tests");
    assert!(tests_dir.join("Main").join("corerun").exists());
    assert!(!tests_dir.join("PR").exists());
    assert!(!tests_dir.join("Core_Root").exists(), "canonical location was evacuated");
}

#[tokio::test]
async fn a_build_that_produces_nothing_is_a_structural_failure() {
    // The build script "succeeds" without producing any output directory.
    let project = StubProject::with_build_script("exit 0\n").await;

    let err = orchestrate::run(&project.config, ADD_FILE_PATCH, &quiet).await.unwrap_err();

    assert!(
        matches!(err, OrchestrateError::MissingCanonicalOutput { .. }),
        "got: {err:?}"
    );
}
