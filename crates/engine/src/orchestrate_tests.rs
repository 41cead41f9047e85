// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output location and slot isolation tests over temp directory fixtures.
//! The full pipeline (clone, both builds, both slots) is covered by the
//! workspace specs against stub tooling.

use super::*;

/// Tree with `artifacts/tests/coreclr/<dirs...>` and a populated `Core_Root`
/// under the first dir.
fn tree_with_outputs(root: &Path, dirs: &[&str]) -> PathBuf {
    let tree = root.join("tree");
    let coreclr = tree.join("artifacts").join("tests").join("coreclr");
    for dir in dirs {
        std::fs::create_dir_all(coreclr.join(dir)).unwrap();
    }
    if let Some(first) = dirs.first() {
        let core_root = coreclr.join(first).join("Tests").join("Core_Root");
        std::fs::create_dir_all(&core_root).unwrap();
        std::fs::write(core_root.join("corerun"), "").unwrap();
    }
    tree
}

#[test]
fn locate_finds_the_single_release_output() {
    let temp = tempfile::tempdir().unwrap();
    let tree = tree_with_outputs(temp.path(), &["linux.x64.Release", "obj"]);

    let layout = OutputLayout::locate(&tree).unwrap();

    assert!(layout.core_root.ends_with("linux.x64.Release/Tests/Core_Root"));
    assert!(layout.slot(Side::Base).ends_with("linux.x64.Release/Tests/Main"));
    assert!(layout.slot(Side::Diff).ends_with("linux.x64.Release/Tests/PR"));
}

#[test]
fn locate_fails_when_nothing_matches() {
    let temp = tempfile::tempdir().unwrap();
    let tree = tree_with_outputs(temp.path(), &["linux.x64.Debug"]);

    let err = OutputLayout::locate(&tree).unwrap_err();
    assert!(matches!(err, OrchestrateError::MissingCanonicalOutput { .. }), "got: {err:?}");
}

#[test]
fn locate_fails_when_the_results_area_is_absent() {
    let temp = tempfile::tempdir().unwrap();
    let err = OutputLayout::locate(&temp.path().join("tree")).unwrap_err();
    assert!(matches!(err, OrchestrateError::MissingCanonicalOutput { .. }), "got: {err:?}");
}

#[test]
fn locate_rejects_ambiguous_outputs() {
    let temp = tempfile::tempdir().unwrap();
    let tree = tree_with_outputs(temp.path(), &["linux.x64.Release", "linux.arm64.Release"]);

    let err = OutputLayout::locate(&tree).unwrap_err();
    match err {
        OrchestrateError::AmbiguousCanonicalOutput { count, .. } => assert_eq!(count, 2),
        other => panic!("expected AmbiguousCanonicalOutput, got: {other:?}"),
    }
}

#[test]
fn stale_slots_are_fully_removed_before_isolation() {
    let temp = tempfile::tempdir().unwrap();
    let tree = tree_with_outputs(temp.path(), &["linux.x64.Release"]);
    let layout = OutputLayout::locate(&tree).unwrap();

    // Leftovers from a previous run.
    for side in Side::ALL {
        let stale = layout.slot(side);
        std::fs::create_dir_all(&stale).unwrap();
        std::fs::write(stale.join("leftover.txt"), "old").unwrap();
    }

    layout.clear_slots().unwrap();
    layout.isolate(Side::Base).unwrap();

    let main_slot = layout.slot(Side::Base);
    assert!(main_slot.join("corerun").exists(), "fresh output moved into Main");
    assert!(!main_slot.join("leftover.txt").exists(), "no leftover from the prior run");
    assert!(!layout.slot(Side::Diff).exists(), "stale PR slot removed, not yet recreated");
    assert!(!layout.core_root.exists(), "canonical location evacuated");
}

#[test]
fn both_sides_isolate_into_distinct_slots() {
    let temp = tempfile::tempdir().unwrap();
    let tree = tree_with_outputs(temp.path(), &["linux.x64.Release"]);
    let layout = OutputLayout::locate(&tree).unwrap();

    layout.clear_slots().unwrap();
    layout.isolate(Side::Base).unwrap();

    // The second build writes the canonical location again.
    std::fs::create_dir_all(&layout.core_root).unwrap();
    std::fs::write(layout.core_root.join("corerun"), "").unwrap();
    layout.isolate(Side::Diff).unwrap();

    assert!(layout.slot(Side::Base).join("corerun").exists());
    assert!(layout.slot(Side::Diff).join("corerun").exists());
    assert_ne!(layout.slot(Side::Base), layout.slot(Side::Diff));
}

#[test]
fn isolating_without_an_output_is_a_relocate_error() {
    let temp = tempfile::tempdir().unwrap();
    let tree = tree_with_outputs(temp.path(), &["linux.x64.Release"]);
    let layout = OutputLayout::locate(&tree).unwrap();

    layout.isolate(Side::Base).unwrap();
    // Core_Root is gone now; a second isolation has nothing to move.
    let err = layout.isolate(Side::Diff).unwrap_err();
    assert!(matches!(err, OrchestrateError::Relocate { .. }), "got: {err:?}");
}
