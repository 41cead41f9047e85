// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor contract specs (the chokepoint every pipeline step runs through).

use std::time::Duration;

use bp_exec::{run, ExecError, Invocation};
use tokio::time::Instant;

#[tokio::test]
async fn a_dead_deadline_reports_cancellation_without_spawning() {
    let temp = tempfile::tempdir().unwrap();
    let marker = temp.path().join("spawned");
    let script = format!("touch {}", marker.display());

    let err = run(Invocation::new("sh")
        .args(["-c", script.as_str()])
        .deadline(Instant::now() - Duration::from_secs(1)))
    .await
    .unwrap_err();

    assert!(matches!(err, ExecError::AlreadyCancelled { .. }), "got: {err:?}");
    assert!(!marker.exists());
}

#[tokio::test]
async fn success_returns_output_and_failure_withholds_it() {
    let ok = run(Invocation::new("sh").args(["-c", "echo result"])).await.unwrap();
    assert_eq!(ok, "result");

    let err = run(Invocation::new("sh").args(["-c", "echo hidden; exit 2"])).await.unwrap_err();
    match err {
        ExecError::ExitCode { code, .. } => assert_eq!(code, 2),
        other => panic!("expected ExitCode, got: {other:?}"),
    }
}
