// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[test]
fn builder_collects_fields() {
    let inv = Invocation::new("git")
        .arg("clone")
        .args(["--depth", "1"])
        .env("GIT_TERMINAL_PROMPT", "0")
        .current_dir("/tmp");

    assert_eq!(inv.program(), "git");
    assert_eq!(inv.args, vec!["clone", "--depth", "1"]);
    assert_eq!(inv.env, vec![("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())]);
    assert_eq!(inv.cwd.as_deref(), Some(std::path::Path::new("/tmp")));
    assert!(inv.deadline.is_none());
}

#[tokio::test(start_paused = true)]
async fn timeout_sets_a_future_deadline() {
    let inv = Invocation::new("sleep").timeout(Duration::from_secs(5));
    let deadline = inv.deadline.unwrap();
    assert!(deadline > Instant::now());
    assert!(deadline <= Instant::now() + Duration::from_secs(5));
}
