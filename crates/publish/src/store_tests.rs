// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    archive = { "run-42.zip", "application/zip" },
    flame_graph = { "base_flamegraph.svg", "image/svg+xml" },
    image = { "chart.PNG", "image/png" },
    report = { "Bench-report-github.md", "text/plain" },
    bare = { "README", "text/plain" },
)]
fn content_types_follow_the_extension(name: &str, expected: &str) {
    assert_eq!(content_type_for(name), expected);
}

#[test]
fn object_url_splices_the_name_before_the_sas_query() {
    let store = BlobContainerStore::new("https://acct.blob.example/container?sv=1&sig=abc");
    assert_eq!(
        store.object_url("run.zip"),
        "https://acct.blob.example/container/run.zip?sv=1&sig=abc"
    );
}

#[test]
fn object_url_without_a_query_just_appends() {
    let store = BlobContainerStore::new("https://acct.blob.example/container/");
    assert_eq!(store.object_url("run.zip"), "https://acct.blob.example/container/run.zip");
}
