// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bp: differential benchmark runs for runtime patches.
//!
//! Fetches a patch, builds the unmodified and patched trees, benchmarks the
//! two resulting executables against each other, and publishes the
//! comparison. Exit code zero means the run produced a result; any failure
//! along the way logs the innermost error and exits non-zero.

mod args;
mod env;
mod logging;
mod patch;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use bp_publish::{BlobContainerStore, GithubTracker, Publisher};

/// Identity this tool presents to the issue tracker.
const APP_NAME: &str = "benchpress";

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    let _log_guard = logging::init(&args.log_dir);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err.root_cause());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: args::Args) -> anyhow::Result<()> {
    let snippet = tokio::fs::read_to_string(&args.snippet)
        .await
        .with_context(|| format!("reading benchmark source {}", args.snippet.display()))?;
    let config = args.config();

    let client = reqwest::Client::new();
    let patch = patch::fetch(&client, &args.patch_url).await?;

    let dual = bp_engine::orchestrate::run(&config, &patch, &|msg: &str| {
        tracing::info!("{msg}");
    })
    .await?;
    tracing::info!(
        base = %dual.base_exe.display(),
        diff = %dual.diff_exe.display(),
        "both builds ready"
    );

    bp_engine::bench::scaffold(&config.bench_dir, &snippet).await?;
    let artifacts =
        bp_engine::bench::run_comparison(&config, &dual.base_exe, &dual.diff_exe).await?;

    let publish_targets = (args.issue, env::github_token(), env::blob_container());
    if let (Some(issue), Some(token), Some(container)) = publish_targets {
        let (owner, repo) = env::github_repo();
        let store = BlobContainerStore::new(container);
        let tracker = GithubTracker::new(APP_NAME, token, owner, repo);
        Publisher::new(&store, &tracker)
            .publish(issue, &artifacts.results_dir, &artifacts.results_md, &artifacts.asm_md)
            .await;
    } else {
        tracing::info!("publishing not configured; results follow");
        tracing::info!("{}", artifacts.results_md);
    }

    Ok(())
}
