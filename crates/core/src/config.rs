// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! Built exactly once at process start (CLI args plus environment) and passed
//! by reference into every component. Nothing below the CLI reads ambient
//! state.

use std::path::PathBuf;
use std::time::Duration;

/// Default ceiling on a single benchmark invocation. Well beyond the expected
/// run time; this catches hangs, it is not a budget.
pub const DEFAULT_BENCH_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Configuration for one benchpress run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Clone URL of the repository under test.
    pub repo_url: String,
    /// Directory the source tree is cloned into (the tree itself lives in a
    /// subdirectory named after the repository).
    pub work_dir: PathBuf,
    /// Directory the throwaway benchmark project is scaffolded in.
    pub bench_dir: PathBuf,
    /// Directory dated log files are written under.
    pub log_dir: PathBuf,
    /// Benchmark filter expression. `None` means run everything (`*`).
    pub bench_filter: Option<String>,
    /// Extra arguments appended verbatim to the harness invocation.
    pub bench_extra_args: Vec<String>,
    /// Hard wall-clock ceiling on the benchmark invocation.
    pub bench_timeout: Duration,
    /// Optional ceiling per build stage. `None` leaves builds unbounded,
    /// matching the behavior this tool has always had.
    pub build_timeout: Option<Duration>,
}

impl Config {
    /// Configuration with defaults for everything except the locations.
    pub fn new(
        repo_url: impl Into<String>,
        work_dir: impl Into<PathBuf>,
        bench_dir: impl Into<PathBuf>,
        log_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_url: repo_url.into(),
            work_dir: work_dir.into(),
            bench_dir: bench_dir.into(),
            log_dir: log_dir.into(),
            bench_filter: None,
            bench_extra_args: Vec::new(),
            bench_timeout: DEFAULT_BENCH_TIMEOUT,
            build_timeout: None,
        }
    }

    /// Directory name the repository clones into, derived from the URL.
    pub fn repo_dir_name(&self) -> &str {
        repo_dir_name(&self.repo_url)
    }

    /// Path of the source tree inside `work_dir`.
    pub fn tree_path(&self) -> PathBuf {
        self.work_dir.join(self.repo_dir_name())
    }

    /// Filter expression handed to the harness (`*` unless overridden).
    pub fn filter(&self) -> &str {
        self.bench_filter.as_deref().unwrap_or("*")
    }
}

/// Last path segment of a clone URL, with any `.git` suffix stripped.
pub fn repo_dir_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
