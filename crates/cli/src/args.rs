// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use bp_core::Config;

#[derive(Debug, clap::Parser)]
#[command(name = "bp", version, about = "Differential benchmark runs for runtime patches")]
pub struct Args {
    /// URL of the unified diff to test.
    #[arg(long)]
    pub patch_url: String,

    /// Directory the source tree is kept under (reused across runs).
    #[arg(long)]
    pub work_dir: PathBuf,

    /// Directory the throwaway benchmark project is scaffolded in.
    #[arg(long)]
    pub bench_dir: PathBuf,

    /// File holding the benchmark source to run.
    #[arg(long)]
    pub snippet: PathBuf,

    /// Issue to post the comparison on.
    #[arg(long)]
    pub issue: Option<u64>,

    /// Clone URL of the repository under test.
    #[arg(long, default_value = "https://github.com/dotnet/runtime.git")]
    pub repo_url: String,

    /// Benchmark filter expression (everything, unless narrowed).
    #[arg(long)]
    pub filter: Option<String>,

    /// Extra argument appended to the harness invocation (repeatable).
    #[arg(long = "bench-arg", allow_hyphen_values = true)]
    pub bench_args: Vec<String>,

    /// Directory dated log files are written under.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Ceiling on the benchmark invocation, in seconds.
    #[arg(long)]
    pub bench_timeout_secs: Option<u64>,

    /// Ceiling per build stage, in seconds. Builds run unbounded by default.
    #[arg(long)]
    pub build_timeout_secs: Option<u64>,
}

impl Args {
    /// The one configuration value every component receives.
    pub fn config(&self) -> Config {
        let mut config =
            Config::new(&self.repo_url, &self.work_dir, &self.bench_dir, &self.log_dir);
        config.bench_filter = self.filter.clone();
        config.bench_extra_args = self.bench_args.clone();
        if let Some(secs) = self.bench_timeout_secs {
            config.bench_timeout = Duration::from_secs(secs);
        }
        config.build_timeout = self.build_timeout_secs.map(Duration::from_secs);
        config
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
