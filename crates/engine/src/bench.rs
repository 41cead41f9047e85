// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark harness invocation.
//!
//! Scaffolds a throwaway BenchmarkDotNet project around the caller's
//! benchmark source, runs it once against the two `corerun` executables
//! under a hang-catching deadline, and collects the generated reports. A
//! clean harness exit that produced zero report files is an error: it means
//! the harness silently produced nothing usable.

use std::path::{Path, PathBuf};

use bp_core::Config;
use bp_exec::{ExecError, Invocation};

/// Where the harness writes its reports, relative to the project directory.
const RESULTS_SUBDIR: &str = "BenchmarkDotNet.Artifacts/results";

/// Suffix of the human-readable report flavor.
pub const REPORT_SUFFIX: &str = "-github.md";

/// Suffix of the disassembly report flavor.
pub const ASM_SUFFIX: &str = "-asm.md";

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("benchmark project setup failed at `{step}`: {source}")]
    Scaffold {
        step: &'static str,
        #[source]
        source: ExecError,
    },

    #[error("failed to lay out benchmark project at {}: {source}", .path.display())]
    ScaffoldIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("no benchmark reports found under {}", .dir.display())]
    EmptyResults { dir: PathBuf },

    #[error("failed to read report {}: {source}", .path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What one benchmark run leaves behind.
#[derive(Debug)]
pub struct BenchArtifacts {
    /// The harness results directory (the full artifact set lives here).
    pub results_dir: PathBuf,
    /// Concatenated human-readable reports, blank lines stripped.
    pub results_md: String,
    /// Concatenated disassembly reports, blank lines stripped. May be empty.
    pub asm_md: String,
}

/// Create the benchmark project from scratch around `snippet`.
///
/// The project directory is recreated from nothing each time; a stale
/// project from an earlier run never leaks into this one.
pub async fn scaffold(bench_dir: &Path, snippet: &str) -> Result<(), BenchError> {
    recreate_dir(bench_dir)?;

    dotnet(bench_dir, "new console", ["new", "console"]).await?;
    dotnet(bench_dir, "add package", ["add", "package", "BenchmarkDotNet"]).await?;

    let program = bench_dir.join("Program.cs");
    tokio::fs::write(&program, snippet)
        .await
        .map_err(|source| BenchError::ScaffoldIo { path: program, source })?;

    dotnet(bench_dir, "build", ["build", "-c", "Release"]).await?;
    Ok(())
}

/// Invoke the harness once against both executables, then collect reports.
pub async fn run_comparison(
    config: &Config,
    base_exe: &Path,
    diff_exe: &Path,
) -> Result<BenchArtifacts, BenchError> {
    let mut args: Vec<String> =
        vec!["run".into(), "-c".into(), "Release".into(), "--".into()];
    args.extend(harness_args(config.filter(), &config.bench_extra_args, base_exe, diff_exe));

    tracing::info!(filter = config.filter(), "running benchmarks");
    bp_exec::run(
        Invocation::new("dotnet")
            .args(args)
            .current_dir(&config.bench_dir)
            .timeout(config.bench_timeout),
    )
    .await?;

    let results_dir = config.bench_dir.join(RESULTS_SUBDIR);
    let reports = markdown_reports(&results_dir)?;
    let results_md = concat_reports(&reports, REPORT_SUFFIX)?;
    let asm_md = concat_reports(&reports, ASM_SUFFIX)?;

    Ok(BenchArtifacts { results_dir, results_md, asm_md })
}

/// Arguments handed to the harness itself (after `--`).
fn harness_args(
    filter: &str,
    extra: &[String],
    base_exe: &Path,
    diff_exe: &Path,
) -> Vec<String> {
    let mut args: Vec<String> = vec!["--filter".into(), filter.into()];
    // Columns that add noise without signal in a two-way comparison.
    args.extend(["-h", "Job", "StdDev", "RatioSD", "Median", "Error"].map(String::from));
    args.push("--coreRun".into());
    args.push(base_exe.display().to_string());
    args.push(diff_exe.display().to_string());
    args.extend(extra.iter().cloned());
    args
}

/// Every `*.md` report the harness generated, sorted by name.
///
/// Zero reports after a successful run is the empty-results failure, not a
/// no-op.
fn markdown_reports(results_dir: &Path) -> Result<Vec<PathBuf>, BenchError> {
    let entries = match std::fs::read_dir(results_dir) {
        Ok(entries) => entries,
        Err(_) => {
            return Err(BenchError::EmptyResults { dir: results_dir.to_path_buf() });
        }
    };

    let mut reports: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    reports.sort();

    if reports.is_empty() {
        return Err(BenchError::EmptyResults { dir: results_dir.to_path_buf() });
    }
    Ok(reports)
}

/// Concatenate the reports whose name ends in `suffix` (case-insensitive),
/// dropping blank lines so the result pastes cleanly into a comment.
fn concat_reports(reports: &[PathBuf], suffix: &str) -> Result<String, BenchError> {
    let mut combined = String::new();
    for path in reports {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !name.ends_with(suffix) {
            continue;
        }

        let content = std::fs::read_to_string(path)
            .map_err(|source| BenchError::ReportRead { path: path.clone(), source })?;
        let lines: Vec<&str> =
            content.lines().filter(|line| !line.trim().is_empty()).collect();
        combined.push_str(&lines.join("\n"));
        combined.push_str("\n  \n");
    }
    Ok(combined)
}

fn recreate_dir(dir: &Path) -> Result<(), BenchError> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)
            .map_err(|source| BenchError::ScaffoldIo { path: dir.to_path_buf(), source })?;
    }
    std::fs::create_dir_all(dir)
        .map_err(|source| BenchError::ScaffoldIo { path: dir.to_path_buf(), source })
}

async fn dotnet<const N: usize>(
    dir: &Path,
    step: &'static str,
    args: [&str; N],
) -> Result<String, BenchError> {
    bp_exec::run(Invocation::new("dotnet").args(args).current_dir(dir))
        .await
        .map_err(|source| BenchError::Scaffold { step, source })
}

#[cfg(test)]
#[path = "bench_tests.rs"]
mod tests;
