// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery of optional per-side profiling files.
//!
//! The harness keys these by `base`/`diff` in the file name. Every one of
//! them is optional: a side with no files simply yields nothing, which the
//! comment renders as an absent section rather than an error.

use std::path::{Path, PathBuf};

use bp_core::Side;

/// Profiling files found for one side of the comparison.
#[derive(Debug, Default)]
pub struct SideArtifacts {
    /// Flame-graph images (svg/png).
    pub flame_graphs: Vec<PathBuf>,
    /// Hot-function list files.
    pub hot_functions: Vec<PathBuf>,
}

impl SideArtifacts {
    pub fn is_empty(&self) -> bool {
        self.flame_graphs.is_empty() && self.hot_functions.is_empty()
    }
}

/// Scan `results_dir` for this side's profiling files.
///
/// An unreadable or missing directory yields an empty set; leniency is the
/// point of this layer.
pub fn discover(results_dir: &Path, side: Side) -> SideArtifacts {
    let mut found = SideArtifacts::default();
    let Ok(entries) = std::fs::read_dir(results_dir) else {
        return found;
    };

    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !side.matches_file_name(name) {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "svg" | "png" => found.flame_graphs.push(path),
            "txt" | "log" => found.hot_functions.push(path),
            // Markdown reports are handled by the benchmark runner.
            _ => {}
        }
    }

    found.flame_graphs.sort();
    found.hot_functions.sort();
    found
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
