// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Comment body assembly.

use bp_core::{ReportBuf, Side};

/// Marker rendered where an optional artifact could not be produced.
pub const MISSING_MARKER: &str = "_not available_";

/// Everything the comment can mention. Every piece beyond the results text
/// is optional.
#[derive(Debug, Default)]
pub struct CommentInput {
    /// Concatenated human-readable report text.
    pub results_md: String,
    /// Public URL of the zipped artifact directory.
    pub archive_url: Option<String>,
    /// Paste URL holding the disassembly reports.
    pub asm_paste_url: Option<String>,
    /// Uploaded profiling files, grouped by side. Sides without links are
    /// simply absent.
    pub side_links: Vec<SideLinks>,
}

/// Uploaded artifact links for one side.
#[derive(Debug)]
pub struct SideLinks {
    pub side: Side,
    /// (file name, public URL) pairs.
    pub links: Vec<(String, String)>,
}

/// Render the full comment body.
pub fn format_comment(input: &CommentInput) -> String {
    let mut buf = ReportBuf::new();

    buf.line("## Benchmark results").blank();
    if input.results_md.trim().is_empty() {
        buf.line(MISSING_MARKER);
    } else {
        buf.push(input.results_md.clone());
    }
    buf.blank();

    if let Some(url) = &input.asm_paste_url {
        buf.line(format!("Disassembly: {url}")).blank();
    }

    buf.line("### Artifacts").blank();
    match &input.archive_url {
        Some(url) => buf.line(format!("- full artifact archive: {url}")),
        None => buf.line(format!("- full artifact archive: {MISSING_MARKER}")),
    };

    for group in &input.side_links {
        if group.links.is_empty() {
            continue;
        }
        buf.blank().line(format!("#### {}", group.side.label()));
        for (name, url) in &group.links {
            buf.line(format!("- [{name}]({url})"));
        }
    }

    buf.finish()
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
