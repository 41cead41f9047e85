// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn base_only_input_renders_main_and_no_pr_section() {
    let input = CommentInput {
        results_md: "| Method | Main | PR |".to_string(),
        archive_url: Some("https://store.invalid/run.zip".to_string()),
        asm_paste_url: None,
        side_links: vec![SideLinks {
            side: Side::Base,
            links: vec![(
                "base_flamegraph.svg".to_string(),
                "https://store.invalid/base_flamegraph.svg".to_string(),
            )],
        }],
    };

    let body = format_comment(&input);

    assert!(body.contains("#### Main"));
    assert!(!body.contains("#### PR"), "no PR section without PR links:\n{body}");
    assert!(body.contains("| Method | Main | PR |"));
}

#[test]
fn missing_archive_degrades_to_a_placeholder() {
    let input = CommentInput { results_md: "| row |".to_string(), ..Default::default() };
    let body = format_comment(&input);
    assert!(body.contains(&format!("full artifact archive: {MISSING_MARKER}")));
}

#[test]
fn empty_results_text_is_marked_not_dropped() {
    let input = CommentInput::default();
    let body = format_comment(&input);
    assert!(body.starts_with("## Benchmark results"));
    assert!(body.contains(MISSING_MARKER));
}

#[test]
fn disassembly_paste_is_linked_when_present() {
    let input = CommentInput {
        results_md: "| row |".to_string(),
        asm_paste_url: Some("https://paste.invalid/disassembly.md".to_string()),
        ..Default::default()
    };
    let body = format_comment(&input);
    assert!(body.contains("Disassembly: https://paste.invalid/disassembly.md"));
}
