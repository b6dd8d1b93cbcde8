//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with the semantic identity of each entry — positional
//! index and label — with link targets shown as secondary context via
//! indented `Link:` lines. The tree inventory reads as a table of
//! contents; file details stay subordinate.
//!
//! ```text
//! Tree (14 entries)
//! 001 libpcprep
//!     Link: index.html
//!     001 Data Structures
//!         Link: annotated.html
//!         Subtree: annotated_dup
//!
//! Index (2 entries)
//!     001 aabb_8h.html
//!     002 vec3u_8h.html#a463ffa7467b082157301455b4ab9195b
//!
//! Messages
//!     sync on:  click to disable panel synchronisation
//!     sync off: click to enable panel synchronisation
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::check::{Finding, Severity};
use crate::types::{Children, NavTreeData, TreeNode};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// show
// ============================================================================

/// Format the tree inventory for the `show` command.
pub fn format_show(data: &NavTreeData) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Tree ({} entries)", data.node_count()));
    for (i, node) in data.tree.iter().enumerate() {
        format_node(node, i + 1, 0, &mut lines);
    }

    lines.push(String::new());
    lines.push(format!("Index ({} entries)", data.index.len()));
    for (i, entry) in data.index.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), entry));
    }

    lines.push(String::new());
    lines.push("Messages".to_string());
    lines.push(format!("    sync on:  {}", data.messages.sync_on));
    lines.push(format!("    sync off: {}", data.messages.sync_off));

    lines
}

fn format_node(node: &TreeNode, position: usize, depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    lines.push(format!("{pad}{} {}", format_index(position), node.label));
    if let Some(href) = &node.href {
        lines.push(format!("{pad}    Link: {href}"));
    }
    match &node.children {
        Children::External(name) => {
            lines.push(format!("{pad}    Subtree: {name}"));
        }
        Children::Inline(kids) => {
            for (i, kid) in kids.iter().enumerate() {
                format_node(kid, i + 1, depth + 1, lines);
            }
        }
        Children::None => {}
    }
}

/// Print the `show` inventory to stdout.
pub fn print_show(data: &NavTreeData) {
    for line in format_show(data) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Format validation findings, worst first, with a summary line.
pub fn format_check(findings: &[Finding]) -> Vec<String> {
    if findings.is_empty() {
        return vec!["No problems found".to_string()];
    }

    let mut sorted: Vec<&Finding> = findings.iter().collect();
    sorted.sort_by(|a, b| b.severity.cmp(&a.severity));

    let mut lines = Vec::new();
    for finding in &sorted {
        lines.push(format!(
            "{}: {}: {}",
            finding.severity, finding.location, finding.message
        ));
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;
    lines.push(String::new());
    lines.push(format!(
        "{} error{}, {} warning{}",
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    ));

    lines
}

/// Print validation findings to stdout.
pub fn print_check(findings: &[Finding]) {
    for line in format_check(findings) {
        println!("{}", line);
    }
}
