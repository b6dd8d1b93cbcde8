//! Navtree script emission.
//!
//! Serializes a [`NavTreeData`] back to the Doxygen surface format:
//! two-space indentation per tree depth, `[ "label", "href", children ]`
//! tuples with `null` leaves, unindented index entries, single-quoted
//! message strings, and the preserved license header. The output of
//! `emit(parse(file))` parses back to the same data — `fmt` relies on
//! this to normalize files without losing anything.

use crate::types::{Children, NavTreeData, TreeNode};
use std::fmt::Write;

/// Render a complete navtree script.
pub fn emit(data: &NavTreeData) -> String {
    let mut out = String::new();

    if let Some(header) = &data.header {
        out.push_str(header);
        out.push('\n');
    }

    out.push_str("var NAVTREE =\n[\n");
    for (i, node) in data.tree.iter().enumerate() {
        write_node(&mut out, node, 1);
        out.push_str(if i + 1 < data.tree.len() { ",\n" } else { "\n" });
    }
    out.push_str("];\n\n");

    out.push_str("var NAVTREEINDEX =\n[\n");
    for (i, entry) in data.index.iter().enumerate() {
        out.push_str(&double_quoted(entry));
        out.push_str(if i + 1 < data.index.len() { ",\n" } else { "\n" });
    }
    out.push_str("];\n\n");

    let _ = writeln!(out, "var SYNCONMSG = {};", single_quoted(&data.messages.sync_on));
    let _ = writeln!(out, "var SYNCOFFMSG = {};", single_quoted(&data.messages.sync_off));

    out
}

/// Append one `[ label, href, children ]` tuple at the given depth.
fn write_node(out: &mut String, node: &TreeNode, depth: usize) {
    let pad = "  ".repeat(depth);
    let label = double_quoted(&node.label);
    let href = match &node.href {
        Some(h) => double_quoted(h),
        None => "null".to_string(),
    };

    match &node.children {
        Children::None => {
            let _ = write!(out, "{pad}[ {label}, {href}, null ]");
        }
        Children::External(name) => {
            let _ = write!(out, "{pad}[ {label}, {href}, {} ]", double_quoted(name));
        }
        Children::Inline(kids) => {
            let _ = write!(out, "{pad}[ {label}, {href}, [\n");
            for (i, kid) in kids.iter().enumerate() {
                write_node(out, kid, depth + 1);
                out.push_str(if i + 1 < kids.len() { ",\n" } else { "\n" });
            }
            let _ = write!(out, "{pad}] ]");
        }
    }
}

/// Double-quoted, JSON-compatible string literal.
fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Single-quoted string literal, the form Doxygen uses for messages.
fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
