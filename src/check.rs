//! Data-integrity checks for parsed navtree data.
//!
//! The parser accepts anything structurally shaped like a navtree script;
//! this module reports the semantic defects. Two severities:
//!
//! - **Error**: well-formedness defects in the data itself — empty labels,
//!   empty inline child lists, bare-fragment hrefs, index entries that are
//!   not valid relative paths.
//! - **Warning**: soft generator expectations — index entries with no
//!   matching href in the tree, duplicate index entries. These never fail
//!   a build on their own.
//!
//! The optional site check ([`check_site`]) walks a documentation root
//! directory and reports every referenced page that does not exist on
//! disk. A dangling link is the one defect a reader actually notices, so
//! those findings are errors.

use crate::href::split_href;
use crate::types::{Children, NavTreeData, TreeNode};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to walk site directory: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One defect found in the data, with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    /// Label trail for tree findings (`libpcprep > Files > Globals`) or
    /// a positional reference for index findings (`index[3]`).
    pub location: String,
    pub message: String,
}

impl Finding {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Finding {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Finding {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Whether any finding is an error (drives the CLI exit code).
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

/// Run all structural integrity checks on the data.
pub fn check(data: &NavTreeData) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in &data.tree {
        check_node(node, "", &mut findings);
    }
    check_index(data, &mut findings);

    findings
}

fn check_node(node: &TreeNode, parent_trail: &str, findings: &mut Vec<Finding>) {
    let trail = if parent_trail.is_empty() {
        display_label(node).to_string()
    } else {
        format!("{parent_trail} > {}", display_label(node))
    };

    if node.label.is_empty() {
        findings.push(Finding::error(trail.as_str(), "empty label"));
    }

    if let Some(href) = &node.href {
        let parts = split_href(href);
        if parts.page.is_empty() && parts.fragment.is_some() {
            findings.push(Finding::error(
                trail.as_str(),
                format!("href \"{href}\" is a bare fragment with no base page"),
            ));
        } else if !parts.is_valid_relative() {
            findings.push(Finding::error(
                trail.as_str(),
                format!("href \"{href}\" is not a valid relative path"),
            ));
        }
    }

    match &node.children {
        Children::Inline(kids) if kids.is_empty() => {
            findings.push(Finding::error(trail.as_str(), "child list is present but empty"));
        }
        Children::Inline(kids) => {
            for kid in kids {
                check_node(kid, &trail, findings);
            }
        }
        _ => {}
    }
}

fn display_label(node: &TreeNode) -> &str {
    if node.label.is_empty() {
        "(unlabeled)"
    } else {
        &node.label
    }
}

fn check_index(data: &NavTreeData, findings: &mut Vec<Finding>) {
    let mut seen: HashSet<&str> = HashSet::new();
    // Index entries may live inside deferred subtree scripts the data
    // file doesn't inline, so reachability is only checkable when the
    // whole tree is inline.
    let fully_inline = !has_external_refs(&data.tree);
    let inline_hrefs = collect_hrefs(&data.tree);

    for (i, entry) in data.index.iter().enumerate() {
        let location = format!("index[{i}]");
        let parts = split_href(entry);

        if !parts.is_valid_relative() {
            findings.push(Finding::error(
                location.as_str(),
                format!("\"{entry}\" is not a valid relative path"),
            ));
            continue;
        }
        if !seen.insert(entry.as_str()) {
            findings.push(Finding::warning(
                location.as_str(),
                format!("duplicate entry \"{entry}\" in a positional lookup table"),
            ));
        }
        if fully_inline && !inline_hrefs.contains(entry.as_str()) {
            findings.push(Finding::warning(
                location.as_str(),
                format!("\"{entry}\" does not match any href in the tree"),
            ));
        }
    }
}

fn has_external_refs(nodes: &[TreeNode]) -> bool {
    nodes.iter().any(|n| {
        matches!(n.children, Children::External(_)) || has_external_refs(n.children.as_slice())
    })
}

fn collect_hrefs(nodes: &[TreeNode]) -> HashSet<&str> {
    let mut hrefs = HashSet::new();
    fn walk<'a>(nodes: &'a [TreeNode], hrefs: &mut HashSet<&'a str>) {
        for node in nodes {
            if let Some(href) = &node.href {
                hrefs.insert(href.as_str());
            }
            walk(node.children.as_slice(), hrefs);
        }
    }
    walk(nodes, &mut hrefs);
    hrefs
}

/// Verify that every page referenced by the tree or the index exists
/// under the documentation root.
pub fn check_site(data: &NavTreeData, site_root: &Path) -> Result<Vec<Finding>, CheckError> {
    let mut present: HashSet<String> = HashSet::new();
    for entry in WalkDir::new(site_root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(site_root) {
            present.insert(rel.to_string_lossy().replace('\\', "/"));
        }
    }

    let mut findings = Vec::new();
    let mut reported: HashSet<String> = HashSet::new();

    let mut visit = |location: String, href: &str| {
        let parts = split_href(href);
        if parts.page.is_empty() || !parts.is_valid_relative() {
            return; // already reported by the structural checks
        }
        if !present.contains(&parts.page) && reported.insert(parts.page.clone()) {
            findings.push(Finding::error(
                location,
                format!("page \"{}\" does not exist under the site root", parts.page),
            ));
        }
    };

    fn walk_tree(
        nodes: &[TreeNode],
        parent_trail: &str,
        visit: &mut impl FnMut(String, &str),
    ) {
        for node in nodes {
            let trail = if parent_trail.is_empty() {
                display_label(node).to_string()
            } else {
                format!("{parent_trail} > {}", display_label(node))
            };
            if let Some(href) = &node.href {
                visit(trail.clone(), href);
            }
            walk_tree(node.children.as_slice(), &trail, visit);
        }
    }
    walk_tree(&data.tree, "", &mut visit);

    for (i, entry) in data.index.iter().enumerate() {
        visit(format!("index[{i}]"), entry);
    }

    Ok(findings)
}
