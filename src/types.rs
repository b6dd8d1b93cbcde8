//! Shared types for navigation tree data.
//!
//! These types model the three globals a Doxygen `navtreedata.js` file
//! defines (`NAVTREE`, `NAVTREEINDEX`, `SYNCONMSG`/`SYNCOFFMSG`) and are
//! serialized to JSON by the `export`/`import` commands. Every value is
//! plain owned data: built once by [`crate::parse`], read by everything
//! else, never mutated.

use serde::{Deserialize, Serialize};

/// A single entry in the navigation tree.
///
/// The script encodes each node as a `[ label, href, children ]` tuple.
/// `href` is `null` for pure grouping nodes; fragment hrefs
/// (`page.html#anchor`) are kept verbatim and split on demand by
/// [`crate::href::split_href`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display label shown in the sidebar.
    pub label: String,
    /// Link target relative to the documentation root, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Child entries, in display order.
    #[serde(default, skip_serializing_if = "Children::is_none")]
    pub children: Children,
}

/// The third tuple element of a tree node.
///
/// Doxygen uses all three encodings: `null` for leaves, an inline array
/// for small subtrees, and a bare string naming a deferred subtree script
/// (e.g. `"annotated_dup"`) that the viewer loads lazily.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    /// Leaf node (`null` in the script).
    #[default]
    None,
    /// Name of a separate script defining the subtree.
    External(String),
    /// Inline child list, order is display order.
    Inline(Vec<TreeNode>),
}

impl Children {
    pub fn is_none(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Inline children as a slice; empty for leaves and external refs.
    pub fn as_slice(&self) -> &[TreeNode] {
        match self {
            Children::Inline(nodes) => nodes,
            _ => &[],
        }
    }
}

impl TreeNode {
    /// A leaf entry with a link target.
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        TreeNode {
            label: label.into(),
            href: Some(href.into()),
            children: Children::None,
        }
    }

    /// An entry with inline children.
    pub fn branch(
        label: impl Into<String>,
        href: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        TreeNode {
            label: label.into(),
            href: Some(href.into()),
            children: Children::Inline(children),
        }
    }
}

/// Tooltip text for the viewer's panel-synchronisation toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncMessages {
    /// Shown while synchronisation is on (`SYNCONMSG`).
    pub sync_on: String,
    /// Shown while synchronisation is off (`SYNCOFFMSG`).
    pub sync_off: String,
}

/// Everything a navtree data file defines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavTreeData {
    /// Leading block comment (the generator's license notice), verbatim
    /// including the `/* */` delimiters. Preserved by `fmt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Top-level tree entries (`NAVTREE`). Usually a single project root.
    pub tree: Vec<TreeNode>,
    /// Positional lookup table (`NAVTREEINDEX`) correlating loaded pages
    /// to tree paths. Order is meaningful.
    pub index: Vec<String>,
    /// Sync toggle tooltips.
    pub messages: SyncMessages,
}

impl NavTreeData {
    /// Total node count across the whole tree.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children.as_slice())).sum()
        }
        count(&self.tree)
    }
}
