//! Shared test utilities for the doxnav test suite.
//!
//! Provides the canonical fixture (a navtree data file for libpcprep, a
//! point-cloud preparation library) both as source text and as the
//! [`NavTreeData`] it parses to. The two are maintained in lockstep so
//! emitter tests can assert byte-for-byte reproduction.

use crate::types::{Children, NavTreeData, SyncMessages, TreeNode};

/// The fixture script, exactly as `emit` would render it.
pub fn sample_script() -> String {
    include_str!("../fixtures/navtreedata.js").to_string()
}

/// The data the fixture script parses to. 14 tree nodes, two external
/// subtree references, a two-entry index.
pub fn sample_data() -> NavTreeData {
    let readme = TreeNode::branch(
        "PCPREP: A point cloud preparation tool",
        "index.html",
        vec![
            TreeNode::leaf("Building and installing", "index.html#autotoc_md1"),
            TreeNode::leaf("Documentation", "index.html#autotoc_md2"),
            TreeNode::branch(
                "Examples",
                "index.html#autotoc_md6",
                vec![TreeNode::leaf("Camera to matrix", "index.html#autotoc_md7")],
            ),
            TreeNode::leaf("Contributing", "index.html#autotoc_md8"),
        ],
    );
    let structures = TreeNode::branch(
        "Data Structures",
        "annotated.html",
        vec![
            TreeNode {
                label: "Data Structures".into(),
                href: Some("annotated.html".into()),
                children: Children::External("annotated_dup".into()),
            },
            TreeNode::leaf("Data Structure Index", "classes.html"),
        ],
    );
    let files = TreeNode::branch(
        "Files",
        "files.html",
        vec![
            TreeNode {
                label: "File List".into(),
                href: Some("files.html".into()),
                children: Children::External("files_dup".into()),
            },
            TreeNode::branch(
                "Globals",
                "globals.html",
                vec![TreeNode::leaf("All", "globals.html")],
            ),
        ],
    );

    NavTreeData {
        header: Some(sample_header()),
        tree: vec![TreeNode::branch(
            "libpcprep",
            "index.html",
            vec![readme, structures, files],
        )],
        index: vec![
            "aabb_8h.html".to_string(),
            "vec3u_8h.html#a463ffa7467b082157301455b4ab9195b".to_string(),
        ],
        messages: SyncMessages {
            sync_on: "click to disable panel synchronisation".to_string(),
            sync_off: "click to enable panel synchronisation".to_string(),
        },
    }
}

/// The fixture's license header, comment delimiters included.
fn sample_header() -> String {
    let script = sample_script();
    let end = script.find("*/").expect("fixture has a license header");
    script[..end + 2].to_string()
}

/// Data with the given tree, an empty index, and stock messages.
pub fn data_with_tree(tree: Vec<TreeNode>) -> NavTreeData {
    NavTreeData {
        header: None,
        tree,
        index: vec![],
        messages: SyncMessages {
            sync_on: "click to disable panel synchronisation".to_string(),
            sync_off: "click to enable panel synchronisation".to_string(),
        },
    }
}
