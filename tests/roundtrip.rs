//! End-to-end tests over the libpcprep fixture: parse → emit → parse
//! losslessness, JSON interchange, integrity checks, and the on-disk
//! site link check.

use doxnav::types::NavTreeData;
use doxnav::{check, emit, parse};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/navtreedata.js")
}

#[test]
fn fixture_parses_into_the_expected_shape() {
    let data = parse::parse_file(&fixture_path()).unwrap();

    assert_eq!(data.tree.len(), 1);
    assert_eq!(data.tree[0].label, "libpcprep");
    assert_eq!(data.node_count(), 14);

    let sections: Vec<&str> = data.tree[0]
        .children
        .as_slice()
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(
        sections,
        [
            "PCPREP: A point cloud preparation tool",
            "Data Structures",
            "Files"
        ]
    );

    assert_eq!(
        data.index,
        [
            "aabb_8h.html",
            "vec3u_8h.html#a463ffa7467b082157301455b4ab9195b"
        ]
    );
    assert_eq!(data.messages.sync_on, "click to disable panel synchronisation");
    assert_eq!(data.messages.sync_off, "click to enable panel synchronisation");
}

#[test]
fn fmt_is_the_identity_on_a_normalized_file() {
    let original = fs::read_to_string(fixture_path()).unwrap();
    let data = parse::parse_str(&original).unwrap();
    assert_eq!(emit::emit(&data), original);
}

#[test]
fn script_round_trip_preserves_labels_hrefs_and_order() {
    let data = parse::parse_file(&fixture_path()).unwrap();
    let reparsed = parse::parse_str(&emit::emit(&data)).unwrap();
    assert_eq!(reparsed, data);
}

#[test]
fn json_round_trip_is_lossless() {
    let data = parse::parse_file(&fixture_path()).unwrap();
    let json = serde_json::to_string_pretty(&data).unwrap();
    let back: NavTreeData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn fixture_passes_integrity_checks() {
    let data = parse::parse_file(&fixture_path()).unwrap();
    assert_eq!(check::check(&data), vec![]);
}

#[test]
fn messy_formatting_parses_to_the_same_data() {
    let data = parse::parse_file(&fixture_path()).unwrap();
    let minified = "\
var NAVTREE=[[\"libpcprep\",\"index.html\",[\
[\"PCPREP: A point cloud preparation tool\",\"index.html\",[\
[\"Building and installing\",\"index.html#autotoc_md1\",null],\
[\"Documentation\",\"index.html#autotoc_md2\",null],\
[\"Examples\",\"index.html#autotoc_md6\",[[\"Camera to matrix\",\"index.html#autotoc_md7\",null]]],\
[\"Contributing\",\"index.html#autotoc_md8\",null]]],\
[\"Data Structures\",\"annotated.html\",[\
[\"Data Structures\",\"annotated.html\",\"annotated_dup\"],\
[\"Data Structure Index\",\"classes.html\",null]]],\
[\"Files\",\"files.html\",[\
[\"File List\",\"files.html\",\"files_dup\"],\
[\"Globals\",\"globals.html\",[[\"All\",\"globals.html\",null]]]]]]]];\
var NAVTREEINDEX=[\"aabb_8h.html\",\"vec3u_8h.html#a463ffa7467b082157301455b4ab9195b\"];\
var SYNCONMSG='click to disable panel synchronisation';\
var SYNCOFFMSG='click to enable panel synchronisation';";
    let parsed = parse::parse_str(minified).unwrap();

    assert_eq!(parsed.header, None);
    assert_eq!(parsed.tree, data.tree);
    assert_eq!(parsed.index, data.index);
    assert_eq!(parsed.messages, data.messages);
}

#[test]
fn site_check_is_clean_against_a_complete_doc_tree() {
    let tmp = tempfile::tempdir().unwrap();
    for page in [
        "index.html",
        "annotated.html",
        "classes.html",
        "files.html",
        "globals.html",
        "aabb_8h.html",
        "vec3u_8h.html",
    ] {
        fs::write(tmp.path().join(page), "<html></html>").unwrap();
    }

    let data = parse::parse_file(&fixture_path()).unwrap();
    assert_eq!(check::check_site(&data, tmp.path()).unwrap(), vec![]);
}

#[test]
fn site_check_flags_a_deleted_page() {
    let tmp = tempfile::tempdir().unwrap();
    for page in [
        "index.html",
        "annotated.html",
        "classes.html",
        "files.html",
        "globals.html",
        "aabb_8h.html",
    ] {
        fs::write(tmp.path().join(page), "<html></html>").unwrap();
    }

    let data = parse::parse_file(&fixture_path()).unwrap();
    let findings = check::check_site(&data, tmp.path()).unwrap();
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("vec3u_8h.html"));
    assert_eq!(findings[0].location, "index[1]");
}

#[test]
fn fmt_normalizes_a_file_written_through_tempdir() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("navtreedata.js");
    fs::write(
        &path,
        "var NAVTREE = [ [ \"p\", \"index.html\", null ] ];\n\
         var NAVTREEINDEX = [ \"index.html\" ];\n\
         var SYNCONMSG = 'on';\nvar SYNCOFFMSG = 'off';\n",
    )
    .unwrap();

    let data = parse::parse_file(&path).unwrap();
    let normalized = emit::emit(&data);
    assert_eq!(
        normalized,
        "var NAVTREE =\n[\n  [ \"p\", \"index.html\", null ]\n];\n\n\
         var NAVTREEINDEX =\n[\n\"index.html\"\n];\n\n\
         var SYNCONMSG = 'on';\nvar SYNCOFFMSG = 'off';\n"
    );
}
