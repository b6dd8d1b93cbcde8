//! # doxnav
//!
//! Tooling for Doxygen navigation tree data files (`navtreedata.js`) —
//! the machine-generated script that drives a documentation site's
//! sidebar. Each file defines three globals: a nested tree of
//! `[ label, href, children ]` tuples (`NAVTREE`), a flat positional
//! lookup table correlating loaded pages to tree paths (`NAVTREEINDEX`),
//! and two tooltip strings for the viewer's panel-sync toggle.
//!
//! The right treatment of such a file is data tooling, not a rewrite of
//! the viewer that consumes it. doxnav parses the script into a typed
//! model, validates it, normalizes it, converts it to and from JSON, and
//! verifies its links against a documentation tree on disk:
//!
//! ```text
//! parse     navtreedata.js  →  NavTreeData   (script → typed model)
//! check     NavTreeData     →  findings      (integrity + site links)
//! emit      NavTreeData     →  navtreedata.js (normalized script)
//! export    NavTreeData     →  JSON          (and back via import)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The data model: `TreeNode`, `Children`, `NavTreeData`, sync messages |
//! | [`parse`] | Assignment scanner + literal decoding, script → `NavTreeData` |
//! | [`emit`] | `NavTreeData` → script in the generator's exact surface format |
//! | [`check`] | Integrity findings and the on-disk dangling-link check |
//! | [`href`] | `page.html#anchor` splitting used by validation and display |
//! | [`output`] | CLI output formatting — tree-based display of results |
//!
//! # Design Decisions
//!
//! ## An Assignment Scanner, Not a JS Engine
//!
//! The generator only ever emits flat `var NAME = <literal>;` declarations
//! behind a license comment, and the array literals are JSON-compatible.
//! So [`parse`] scans assignments and hands the literals to `serde_json`
//! rather than embedding a JavaScript parser. Only the single-quoted
//! message strings need a hand-written unescaper.
//!
//! ## Permissive Parse, Strict Check
//!
//! A malformed navtree never crashes the consuming viewer — it shows up
//! as a cosmetic defect like a dangling link. The tooling mirrors that
//! split: [`parse`] rejects only structural problems (missing globals,
//! malformed tuples) while every semantic expectation — non-empty child
//! lists, valid relative paths, index/tree consistency — is a [`check`]
//! finding with a severity. Soft generator expectations are warnings and
//! never fail a build.
//!
//! ## Lossless Normalization
//!
//! [`emit`] reproduces the generator's own formatting (two-space tuple
//! indentation, unindented index entries, single-quoted messages, the
//! preserved license header), so `fmt` on an already-normalized file is
//! the identity and `emit(parse(s))` never loses labels, hrefs, child
//! order, index order, or messages.

pub mod check;
pub mod emit;
pub mod href;
pub mod output;
pub mod parse;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
