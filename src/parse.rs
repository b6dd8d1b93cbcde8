//! Navtree script parsing.
//!
//! Reads a Doxygen `navtreedata.js` file into a [`NavTreeData`]. The file
//! is not arbitrary JavaScript — the generator only ever emits a leading
//! license comment followed by flat `var NAME = <literal>;` declarations:
//!
//! ```text
//! /* …license notice… */
//! var NAVTREE =
//! [
//!   [ "libpcprep", "index.html", [ … ] ]
//! ];
//!
//! var NAVTREEINDEX =
//! [
//! "aabb_8h.html",
//! "vec3u_8h.html#a463ffa7467b082157301455b4ab9195b"
//! ];
//!
//! var SYNCONMSG = 'click to disable panel synchronisation';
//! var SYNCOFFMSG = 'click to enable panel synchronisation';
//! ```
//!
//! So the parser is a small assignment scanner, not a JS engine. Array
//! literals are JSON-compatible (double-quoted strings, `null`) and are
//! handed to `serde_json`; the message strings are single-quoted and get
//! their own unescaper.
//!
//! ## Permissive by design
//!
//! Parsing only rejects *structural* defects: a missing global, an
//! unterminated literal, a node that isn't a `[label, href, children]`
//! tuple. Semantic defects — empty child lists, dangling index entries,
//! bare-fragment hrefs — parse fine and are reported by [`crate::check`].

use crate::types::{Children, NavTreeData, SyncMessages, TreeNode};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing global '{0}'")]
    MissingGlobal(&'static str),
    #[error("expected a 'var' declaration at byte {0}")]
    ExpectedVar(usize),
    #[error("unterminated {0} starting at byte {1}")]
    Unterminated(&'static str, usize),
    #[error("global '{name}' is not a valid literal: {source}")]
    BadLiteral {
        name: &'static str,
        source: serde_json::Error,
    },
    #[error("global '{0}' is not a quoted string")]
    BadString(&'static str),
    #[error("malformed tree node at {at}: {reason}")]
    BadNode { at: String, reason: String },
}

/// Parse a navtree script from a file.
pub fn parse_file(path: &Path) -> Result<NavTreeData, ParseError> {
    let source = fs::read_to_string(path)?;
    parse_str(&source)
}

/// Parse a navtree script from source text.
pub fn parse_str(source: &str) -> Result<NavTreeData, ParseError> {
    let header = leading_comment(source).map(str::to_string);
    let assignments = scan_assignments(source)?;
    let lookup = |name: &'static str| -> Result<&str, ParseError> {
        assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rhs)| rhs.as_str())
            .ok_or(ParseError::MissingGlobal(name))
    };

    let tree_value: Value =
        serde_json::from_str(lookup("NAVTREE")?).map_err(|source| ParseError::BadLiteral {
            name: "NAVTREE",
            source,
        })?;
    let roots = tree_value.as_array().ok_or_else(|| ParseError::BadNode {
        at: "NAVTREE".to_string(),
        reason: "expected an array of nodes".to_string(),
    })?;
    let tree = roots
        .iter()
        .enumerate()
        .map(|(i, v)| node_from_value(v, &format!("NAVTREE[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let index: Vec<String> =
        serde_json::from_str(lookup("NAVTREEINDEX")?).map_err(|source| ParseError::BadLiteral {
            name: "NAVTREEINDEX",
            source,
        })?;

    let messages = SyncMessages {
        sync_on: string_literal(lookup("SYNCONMSG")?, "SYNCONMSG")?,
        sync_off: string_literal(lookup("SYNCOFFMSG")?, "SYNCOFFMSG")?,
    };

    Ok(NavTreeData {
        header,
        tree,
        index,
        messages,
    })
}

/// The leading block comment, verbatim with delimiters, if the file
/// starts with one.
fn leading_comment(source: &str) -> Option<&str> {
    let trimmed = source.trim_start();
    let rest = trimmed.strip_prefix("/*")?;
    let end = rest.find("*/")?;
    Some(&trimmed[..end + 4])
}

/// Convert a `[label, href, children]` tuple into a [`TreeNode`].
fn node_from_value(value: &Value, at: &str) -> Result<TreeNode, ParseError> {
    let bad = |reason: &str| ParseError::BadNode {
        at: at.to_string(),
        reason: reason.to_string(),
    };

    let items = value
        .as_array()
        .filter(|a| a.len() == 3)
        .ok_or_else(|| bad("expected a [label, href, children] tuple"))?;

    let label = items[0]
        .as_str()
        .ok_or_else(|| bad("label must be a string"))?
        .to_string();

    let href = match &items[1] {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        _ => return Err(bad("href must be a string or null")),
    };

    let children = match &items[2] {
        Value::Null => Children::None,
        Value::String(s) => Children::External(s.clone()),
        Value::Array(kids) => Children::Inline(
            kids.iter()
                .enumerate()
                .map(|(i, k)| node_from_value(k, &format!("{at}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        _ => return Err(bad("children must be an array, string, or null")),
    };

    Ok(TreeNode {
        label,
        href,
        children,
    })
}

/// Decode a quoted scalar RHS. Doxygen single-quotes the sync messages;
/// double-quoted strings are accepted too and go through serde_json.
fn string_literal(rhs: &str, name: &'static str) -> Result<String, ParseError> {
    if let Some(inner) = rhs
        .strip_prefix('\'')
        .and_then(|r| r.strip_suffix('\''))
        .filter(|_| rhs.len() >= 2)
    {
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(esc) => out.push(esc),
                    None => return Err(ParseError::BadString(name)),
                }
            } else {
                out.push(c);
            }
        }
        return Ok(out);
    }
    if rhs.starts_with('"') {
        return serde_json::from_str(rhs).map_err(|source| ParseError::BadLiteral { name, source });
    }
    Err(ParseError::BadString(name))
}

// ============================================================================
// Assignment scanner
// ============================================================================

/// Scan all top-level `var NAME = <rhs>;` declarations, returning each
/// name with its raw RHS text.
fn scan_assignments(source: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut out = Vec::new();
    let mut pos = skip_trivia(source, 0)?;

    while pos < source.len() {
        let (keyword, after) = read_word(source, pos);
        if keyword != "var" {
            return Err(ParseError::ExpectedVar(pos));
        }
        pos = skip_trivia(source, after)?;

        let (name, after) = read_word(source, pos);
        if name.is_empty() {
            return Err(ParseError::ExpectedVar(pos));
        }
        pos = skip_trivia(source, after)?;

        if source.as_bytes().get(pos) != Some(&b'=') {
            return Err(ParseError::ExpectedVar(pos));
        }
        pos = skip_trivia(source, pos + 1)?;

        let (rhs, after) = capture_rhs(source, pos)?;
        out.push((name.to_string(), rhs.trim().to_string()));
        pos = skip_trivia(source, after)?;
    }

    Ok(out)
}

/// Skip whitespace and comments starting at `pos`.
fn skip_trivia(source: &str, mut pos: usize) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if source[pos..].starts_with("/*") {
            match source[pos + 2..].find("*/") {
                Some(end) => pos += 2 + end + 2,
                None => return Err(ParseError::Unterminated("comment", pos)),
            }
        } else if source[pos..].starts_with("//") {
            match source[pos..].find('\n') {
                Some(end) => pos += end + 1,
                None => return Ok(source.len()),
            }
        } else {
            return Ok(pos);
        }
    }
}

/// Read an identifier-like word at `pos`. Returns the word and the
/// position just past it.
fn read_word(source: &str, pos: usize) -> (&str, usize) {
    let end = source[pos..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .map(|off| pos + off)
        .unwrap_or(source.len());
    (&source[pos..end], end)
}

/// Capture an assignment RHS up to the terminating `;` at bracket depth
/// zero, honoring string literals so brackets and semicolons inside
/// strings don't count.
fn capture_rhs(source: &str, start: usize) -> Result<(&str, usize), ParseError> {
    let bytes = source.as_bytes();
    let mut depth: u32 = 0;
    let mut pos = start;

    while pos < bytes.len() {
        match bytes[pos] {
            b'[' | b'{' | b'(' => depth += 1,
            b']' | b'}' | b')' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return Ok((&source[start..pos], pos + 1)),
            quote @ (b'"' | b'\'') => {
                pos += 1;
                loop {
                    match bytes.get(pos) {
                        None => return Err(ParseError::Unterminated("string", start)),
                        Some(b'\\') => pos += 2,
                        Some(&c) if c == quote => break,
                        Some(_) => pos += 1,
                    }
                }
            }
            _ => {}
        }
        pos += 1;
    }

    Err(ParseError::Unterminated("declaration", start))
}
