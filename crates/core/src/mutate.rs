//! In-memory mutation and re-serialization.
//!
//! Appends synthesized members to the located extension point by splicing
//! rendered text into the original byte stream. Everything outside the splice
//! is carried over verbatim, so existing statements and comments cannot be
//! lost or reordered; the inserted region uses a default layout derived from
//! the surrounding indentation. The result must survive a re-parse before it
//! is allowed to reach disk.

use crate::ast::SourceDocument;
use crate::error::{Error, Result};
use crate::locate::ExtensionPoint;
use crate::synth::MemberDefinition;

/// Append `members` (in order) to the end of the extension point's member
/// list, returning the new source text. Purely in-memory.
///
/// Existing member names are deliberately not consulted: appending a handler
/// pair that already exists yields duplicate-named members, and the later
/// pair shadows the earlier one at runtime.
pub fn append_members(
    doc: &SourceDocument,
    point: &ExtensionPoint,
    members: &[MemberDefinition],
) -> String {
    let source = doc.text();
    let indent = member_indent(source, point);
    let rendered: Vec<String> = members.iter().map(|m| m.render(&indent)).collect();
    let block = rendered.join(",\n\n");

    match point.last_member {
        Some((_, last_end)) => {
            // After the final member; any pre-existing trailing comma stays
            // where it is and becomes the new block's trailing comma.
            splice(source, last_end, &format!(",\n\n{block}"))
        }
        None => {
            // Empty container: open it up across lines.
            let closing_indent = indent_of_line_containing(source, point.start);
            splice(source, point.start + 1, &format!("\n{block}\n{closing_indent}"))
        }
    }
}

/// Re-parse the mutated text; [`Error::Serialization`] if it is no longer
/// valid JavaScript. Nothing is written when this fails.
pub fn verify_reparse(text: &str) -> Result<()> {
    SourceDocument::parse(text.to_string())
        .map(|_| ())
        .map_err(|e| Error::Serialization(e.to_string()))
}

fn splice(source: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(source.len() + insert.len());
    out.push_str(&source[..at]);
    out.push_str(insert);
    out.push_str(&source[at..]);
    out
}

/// Indentation for inserted members: the final member's own indentation when
/// it starts its line, otherwise one level deeper than the container's line.
fn member_indent(source: &str, point: &ExtensionPoint) -> String {
    if let Some((last_start, _)) = point.last_member {
        if let Some(indent) = leading_whitespace_before(source, last_start) {
            return indent;
        }
    }
    format!("{}    ", indent_of_line_containing(source, point.start))
}

/// The whitespace prefix of `byte`'s line, provided `byte` is the first
/// non-whitespace position on it.
fn leading_whitespace_before(source: &str, byte: usize) -> Option<String> {
    let line_start = source[..byte].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &source[line_start..byte];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        Some(prefix.to_string())
    } else {
        None
    }
}

fn indent_of_line_containing(source: &str, byte: usize) -> String {
    let line_start = source[..byte].rfind('\n').map(|i| i + 1).unwrap_or(0);
    source[line_start..].chars().take_while(|c| *c == ' ' || *c == '\t').collect()
}
