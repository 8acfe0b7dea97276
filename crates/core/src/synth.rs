//! Handler synthesis.
//!
//! Builds the two dialog handler members inserted by `add fragment`: an open
//! handler that lazily loads the fragment and opens it, and a close handler.
//! Each body comes from a fixed statement template filled with the user's
//! identifier, and the filled statement sequence is parsed standalone before
//! use — the mutator only ever splices text that is known-good JavaScript.

use crate::ast;
use crate::error::{Error, Result};

/// Statement template for the open handler body. `{Name}` is the capitalized
/// identifier, `{namespace}` the app id from the manifest.
const OPEN_HANDLER_BODY: &str = r#"if (!this.p{Name}Dialog) {
    this.p{Name}Dialog = this.loadFragment({
        name: "{namespace}.view.fragments.{Name}"
    });
}
this.p{Name}Dialog.then(function (oDialog) {
    oDialog.open();
});"#;

/// Statement template for the close handler body. `{name}` is the lowercased
/// identifier, matching the dialog id in the fragment artifact.
const CLOSE_HANDLER_BODY: &str = r#"this.byId("{name}Dialog").close();"#;

/// A named, zero-parameter function member ready for insertion.
#[derive(Debug, Clone)]
pub struct MemberDefinition {
    pub name: String,
    /// Ordered statement list, unindented; validated as parseable.
    pub body: String,
}

impl MemberDefinition {
    /// Render the member as an object-literal property at `indent`, with the
    /// body one level deeper. No trailing comma — the mutator owns separators.
    pub fn render(&self, indent: &str) -> String {
        let mut out = format!("{indent}{}: function () {{\n", self.name);
        for line in self.body.lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(indent);
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(indent);
        out.push('}');
        out
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Synthesize the open/close handler pair for `identifier` (already
/// capitalized by the caller) in `namespace`.
///
/// Returns the open handler first — insertion order is part of the contract.
/// A filled template that does not parse as JavaScript aborts with
/// [`Error::Syntax`] before any mutation is attempted; this is the only
/// identifier check performed.
pub fn synthesize_handlers(identifier: &str, namespace: &str) -> Result<[MemberDefinition; 2]> {
    let open = member(
        format!("onOpen{identifier}Dialog"),
        fill(OPEN_HANDLER_BODY, identifier, namespace),
    )?;
    let close = member(
        format!("onClose{identifier}Dialog"),
        fill(CLOSE_HANDLER_BODY, identifier, namespace),
    )?;
    Ok([open, close])
}

fn fill(template: &str, identifier: &str, namespace: &str) -> String {
    template
        .replace("{Name}", identifier)
        .replace("{name}", &identifier.to_lowercase())
        .replace("{namespace}", namespace)
}

fn member(name: String, body: String) -> Result<MemberDefinition> {
    let tree = ast::parse_js(&body)?;
    if tree.root_node().has_error() {
        return Err(Error::Syntax(format!(
            "filled statement template for '{name}' is not parseable JavaScript"
        )));
    }
    Ok(MemberDefinition { name, body })
}
