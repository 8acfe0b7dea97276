//! Extension-point discovery.
//!
//! A UI5 controller declares its type through a factory call of the shape
//! `<Base>.extend("name.space.Type", { ...members })`. The object literal in
//! the fixed argument position is the file's extension point: the member
//! container new handlers are appended to. Recognized call shapes live in a
//! declarative rule table so new factory idioms can be added without touching
//! the traversal.

use tree_sitter::Node;

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One recognized type-factory call shape: the callee's property name and the
/// argument position holding the member container.
#[derive(Debug, Clone, Copy)]
pub struct FactoryRule {
    pub callee_property: &'static str,
    pub arg_index: usize,
}

/// Built-in rules. `Controller.extend("Name", { ... })` is the only idiom the
/// UI5 runtime uses for controllers; the table exists so variants (e.g. other
/// managed-object factories) are a one-line addition.
pub const FACTORY_RULES: &[FactoryRule] =
    &[FactoryRule { callee_property: "extend", arg_index: 1 }];

// ---------------------------------------------------------------------------
// Extension point
// ---------------------------------------------------------------------------

/// The located member container, reduced to the byte spans the mutator needs.
#[derive(Debug, Clone)]
pub struct ExtensionPoint {
    /// Declared type name (first string argument of the factory call), if any.
    pub type_name: Option<String>,
    /// Byte offset of the object's opening brace.
    pub start: usize,
    /// Byte offset one past the object's closing brace.
    pub end: usize,
    /// Byte span of the final member, if the object has any.
    pub last_member: Option<(usize, usize)>,
    /// Number of members currently in the container.
    pub member_count: usize,
}

/// Object-literal children that count as members (comments are extras and
/// never count).
fn is_member(kind: &str) -> bool {
    matches!(
        kind,
        "pair" | "method_definition" | "shorthand_property_identifier" | "spread_element"
    )
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Find the first extension point in document order using the built-in rules.
///
/// Depth-first pre-order; the first qualifying object wins and later ones in
/// the same file are ignored. Returns `None` when nothing qualifies.
pub fn find_extension_point(root: Node, source: &str) -> Option<ExtensionPoint> {
    find_extension_point_with(root, source, FACTORY_RULES)
}

/// Same as [`find_extension_point`] but with a caller-supplied rule table.
pub fn find_extension_point_with(
    root: Node,
    source: &str,
    rules: &[FactoryRule],
) -> Option<ExtensionPoint> {
    if root.kind() == "call_expression" {
        if let Some(ep) = match_call(root, source, rules) {
            return Some(ep);
        }
    }
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if let Some(ep) = find_extension_point_with(child, source, rules) {
            return Some(ep);
        }
    }
    None
}

/// Check one call expression against the rule table.
fn match_call(call: Node, source: &str, rules: &[FactoryRule]) -> Option<ExtensionPoint> {
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    let property_text = property.utf8_text(source.as_bytes()).ok()?;
    let rule = rules.iter().find(|r| r.callee_property == property_text)?;

    let args = call.child_by_field_name("arguments")?;
    let mut cursor = args.walk();
    let named: Vec<Node> =
        args.named_children(&mut cursor).filter(|n| n.kind() != "comment").collect();

    let object = *named.get(rule.arg_index)?;
    if object.kind() != "object" {
        return None;
    }

    let type_name = named.first().and_then(|n| {
        if n.kind() == "string" {
            n.utf8_text(source.as_bytes())
                .ok()
                .map(|s| s.trim_matches(|c| c == '"' || c == '\'').to_string())
        } else {
            None
        }
    });

    Some(extension_point_of(object, type_name))
}

fn extension_point_of(object: Node, type_name: Option<String>) -> ExtensionPoint {
    let mut last_member = None;
    let mut member_count = 0;
    let mut cursor = object.walk();
    for child in object.named_children(&mut cursor) {
        if is_member(child.kind()) {
            member_count += 1;
            last_member = Some((child.start_byte(), child.end_byte()));
        }
    }
    ExtensionPoint {
        type_name,
        start: object.start_byte(),
        end: object.end_byte(),
        last_member,
        member_count,
    }
}
