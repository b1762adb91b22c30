//! Port extraction from `inputs`/`outputs` type expressions.
//!
//! Extraction dispatches over the expression's syntactic shape. Literal
//! object types and conditional types are handled structurally; anything
//! else falls through to a documented best-effort text heuristic that
//! recovers port names but not their type categories.

use crate::analyzers::parser::{annotation_type, node_text};
use crate::analyzers::types::classify_type;
use crate::core::{Port, PortRole, TypeCategory};
use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

/// First `?`-prefixed brace group in an opaque type expression.
static OPAQUE_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?\s*\{([^}]*)\}").unwrap());

/// `name:` property tokens inside a brace group.
static PROPERTY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)\s*:").unwrap());

/// Syntactic shape of a port-list type expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TypeExprShape {
    /// A literal object type: `{ a: number; b: string }`.
    Literal,
    /// A conditional type: `C extends X ? T : F`.
    Conditional,
    /// Anything else; only the text heuristic applies.
    Opaque,
}

fn classify_shape(node: &Node) -> TypeExprShape {
    match node.kind() {
        "object_type" => TypeExprShape::Literal,
        "conditional_type" => TypeExprShape::Conditional,
        _ => TypeExprShape::Opaque,
    }
}

/// Extract the ordered port list declared by a type expression.
pub fn extract_ports(node: Node, source: &str, role: PortRole) -> Vec<Port> {
    match classify_shape(&node) {
        TypeExprShape::Literal => literal_ports(node, source, role),
        TypeExprShape::Conditional => match node.child_by_field_name("consequence") {
            // A node's visible shape is its positive branch; the false
            // branch (conventionally `never`) is not inspected.
            Some(branch) => extract_ports(branch, source, role),
            None => opaque_ports(node_text(&node, source), role),
        },
        TypeExprShape::Opaque => opaque_ports(node_text(&node, source), role),
    }
}

/// One port per property signature, in declaration order.
fn literal_ports(node: Node, source: &str, role: PortRole) -> Vec<Port> {
    let mut ports = Vec::new();
    let mut cursor = node.walk();
    for member in node.named_children(&mut cursor) {
        if member.kind() != "property_signature" {
            continue;
        }
        let Some(name) = member.child_by_field_name("name") else {
            continue;
        };
        let category = member
            .child_by_field_name("type")
            .and_then(|annotation| annotation_type(&annotation))
            .map(|declared| classify_type(node_text(&declared, source)))
            .unwrap_or(TypeCategory::Any);
        ports.push(Port::new(node_text(&name, source), category, role));
    }
    dedupe_ports(ports)
}

/// Best-effort extraction for shapes the structural tiers do not cover.
///
/// Finds the first `? { ... }` group in the expression text and treats
/// every `name:` token inside it as a port. Type categories are lost;
/// every recovered port is `any`. No group means no ports.
fn opaque_ports(type_text: &str, role: PortRole) -> Vec<Port> {
    let Some(group) = OPAQUE_OBJECT.captures(type_text) else {
        return Vec::new();
    };
    let ports = PROPERTY_TOKEN
        .captures_iter(&group[1])
        .map(|token| Port::new(&token[1], TypeCategory::Any, role))
        .collect();
    dedupe_ports(ports)
}

/// Port ids are unique within one list; the first declaration wins.
fn dedupe_ports(ports: Vec<Port>) -> Vec<Port> {
    let mut seen: Vec<String> = Vec::new();
    ports
        .into_iter()
        .filter(|port| {
            if seen.contains(&port.id) {
                false
            } else {
                seen.push(port.id.clone());
                true
            }
        })
        .collect()
}
