//! Node interface discovery within a namespace source file.
//!
//! A node is an interface whose name ends in `Node`, carrying `inputs`
//! and/or `outputs` type members. Its public name comes from an exported
//! type alias referencing the interface, falling back to the interface
//! name with the suffix stripped.

use crate::analyzers::parser::{annotation_type, node_text};
use crate::analyzers::ports::extract_ports;
use crate::core::ast::TypeScriptAst;
use crate::core::{NodeDefinition, PortRole};
use tree_sitter::Node;

const NODE_SUFFIX: &str = "Node";

/// Parse all node definitions declared in one namespace source file, in
/// declaration order.
pub fn parse_node_definitions(ast: &TypeScriptAst) -> Vec<NodeDefinition> {
    let root = ast.tree.root_node();
    let aliases = collect_node_aliases(&root, &ast.source);

    let mut definitions = Vec::new();
    let mut cursor = root.walk();
    for statement in root.children(&mut cursor) {
        let Some(interface) = interface_declaration(&statement) else {
            continue;
        };
        let Some(name) = interface.child_by_field_name("name") else {
            continue;
        };
        let declared_name = node_text(&name, &ast.source);
        if !declared_name.ends_with(NODE_SUFFIX) {
            continue;
        }
        definitions.push(parse_interface(
            &statement,
            &interface,
            declared_name,
            &aliases,
            ast,
        ));
    }
    definitions
}

/// Exported type aliases that reference a node interface, in table
/// order, as (alias name, referenced type text) pairs.
fn collect_node_aliases(root: &Node, source: &str) -> Vec<(String, String)> {
    let mut aliases = Vec::new();
    let mut cursor = root.walk();
    for statement in root.children(&mut cursor) {
        if statement.kind() != "export_statement" {
            continue;
        }
        let Some(declaration) = statement.child_by_field_name("declaration") else {
            continue;
        };
        if declaration.kind() != "type_alias_declaration" {
            continue;
        }
        let (Some(name), Some(value)) = (
            declaration.child_by_field_name("name"),
            declaration.child_by_field_name("value"),
        ) else {
            continue;
        };
        let referenced = node_text(&value, source);
        if referenced.ends_with(NODE_SUFFIX) || referenced.contains("Node<") {
            aliases.push((node_text(&name, source).to_string(), referenced.to_string()));
        }
    }
    aliases
}

/// Unwrap a top-level statement to an interface declaration, looking
/// through an `export` wrapper.
fn interface_declaration<'a>(statement: &Node<'a>) -> Option<Node<'a>> {
    match statement.kind() {
        "interface_declaration" => Some(*statement),
        "export_statement" => statement
            .child_by_field_name("declaration")
            .filter(|declaration| declaration.kind() == "interface_declaration"),
        _ => None,
    }
}

fn parse_interface(
    statement: &Node,
    interface: &Node,
    declared_name: &str,
    aliases: &[(String, String)],
    ast: &TypeScriptAst,
) -> NodeDefinition {
    let description = leading_doc_line(statement, &ast.source);

    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    if let Some(body) = interface.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() != "property_signature" {
                continue;
            }
            let Some(name) = member.child_by_field_name("name") else {
                continue;
            };
            let role = match node_text(&name, &ast.source) {
                "inputs" => PortRole::Input,
                "outputs" => PortRole::Output,
                _ => continue,
            };
            let Some(declared) = member
                .child_by_field_name("type")
                .and_then(|annotation| annotation_type(&annotation))
            else {
                continue;
            };
            let ports = extract_ports(declared, &ast.source, role);
            match role {
                PortRole::Input => inputs = ports,
                PortRole::Output => outputs = ports,
            }
        }
    }

    NodeDefinition {
        exported_name: resolve_exported_name(declared_name, aliases),
        declared_name: declared_name.to_string(),
        description,
        inputs,
        outputs,
    }
}

/// First alias whose referenced text is the interface name or a generic
/// instantiation of it; otherwise the name with the `Node` suffix
/// stripped.
fn resolve_exported_name(declared_name: &str, aliases: &[(String, String)]) -> String {
    let instantiation = format!("{declared_name}<");
    aliases
        .iter()
        .find(|(_, referenced)| referenced == declared_name || referenced.starts_with(&instantiation))
        .map(|(alias, _)| alias.clone())
        .unwrap_or_else(|| {
            declared_name
                .strip_suffix(NODE_SUFFIX)
                .unwrap_or(declared_name)
                .to_string()
        })
}

/// First content line of the comment immediately preceding a statement,
/// stripped of comment decoration. Empty if there is no such comment.
fn leading_doc_line(statement: &Node, source: &str) -> String {
    let Some(previous) = statement.prev_sibling() else {
        return String::new();
    };
    if previous.kind() != "comment" {
        return String::new();
    }
    first_doc_line(node_text(&previous, source))
}

fn first_doc_line(comment: &str) -> String {
    comment
        .trim_start_matches("/**")
        .trim_start_matches("/*")
        .trim_end_matches("*/")
        .lines()
        .map(|line| line.trim().trim_start_matches("//").trim_start_matches('*').trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}
