//! Tree-sitter parser integration for the node declaration sources.
//!
//! All declaration files are plain TypeScript; no JSX/TSX variants occur
//! in the node source tree.

use crate::core::ast::TypeScriptAst;
use anyhow::{Context, Result};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser};

/// Parse TypeScript source code into a tree-sitter AST
pub fn parse_source(content: &str, path: &Path) -> Result<TypeScriptAst> {
    let mut parser = Parser::new();
    let language: TsLanguage = tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into();

    parser
        .set_language(&language)
        .context("Failed to set tree-sitter language")?;

    let tree = parser
        .parse(content, None)
        .context("Failed to parse source code")?;

    Ok(TypeScriptAst {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
    })
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Unwrap a `type_annotation` node (`: T`) to the annotated type itself.
pub fn annotation_type<'a>(annotation: &Node<'a>) -> Option<Node<'a>> {
    annotation.named_child(0)
}

/// String literal text with the surrounding quotes removed.
pub fn string_value(node: &Node, source: &str) -> String {
    node_text(node, source)
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_typescript() {
        let source = "interface AddNode { inputs: { a: number } }";
        let path = PathBuf::from("maths.ts");
        let result = parse_source(source, &path);
        assert!(result.is_ok());

        let ast = result.unwrap();
        assert!(!ast.tree.root_node().has_error());
        assert_eq!(ast.path, path);
    }

    #[test]
    fn test_node_text() {
        let source = "type Alias = AddNode;";
        let ast = parse_source(source, Path::new("t.ts")).unwrap();

        let root = ast.tree.root_node();
        assert_eq!(node_text(&root, &ast.source), source);
    }

    #[test]
    fn test_node_line() {
        let source = "type A = number;\ntype B = string;";
        let ast = parse_source(source, Path::new("t.ts")).unwrap();

        let root = ast.tree.root_node();
        assert_eq!(node_line(&root), 1);
        let second = root.named_child(1).unwrap();
        assert_eq!(node_line(&second), 2);
    }

    #[test]
    fn test_string_value() {
        let source = "export * as Numbers from './maths';";
        let ast = parse_source(source, Path::new("index.ts")).unwrap();

        let statement = ast.tree.root_node().named_child(0).unwrap();
        let specifier = statement.child_by_field_name("source").unwrap();
        assert_eq!(string_value(&specifier, &ast.source), "./maths");
    }
}
