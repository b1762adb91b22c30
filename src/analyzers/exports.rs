//! Export manifest resolution.
//!
//! The root manifest re-exports one namespace per node source file
//! (`export * as Numbers from './maths'`) plus assorted named utility
//! types. Only re-exports with a module specifier are considered;
//! local declarations are not exports of other files.

use crate::analyzers::parser::{node_text, parse_source, string_value};
use crate::core::ast::TypeScriptAst;
use crate::core::{ExportManifest, NamespaceExport};
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tree_sitter::Node;

/// Read and parse the manifest file. A missing or unreadable manifest is
/// fatal; the pipeline has nothing to work from.
pub fn resolve_exports(manifest_path: &Path) -> Result<ExportManifest> {
    let content = io::read_file(manifest_path)
        .with_context(|| format!("Failed to read export manifest {}", manifest_path.display()))?;
    let ast = parse_source(&content, manifest_path)?;
    Ok(parse_manifest(&ast))
}

/// Collect the manifest's exports in discovery order. This order
/// determines registry insertion order downstream.
pub fn parse_manifest(ast: &TypeScriptAst) -> ExportManifest {
    let manifest_dir = ast.path.parent().unwrap_or(Path::new("")).to_path_buf();
    let mut manifest = ExportManifest::default();

    let root = ast.tree.root_node();
    let mut cursor = root.walk();
    for statement in root.children(&mut cursor) {
        if statement.kind() != "export_statement" {
            continue;
        }
        let Some(source) = statement.child_by_field_name("source") else {
            continue;
        };
        let specifier = string_value(&source, &ast.source);
        collect_export_clause(&statement, &ast.source, &specifier, &manifest_dir, &mut manifest);
    }
    manifest
}

fn collect_export_clause(
    statement: &Node,
    source: &str,
    specifier: &str,
    manifest_dir: &Path,
    manifest: &mut ExportManifest,
) {
    let mut cursor = statement.walk();
    for part in statement.children(&mut cursor) {
        match part.kind() {
            // export { A, B as C } from './x' -- named utility exports
            "export_clause" => {
                let mut specs = part.walk();
                for spec in part.named_children(&mut specs) {
                    if spec.kind() != "export_specifier" {
                        continue;
                    }
                    let exported = spec
                        .child_by_field_name("alias")
                        .or_else(|| spec.child_by_field_name("name"));
                    if let Some(name) = exported {
                        manifest.top_level_names.push(node_text(&name, source).to_string());
                    }
                }
            }
            // export * as X from './x' -- one namespace of nodes
            "namespace_export" => {
                if let Some(name) = part.named_child(0) {
                    manifest.namespaces.push(NamespaceExport {
                        name: string_value(&name, source),
                        path: resolve_specifier(manifest_dir, specifier),
                    });
                }
            }
            _ => {}
        }
    }
}

/// Resolve a module specifier against the manifest's directory. A
/// specifier without an extension refers to a `.ts` file.
fn resolve_specifier(manifest_dir: &Path, specifier: &str) -> PathBuf {
    let mut path = manifest_dir.join(specifier);
    if path.extension().is_none() {
        path.set_extension("ts");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> ExportManifest {
        let ast = parse_source(source, Path::new("src/nodes/index.ts")).unwrap();
        parse_manifest(&ast)
    }

    #[test]
    fn collects_namespaces_in_discovery_order() {
        let manifest = parse(indoc! {r#"
            export * as Numbers from './maths';
            export * as Strings from './text';
        "#});

        let names: Vec<&str> = manifest.namespaces.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Numbers", "Strings"]);
        assert_eq!(
            manifest.namespaces[0].path,
            Path::new("src/nodes/maths.ts")
        );
    }

    #[test]
    fn collects_named_exports_separately() {
        let manifest = parse(indoc! {r#"
            export { NodeId, PortRef as Ref } from './types';
            export * as Logic from './logic';
        "#});

        assert_eq!(manifest.top_level_names, vec!["NodeId", "Ref"]);
        assert_eq!(manifest.namespaces.len(), 1);
    }

    #[test]
    fn ignores_statements_without_module_specifier() {
        let manifest = parse(indoc! {r#"
            export const VERSION = 3;
            export interface LocalNode { inputs: {} }
            export * as Numbers from './maths';
        "#});

        assert!(manifest.top_level_names.is_empty());
        assert_eq!(manifest.namespaces.len(), 1);
    }

    #[test]
    fn explicit_extension_is_kept() {
        let manifest = parse("export * as Text from './text.ts';");
        assert_eq!(manifest.namespaces[0].path, Path::new("src/nodes/text.ts"));
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let err = resolve_exports(Path::new("no/such/index.ts")).unwrap_err();
        assert!(err.to_string().contains("Failed to read export manifest"));
    }
}
