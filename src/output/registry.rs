//! Registry assembly and TypeScript module generation.
//!
//! Entries keep their input order (namespace discovery order outer,
//! in-file declaration order inner), so two runs over an unchanged
//! source tree render byte-identical modules apart from the timestamp
//! header line.

use crate::config::CategoryColors;
use crate::core::{NodeDefinition, Registry, RegistryEntry};
use crate::io::Clock;
use anyhow::Result;
use chrono::SecondsFormat;
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two definitions in one namespace resolved to the same exported
    /// name. A defect in the source tree, not something to paper over
    /// with overwrite semantics.
    #[error("duplicate node id `{id}`: interface `{declared}` collides with an earlier definition")]
    DuplicateId { id: String, declared: String },
}

/// Assemble the keyed registry from parsed definitions.
pub fn build_registry(
    definitions: &[(String, NodeDefinition)],
    colors: &CategoryColors,
) -> Result<Registry, RegistryError> {
    let mut entries: Vec<RegistryEntry> = Vec::with_capacity(definitions.len());
    for (namespace, definition) in definitions {
        let full_id = format!("{namespace}.{}", definition.exported_name);
        if entries.iter().any(|entry| entry.id == full_id) {
            return Err(RegistryError::DuplicateId {
                id: full_id,
                declared: definition.declared_name.clone(),
            });
        }
        entries.push(RegistryEntry {
            id: full_id.clone(),
            category: namespace.clone(),
            description: definition.description.clone(),
            inputs: definition.inputs.clone(),
            outputs: definition.outputs.clone(),
            type_signature: full_id,
            display_color: colors.color_for(namespace).to_string(),
        });
    }
    Ok(Registry::new(entries))
}

/// Render the registry as the generated TypeScript module the editor
/// imports.
pub fn render_registry_module(registry: &Registry, clock: &dyn Clock) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "// Code generated by nodereg. DO NOT EDIT.")?;
    writeln!(
        out,
        "// Generated: {}",
        clock.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out)?;
    out.push_str(TYPE_DECLARATIONS);
    writeln!(out)?;

    writeln!(out, "export const NODE_REGISTRY: Record<string, NodeMetadata> = {{")?;
    for entry in registry.entries() {
        let key = serde_json::to_string(&entry.id)?;
        let value = serde_json::to_string_pretty(entry)?;
        writeln!(out, "  {}: {},", key, reindent(&value, "  "))?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    out.push_str(QUERY_HELPERS);
    Ok(out)
}

/// Shift every line after the first by `indent`, so a pretty-printed
/// JSON value nests inside the object literal.
fn reindent(value: &str, indent: &str) -> String {
    let mut lines = value.lines();
    let mut result = lines.next().unwrap_or_default().to_string();
    for line in lines {
        result.push('\n');
        result.push_str(indent);
        result.push_str(line);
    }
    result
}

const TYPE_DECLARATIONS: &str = "\
export interface NodePort {
  id: string;
  label: string;
  type: string;
  required: boolean;
}

export interface NodeMetadata {
  id: string;
  category: string;
  description: string;
  inputs: NodePort[];
  outputs: NodePort[];
  typeSignature: string;
  displayColor: string;
}
";

const QUERY_HELPERS: &str = "\
export function getNodeById(id: string): NodeMetadata | undefined {
  return NODE_REGISTRY[id];
}

export function getNodesByCategory(category: string): NodeMetadata[] {
  return Object.values(NODE_REGISTRY).filter((node) => node.category === category);
}

export function getAllCategories(): string[] {
  return [...new Set(Object.values(NODE_REGISTRY).map((node) => node.category))].sort();
}
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Port, PortRole, TypeCategory};
    use crate::io::FixedClock;
    use chrono::{TimeZone, Utc};

    fn definition(exported: &str, declared: &str) -> NodeDefinition {
        NodeDefinition {
            exported_name: exported.to_string(),
            declared_name: declared.to_string(),
            description: format!("{exported} description"),
            inputs: vec![Port::new("a", TypeCategory::Number, PortRole::Input)],
            outputs: vec![Port::new("out", TypeCategory::Number, PortRole::Output)],
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn entries_keep_input_order_and_full_ids() {
        let definitions = vec![
            ("Numbers".to_string(), definition("Add", "AddNode")),
            ("Numbers".to_string(), definition("Subtract", "SubtractNode")),
            ("Strings".to_string(), definition("Concat", "ConcatNode")),
        ];
        let registry = build_registry(&definitions, &CategoryColors::default()).unwrap();

        let ids: Vec<&str> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Numbers.Add", "Numbers.Subtract", "Strings.Concat"]);

        let add = registry.get("Numbers.Add").unwrap();
        assert_eq!(add.category, "Numbers");
        assert_eq!(add.type_signature, "Numbers.Add");
        assert_eq!(add.display_color, "#3b82f6");
    }

    #[test]
    fn unmapped_namespace_gets_default_color() {
        let definitions = vec![("Quaternions".to_string(), definition("Slerp", "SlerpNode"))];
        let registry = build_registry(&definitions, &CategoryColors::default()).unwrap();
        assert_eq!(registry.entries()[0].display_color, "#6b7280");
    }

    #[test]
    fn duplicate_full_id_is_an_error() {
        let definitions = vec![
            ("Numbers".to_string(), definition("Add", "AddNode")),
            ("Numbers".to_string(), definition("Add", "PlusNode")),
        ];
        let err = build_registry(&definitions, &CategoryColors::default()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                id: "Numbers.Add".to_string(),
                declared: "PlusNode".to_string(),
            }
        );
    }

    #[test]
    fn same_exported_name_in_different_namespaces_is_fine() {
        let definitions = vec![
            ("Numbers".to_string(), definition("Reverse", "ReverseNode")),
            ("Strings".to_string(), definition("Reverse", "ReverseNode")),
        ];
        let registry = build_registry(&definitions, &CategoryColors::default()).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rendered_module_contains_registry_and_helpers() {
        let definitions = vec![("Numbers".to_string(), definition("Add", "AddNode"))];
        let registry = build_registry(&definitions, &CategoryColors::default()).unwrap();
        let module = render_registry_module(&registry, &fixed_clock()).unwrap();

        assert!(module.starts_with("// Code generated by nodereg. DO NOT EDIT."));
        assert!(module.contains("// Generated: 2024-01-01T00:00:00Z"));
        assert!(module.contains("\"Numbers.Add\": {"));
        assert!(module.contains("\"typeSignature\": \"Numbers.Add\""));
        assert!(module.contains("\"type\": \"number\""));
        assert!(module.contains("export function getNodeById"));
        assert!(module.contains("export function getNodesByCategory"));
        assert!(module.contains("export function getAllCategories"));
    }

    #[test]
    fn rendering_is_deterministic_under_a_fixed_clock() {
        let definitions = vec![
            ("Numbers".to_string(), definition("Add", "AddNode")),
            ("Strings".to_string(), definition("Concat", "ConcatNode")),
        ];
        let registry = build_registry(&definitions, &CategoryColors::default()).unwrap();

        let first = render_registry_module(&registry, &fixed_clock()).unwrap();
        let second = render_registry_module(&registry, &fixed_clock()).unwrap();
        assert_eq!(first, second);
    }
}
