pub mod ast;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Closed vocabulary of port type categories shown by the editor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Number,
    String,
    Boolean,
    Array,
    Object,
    Any,
}

impl TypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Number => "number",
            TypeCategory::String => "string",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Array => "array",
            TypeCategory::Object => "object",
            TypeCategory::Any => "any",
        }
    }
}

/// Which side of a node a port list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortRole {
    Input,
    Output,
}

impl PortRole {
    /// Input ports are always required; output ports never are.
    pub fn required(self) -> bool {
        matches!(self, PortRole::Input)
    }
}

/// One named, typed input or output slot of a node.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Port {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub type_category: TypeCategory,
    pub required: bool,
}

impl Port {
    pub fn new(id: impl Into<String>, type_category: TypeCategory, role: PortRole) -> Self {
        let id = id.into();
        let label = capitalize(&id);
        Self {
            id,
            label,
            type_category,
            required: role.required(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A node interface recognized in one namespace source file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeDefinition {
    /// Public alias the editor shows, e.g. "Add".
    pub exported_name: String,
    /// Interface identifier in the source, e.g. "AddNode".
    pub declared_name: String,
    /// First line of the leading documentation block, empty if absent.
    pub description: String,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

/// One `export * as X from './file'` statement in the manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceExport {
    pub name: String,
    pub path: PathBuf,
}

/// What the root export manifest declares, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct ExportManifest {
    /// Named re-exports (shared utility types); not inspected further.
    pub top_level_names: Vec<String>,
    pub namespaces: Vec<NamespaceExport>,
}

/// One registry record, keyed by `id` (`<namespace>.<exported_name>`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub id: String,
    pub category: String,
    pub description: String,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    pub type_signature: String,
    pub display_color: String,
}

/// The generated node metadata collection, insertion-ordered by
/// (namespace discovery order, in-file declaration order).
#[derive(Clone, Debug, Default, Serialize)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn get(&self, full_id: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id == full_id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&RegistryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
