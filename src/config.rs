//! Conventional paths and display configuration.

/// Export manifest location, relative to the invocation root.
pub const MANIFEST_PATH: &str = "src/nodes/index.ts";

/// Generated registry module location, relative to the invocation root.
pub const OUTPUT_PATH: &str = "src/generated/node-registry.ts";

/// Color for namespaces without a table entry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

/// Immutable category → display color table, injected into the registry
/// emitter.
#[derive(Clone, Debug)]
pub struct CategoryColors {
    entries: &'static [(&'static str, &'static str)],
}

impl CategoryColors {
    pub fn color_for(&self, category: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, color)| *color)
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }
}

impl Default for CategoryColors {
    fn default() -> Self {
        Self {
            entries: &[
                ("Numbers", "#3b82f6"),
                ("Strings", "#10b981"),
                ("Booleans", "#f59e0b"),
                ("Arrays", "#8b5cf6"),
                ("Objects", "#ec4899"),
                ("Logic", "#ef4444"),
                ("Utilities", "#14b8a6"),
            ],
        }
    }
}
