//! Pipeline driver: manifest → namespace parsing → registry generation.

use crate::analyzers::exports::resolve_exports;
use crate::analyzers::nodes::parse_node_definitions;
use crate::analyzers::parser::parse_source;
use crate::config::{self, CategoryColors};
use crate::core::NodeDefinition;
use crate::io::{self, Clock};
use crate::output::registry::{build_registry, render_registry_module};
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// What a successful run produced, for summary reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationSummary {
    pub namespace_count: usize,
    pub node_count: usize,
}

/// Run the full extraction pipeline against a project root.
///
/// Reads the export manifest at the conventional location, parses every
/// namespace it references, and writes the registry module. Any missing
/// or unreadable source file aborts the run before the output path is
/// touched.
pub fn generate(root: &Path, clock: &dyn Clock) -> Result<GenerationSummary> {
    let manifest_path = root.join(config::MANIFEST_PATH);
    let manifest = resolve_exports(&manifest_path)?;
    debug!(
        "resolved {} namespaces and {} named exports from {}",
        manifest.namespaces.len(),
        manifest.top_level_names.len(),
        manifest_path.display()
    );

    let mut definitions: Vec<(String, NodeDefinition)> = Vec::new();
    for namespace in &manifest.namespaces {
        let content = io::read_file(&namespace.path).with_context(|| {
            format!(
                "Failed to read namespace source {} (re-exported as {})",
                namespace.path.display(),
                namespace.name
            )
        })?;
        let ast = parse_source(&content, &namespace.path)?;
        let nodes = parse_node_definitions(&ast);
        debug!("namespace {}: {} nodes", namespace.name, nodes.len());
        for node in nodes {
            definitions.push((namespace.name.clone(), node));
        }
    }

    let registry = build_registry(&definitions, &CategoryColors::default())?;
    let module = render_registry_module(&registry, clock)?;

    let output_path = root.join(config::OUTPUT_PATH);
    io::write_file_atomic(&output_path, &module)
        .with_context(|| format!("Failed to write registry module {}", output_path.display()))?;

    Ok(GenerationSummary {
        namespace_count: manifest.namespaces.len(),
        node_count: registry.len(),
    })
}
