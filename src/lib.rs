// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod output;

// Re-export commonly used types
pub use crate::core::{
    ExportManifest, NamespaceExport, NodeDefinition, Port, PortRole, Registry, RegistryEntry,
    TypeCategory,
};

pub use crate::analyzers::{
    classify_type, extract_ports, parse_manifest, parse_node_definitions, parse_source,
    resolve_exports,
};

pub use crate::commands::generate::{generate, GenerationSummary};

pub use crate::config::CategoryColors;

pub use crate::io::{Clock, FixedClock, SystemClock};

pub use crate::output::registry::{build_registry, render_registry_module, RegistryError};
