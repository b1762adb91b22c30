pub mod registry;

pub use registry::{build_registry, render_registry_module, RegistryError};
