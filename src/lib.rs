//! Scaffoldext pre-configures generated projects to become scaffolding-tool
//! extensions themselves: it registers its own steps into the generation
//! pipeline, forces the reserved extension namespace, enforces the extension
//! naming convention and wires the generated `setup.cfg` with the entry point
//! and dependency declarations the plugin-discovery mechanism expects.

/// Ordered action pipeline and extension activation
pub mod actions;

/// Command-line interface module for the scaffoldext binary
pub mod cli;

/// Format-preserving `setup.cfg` reading and editing
pub mod config;

/// Common constants used throughout the crate
pub mod constants;

/// Error types and handling
pub mod error;

/// The custom-extension plugin itself
pub mod extension;

/// Logger initialization helpers
pub mod logger;

/// Naming-convention enforcement and class-name derivation
pub mod naming;

/// Reserved-namespace enforcement and package relocation
pub mod namespace;

/// Generation options threaded through the pipeline
pub mod options;

/// Template rendering functionality
pub mod renderer;

/// In-memory project tree: directories, leaves and write policies
pub mod structure;

/// Embedded file templates for the generated project
pub mod templates;

/// Host tool version parsing and dependency constraint computation
pub mod version;
