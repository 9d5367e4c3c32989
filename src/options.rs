//! Generation options threaded through the activation pipeline.
//! Every action receives the options together with the project tree and
//! returns both, so later steps observe earlier steps' mutations.

use crate::constants::PROJECT_PREFIX;

/// Options describing one generation run.
///
/// The host creates this once per run and threads it through every pipeline
/// step by value. The namespace is always an ordered list of segments, even
/// when it has length one.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Project name, also the name of the root directory in the tree
    pub project: String,

    /// Package name nested under the namespace
    pub package: String,

    /// Namespace segments the package is nested under
    pub namespace: Vec<String>,

    /// Keep a non-conforming project name instead of rejecting it
    pub force: bool,

    /// Report what would be written without touching the file system
    pub pretend: bool,

    /// Accumulated install-time dependency declarations
    pub requirements: Vec<String>,

    /// Class name derived from the package name, e.g. `my_ext` -> `MyExt`
    pub class_name: Option<String>,
}

impl Options {
    /// Creates options for the given project with everything else defaulted.
    pub fn new(project: impl Into<String>) -> Self {
        Options { project: project.into(), ..Options::default() }
    }

    /// Default package name: the project name without the reserved prefix,
    /// lowercased, with dashes replaced by underscores.
    pub fn default_package(&self) -> String {
        let name = self.project.strip_prefix(PROJECT_PREFIX).unwrap_or(&self.project);
        name.to_lowercase().replace('-', "_")
    }

    /// The namespace as a dotted string, e.g. `pyscaffoldext`.
    pub fn namespace_path(&self) -> String {
        self.namespace.join(".")
    }

    /// Context for template rendering.
    ///
    /// Mirrors the option names the templates refer to; `namespace` is the
    /// dotted form since that is what appears in generated Python code.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "project": &self.project,
            "package": &self.package,
            "namespace": self.namespace_path(),
            "class_name": self.class_name.as_deref().unwrap_or_default(),
            "requirements": &self.requirements,
        })
    }
}
