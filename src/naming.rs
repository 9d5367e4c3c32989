//! Naming-convention enforcement for extension projects.
//!
//! The convention: the project name carries the `pyscaffoldext-` prefix
//! (it is how extensions are found on the package index), while the package
//! name must not repeat it, because the namespace already implies it.

use log::warn;

use crate::constants::{PACKAGE_PREFIX, PROJECT_PREFIX};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::structure::Structure;

/// Derives the extension class name from a package name: underscore
/// segments are capitalized and concatenated without separator.
///
/// `my_extension` -> `MyExtension`, `a_b_c` -> `ABC`.
pub fn class_name(package: &str) -> String {
    package.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Pipeline step validating the project name and normalizing the package
/// name, then storing the derived class name in the options.
///
/// A project name without the required prefix is rejected unless `force` is
/// set, in which case generation proceeds with the name unmodified. A
/// redundant `pyscaffoldext_` package prefix is stripped with a warning.
pub fn enforce_naming_conventions(
    struct_: Structure,
    mut opts: Options,
) -> Result<(Structure, Options)> {
    if !opts.project.starts_with(PROJECT_PREFIX) {
        if !opts.force {
            return Err(Error::InvalidProjectName { name: opts.project });
        }
        warn!(
            "Project name '{}' does not start with '{}'; keeping it because --force is set",
            opts.project, PROJECT_PREFIX
        );
    }

    if let Some(stripped) = opts.package.strip_prefix(PACKAGE_PREFIX) {
        warn!(
            "Package name '{}' repeats the namespace; using '{}' instead",
            opts.package, stripped
        );
        opts.package = stripped.to_string();
    }

    opts.class_name = Some(class_name(&opts.package));
    Ok((struct_, opts))
}
