//! Reserved-namespace enforcement.
//!
//! Generated extensions always live under the `pyscaffoldext` namespace so
//! the host's plugin discovery can group them. A user-supplied namespace is
//! rejected instead of silently merged or dropped.

use crate::constants::RESERVED_NAMESPACE;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::structure::{merge, Node, Structure};

/// Pipeline step fixing the namespace to `["pyscaffoldext"]`.
///
/// # Errors
/// * `Error::NamespaceConflict` if the options already carry a namespace
///   other than the reserved one
pub fn enforce_namespace(
    struct_: Structure,
    mut opts: Options,
) -> Result<(Structure, Options)> {
    if !opts.namespace.is_empty() && opts.namespace != [RESERVED_NAMESPACE] {
        return Err(Error::NamespaceConflict { namespace: opts.namespace_path() });
    }
    opts.namespace = vec![RESERVED_NAMESPACE.to_string()];
    Ok((struct_, opts))
}

/// Pipeline step relocating `src/<package>` to `src/<namespace>/<package>`
/// inside the tree.
///
/// Runs after the baseline structure exists; a missing package directory is
/// an ordering bug and fails with [`Error::MissingStructure`].
pub fn apply_namespace(
    mut struct_: Structure,
    opts: Options,
) -> Result<(Structure, Options)> {
    let src = src_dir(&mut struct_, &opts)?;
    let removed = src.shift_remove(&opts.package);

    // Walk down the namespace segments, creating directories as needed,
    // and re-attach the package directory at the bottom.
    let mut current = src;
    for segment in &opts.namespace {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Node::Directory(Structure::new()));
        current = match entry {
            Node::Directory(children) => children,
            Node::File(_) => {
                return Err(Error::MissingStructure { path: segment.clone() })
            }
        };
    }

    match (current.get_mut(&opts.package), removed) {
        // Re-run over an already namespaced tree: keep what is there.
        (Some(Node::Directory(existing)), Some(Node::Directory(new))) => {
            *existing = merge(std::mem::take(existing), new)?;
        }
        (Some(Node::Directory(_)), None) => {}
        (None, Some(node)) => {
            current.insert(opts.package.clone(), node);
        }
        _ => {
            return Err(Error::MissingStructure {
                path: format!("{}/src/{}", opts.project, opts.package),
            })
        }
    }

    Ok((struct_, opts))
}

fn src_dir<'s>(struct_: &'s mut Structure, opts: &Options) -> Result<&'s mut Structure> {
    let missing = || Error::MissingStructure { path: format!("{}/src", opts.project) };

    let project = match struct_.get_mut(&opts.project) {
        Some(Node::Directory(children)) => children,
        _ => return Err(missing()),
    };
    match project.get_mut("src") {
        Some(Node::Directory(children)) => Ok(children),
        _ => Err(missing()),
    }
}
