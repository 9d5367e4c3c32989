//! In-memory representation of the project to be generated.
//!
//! The tree is a nested ordered mapping from path segment to either a
//! subdirectory or a leaf. A leaf pairs pending file content with the write
//! policy that decides whether an existing file on disk may be overwritten.
//! No I/O happens while the pipeline runs; [`write_tree`] is called once by
//! the binary after every step has finished.

use indexmap::IndexMap;
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::templates;

/// Nested mapping of path segments to directories or file leaves.
pub type Structure = IndexMap<String, Node>;

/// One entry in the project tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A directory containing further entries
    Directory(Structure),
    /// A file with pending content and a write policy
    File(Leaf),
}

/// Pending content of one file together with its write policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub content: Content,
    pub op: FileOp,
}

impl Leaf {
    /// A literal leaf that never overwrites an existing file.
    pub fn no_overwrite(content: impl Into<String>) -> Self {
        Leaf { content: Content::Literal(content.into()), op: FileOp::NoOverwrite }
    }

    /// A deferred leaf rendered from the named embedded template,
    /// never overwriting an existing file.
    pub fn template(name: &'static str) -> Self {
        Leaf { content: Content::Template(name), op: FileOp::NoOverwrite }
    }
}

/// File content: either a literal string or a deferred producer that is
/// rendered from an embedded template when the leaf is reified.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Literal(String),
    Template(&'static str),
}

/// Write policy for a leaf once the tree reaches the file system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileOp {
    /// Replace whatever is on disk
    Overwrite,
    /// Keep an already existing file untouched
    NoOverwrite,
}

/// Resolves a leaf's content to a string, rendering deferred templates.
pub fn reify(leaf: &Leaf, opts: &Options) -> Result<String> {
    match &leaf.content {
        Content::Literal(content) => Ok(content.clone()),
        Content::Template(name) => templates::render(name, opts),
    }
}

/// Inserts a leaf at `path`, creating intermediate directories as needed.
///
/// No-clobber semantics: if the final segment already holds a leaf, the
/// existing content is kept and the new leaf is discarded. An intermediate
/// segment resolving to a file is an ordering bug between steps and fails
/// with [`Error::MissingStructure`].
pub fn ensure(mut struct_: Structure, path: &[&str], leaf: Leaf) -> Result<Structure> {
    insert(&mut struct_, path, leaf)?;
    Ok(struct_)
}

fn insert(current: &mut Structure, path: &[&str], leaf: Leaf) -> Result<()> {
    let (segment, rest) = match path.split_first() {
        Some(parts) => parts,
        None => return Ok(()),
    };

    if rest.is_empty() {
        match current.get(*segment) {
            Some(Node::Directory(_)) => {
                return Err(Error::MissingStructure { path: segment.to_string() })
            }
            Some(Node::File(_)) => {
                debug!("Keeping existing content at '{}'", segment);
            }
            None => {
                current.insert(segment.to_string(), Node::File(leaf));
            }
        }
        return Ok(());
    }

    let entry = current
        .entry(segment.to_string())
        .or_insert_with(|| Node::Directory(Structure::new()));
    match entry {
        Node::Directory(children) => insert(children, rest, leaf),
        Node::File(_) => Err(Error::MissingStructure { path: segment.to_string() }),
    }
}

/// Merges `other` into `base`, recursing into shared directories.
///
/// On a leaf collision the leaf already in `base` wins, so re-running a
/// structure-generation step over an existing tree never replaces content.
pub fn merge(mut base: Structure, other: Structure) -> Result<Structure> {
    for (segment, node) in other {
        match (base.get_mut(&segment), node) {
            (Some(Node::Directory(children)), Node::Directory(new_children)) => {
                let merged = merge(std::mem::take(children), new_children)?;
                *children = merged;
            }
            (Some(Node::File(_)), Node::File(_)) => {
                debug!("Keeping existing content at '{}'", segment);
            }
            (Some(_), _) => {
                return Err(Error::MissingStructure { path: segment });
            }
            (None, node) => {
                base.insert(segment, node);
            }
        }
    }
    Ok(base)
}

/// Returns the leaf at `path` for in-place modification.
///
/// Unlike [`ensure`] this never creates anything; a missing or non-file
/// entry is fatal because it means a step ran before the one that should
/// have produced the file.
pub fn resolve_leaf<'s>(struct_: &'s mut Structure, path: &[&str]) -> Result<&'s mut Leaf> {
    let joined = path.join("/");
    let mut current = struct_;

    let (last, dirs) = path
        .split_last()
        .ok_or_else(|| Error::MissingStructure { path: joined.clone() })?;

    for segment in dirs {
        current = match current.get_mut(*segment) {
            Some(Node::Directory(children)) => children,
            _ => return Err(Error::MissingStructure { path: joined }),
        };
    }

    match current.get_mut(*last) {
        Some(Node::File(leaf)) => Ok(leaf),
        _ => Err(Error::MissingStructure { path: joined }),
    }
}

/// Writes the whole tree below `root`, honoring each leaf's write policy.
///
/// With `pretend` set nothing is written; every path is logged instead so a
/// dry run shows the exact effect of a real one.
pub fn write_tree(
    struct_: &Structure,
    root: &Path,
    opts: &Options,
    pretend: bool,
) -> Result<()> {
    for (segment, node) in struct_ {
        let target = root.join(segment);
        match node {
            Node::Directory(children) => {
                if pretend {
                    info!("Would create directory '{}'", target.display());
                } else {
                    fs::create_dir_all(&target).map_err(Error::IoError)?;
                }
                write_tree(children, &target, opts, pretend)?;
            }
            Node::File(leaf) => {
                if target.exists() && leaf.op == FileOp::NoOverwrite {
                    debug!("Skipping existing file '{}'", target.display());
                    continue;
                }
                let content = reify(leaf, opts)?;
                if pretend {
                    info!("Would write file '{}'", target.display());
                } else {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent).map_err(Error::IoError)?;
                    }
                    fs::write(&target, content).map_err(Error::IoError)?;
                    info!("Created '{}'", target.display());
                }
            }
        }
    }
    Ok(())
}
