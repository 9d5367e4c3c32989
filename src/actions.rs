//! Ordered pipeline of named generation steps.
//!
//! The host collects actions from every active extension into one ordered
//! list and then invokes them sequentially, threading the `(tree, options)`
//! pair through each. Extensions insert their own actions relative to named
//! anchors with [`register`].

use log::debug;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::structure::{ensure, Leaf, Structure};

/// A pipeline step: a pure transformation over the tree/options pair.
pub type ActionFn = fn(Structure, Options) -> Result<(Structure, Options)>;

/// A named step in the activation pipeline.
#[derive(Debug, Clone)]
pub struct Action {
    pub name: &'static str,
    pub run: ActionFn,
}

impl Action {
    pub fn new(name: &'static str, run: ActionFn) -> Self {
        Action { name, run }
    }
}

/// Where to insert an action relative to a named anchor.
#[derive(Debug, Clone, Copy)]
pub enum Position<'a> {
    Before(&'a str),
    After(&'a str),
}

/// A named step provider.
///
/// An extension contributes its steps by rewriting the accumulated action
/// list; it does not execute anything itself.
pub trait Extension {
    /// Flag name under which the extension is activated.
    fn name(&self) -> &str;

    /// Returns the action list with this extension's steps inserted.
    fn activate(&self, actions: Vec<Action>) -> Result<Vec<Action>>;
}

/// Returns a new action list with `action` inserted immediately before or
/// after the anchor named in `position`.
///
/// # Errors
/// * `Error::ActionNotFound` if no action carries the anchor name
pub fn register(
    actions: Vec<Action>,
    action: Action,
    position: Position<'_>,
) -> Result<Vec<Action>> {
    let (anchor, offset) = match position {
        Position::Before(name) => (name, 0),
        Position::After(name) => (name, 1),
    };

    let index = actions
        .iter()
        .position(|a| a.name == anchor)
        .ok_or_else(|| Error::ActionNotFound { name: anchor.to_string() })?;

    let mut actions = actions;
    actions.insert(index + offset, action);
    Ok(actions)
}

/// Executes every action in order, threading the tree/options pair through.
/// The first failing action aborts the run before anything reaches disk.
pub fn invoke(
    actions: &[Action],
    mut struct_: Structure,
    mut opts: Options,
) -> Result<(Structure, Options)> {
    for action in actions {
        debug!("Running action '{}'", action.name);
        (struct_, opts) = (action.run)(struct_, opts)?;
    }
    Ok((struct_, opts))
}

/// The host-provided baseline pipeline extensions hook into.
pub fn default_actions() -> Vec<Action> {
    vec![
        Action::new("get_default_options", get_default_options),
        Action::new("define_structure", define_structure),
    ]
}

/// Fills in derived option defaults: the package name falls back to the
/// project name without prefix and with dashes turned into underscores.
pub fn get_default_options(
    struct_: Structure,
    mut opts: Options,
) -> Result<(Structure, Options)> {
    if opts.package.is_empty() {
        opts.package = opts.default_package();
    }
    Ok((struct_, opts))
}

/// Builds the baseline project skeleton: `setup.cfg` plus the package
/// directory under `src/`. Extension steps reshape this afterwards.
pub fn define_structure(
    struct_: Structure,
    opts: Options,
) -> Result<(Structure, Options)> {
    let project = opts.project.clone();
    let package = opts.package.clone();

    let mut struct_ =
        ensure(struct_, &[&project, "setup.cfg"], Leaf::template("setup.cfg"))?;
    struct_ = ensure(
        struct_,
        &[&project, "src", &package, "__init__.py"],
        Leaf::template("init.py"),
    )?;
    struct_ = ensure(struct_, &[&project, "tests", "__init__.py"], Leaf::no_overwrite(""))?;

    Ok((struct_, opts))
}
