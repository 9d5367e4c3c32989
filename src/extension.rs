//! The custom-extension plugin: registers its steps into the activation
//! pipeline so generated projects come out pre-wired as scaffolding-tool
//! extensions (reserved namespace, naming convention, boilerplate files and
//! `setup.cfg` entry-point/dependency declarations).

use crate::actions::{register, Action, Extension, Position};
use crate::config::ConfigUpdater;
use crate::constants::{
    ENTRY_POINT_GROUP, EXTENSION_FILE_NAME, SETUP_CFG, TEST_DEPENDENCIES,
};
use crate::error::Result;
use crate::naming::{self, enforce_naming_conventions};
use crate::namespace::{apply_namespace, enforce_namespace};
use crate::options::Options;
use crate::structure::{ensure, reify, resolve_leaf, Content, Leaf, Structure};
use crate::version;

/// Configures a project to start creating extensions.
pub struct CustomExtension;

impl Extension for CustomExtension {
    fn name(&self) -> &str {
        "custom-extension"
    }

    /// Inserts this plugin's steps relative to the host's anchors:
    /// option policies right after the defaults are known, tree mutations
    /// right after the baseline structure exists.
    fn activate(&self, actions: Vec<Action>) -> Result<Vec<Action>> {
        let actions = register(
            actions,
            Action::new("enforce_naming_conventions", enforce_naming_conventions),
            Position::After("get_default_options"),
        )?;
        let actions = register(
            actions,
            Action::new("enforce_namespace", enforce_namespace),
            Position::After("enforce_naming_conventions"),
        )?;
        let actions = register(
            actions,
            Action::new("apply_namespace", apply_namespace),
            Position::After("define_structure"),
        )?;
        let actions = register(
            actions,
            Action::new("add_doc_requirements", add_doc_requirements),
            Position::After("apply_namespace"),
        )?;
        register(
            actions,
            Action::new("add_extension_files", add_extension_files),
            Position::After("add_doc_requirements"),
        )
    }
}

/// Pipeline step adding the extension boilerplate files and rewriting the
/// `setup.cfg` leaf.
///
/// Every file is ensured with no-clobber semantics, so re-running the
/// pipeline over an existing tree keeps whatever is already there.
pub fn add_extension_files(
    struct_: Structure,
    mut opts: Options,
) -> Result<(Structure, Options)> {
    let requirement = version::host_requirement()?;
    if !opts.requirements.contains(&requirement) {
        opts.requirements.push(requirement);
    }

    let project = opts.project.clone();
    let package = opts.package.clone();

    let mut struct_ =
        ensure(struct_, &[&project, "README.rst"], Leaf::template("readme"))?;
    struct_ = ensure(
        struct_,
        &[&project, "CONTRIBUTING.rst"],
        Leaf::template("contributing"),
    )?;
    struct_ = ensure(
        struct_,
        &[&project, ".github", "workflows", "publish-package.yml"],
        Leaf::template("publish_package"),
    )?;

    let mut extension_path: Vec<&str> = vec![&project, "src"];
    extension_path.extend(opts.namespace.iter().map(String::as_str));
    extension_path.push(&package);
    let file_name = format!("{}.py", EXTENSION_FILE_NAME);
    extension_path.push(&file_name);
    struct_ = ensure(struct_, &extension_path, Leaf::template("extension.py"))?;

    struct_ = ensure(
        struct_,
        &[&project, "tests", "conftest.py"],
        Leaf::template("conftest"),
    )?;
    struct_ = ensure(
        struct_,
        &[&project, "tests", "helpers.py"],
        Leaf::template("helpers"),
    )?;
    struct_ = ensure(
        struct_,
        &[&project, "tests", "test_custom_extension.py"],
        Leaf::template("test_custom_extension"),
    )?;

    modify_setupcfg(&mut struct_, &opts)?;

    Ok((struct_, opts))
}

/// Requirements needed to build the generated project's docs.
const DOC_REQUIREMENTS: [&str; 1] = ["pyscaffold"];

/// Pipeline step making sure `docs/requirements.txt` lists everything the
/// generated docs build needs.
///
/// The requirement body is kept sorted below any comment header; otherwise
/// pre-commit would flag the freshly generated file on the first run.
pub fn add_doc_requirements(
    mut struct_: Structure,
    opts: Options,
) -> Result<(Structure, Options)> {
    let path = [opts.project.as_str(), "docs", "requirements.txt"];
    let contents = match resolve_leaf(&mut struct_, &path) {
        Ok(leaf) => reify(leaf, &opts)?,
        Err(_) => String::new(),
    };

    let mut requirements: Vec<String> = contents.lines().map(str::to_string).collect();
    requirements.extend(
        DOC_REQUIREMENTS
            .iter()
            .filter(|req| !contents.contains(*req))
            .map(|req| req.to_string()),
    );

    let comments_end = requirements
        .iter()
        .position(|line| !line.is_empty() && !is_commented(line))
        .unwrap_or(0);
    let (comments, body) = requirements.split_at(comments_end);
    let mut body = body.to_vec();
    body.sort();

    let mut new_contents =
        comments.iter().chain(body.iter()).cloned().collect::<Vec<_>>().join("\n");
    new_contents.push('\n');

    match resolve_leaf(&mut struct_, &path) {
        Ok(leaf) => leaf.content = Content::Literal(new_contents),
        Err(_) => {
            struct_ = ensure(struct_, &path, Leaf::no_overwrite(new_contents))?;
        }
    }

    Ok((struct_, opts))
}

fn is_commented(line: &str) -> bool {
    line.trim().starts_with('#')
}

/// Ordered, independently idempotent `setup.cfg` mutators.
type Mutator = fn(ConfigUpdater, &Options) -> Result<ConfigUpdater>;

const MUTATORS: [Mutator; 3] =
    [add_install_requires, add_test_requirements, add_entry_point];

/// Parses the `setup.cfg` leaf, applies every mutator in order and stores
/// the serialized result back, preserving the leaf's write policy.
pub fn modify_setupcfg(struct_: &mut Structure, opts: &Options) -> Result<()> {
    let leaf = resolve_leaf(struct_, &[&opts.project, SETUP_CFG])?;
    let content = reify(leaf, opts)?;

    let mut updater = ConfigUpdater::read_string(&content)?;
    for mutator in MUTATORS {
        updater = mutator(updater, opts)?;
    }

    leaf.content = Content::Literal(updater.to_string());
    Ok(())
}

/// Declares the accumulated install-time dependencies, including the
/// computed host tool version constraint.
pub fn add_install_requires(
    mut setupcfg: ConfigUpdater,
    opts: &Options,
) -> Result<ConfigUpdater> {
    setupcfg.set("options", "install_requires", opts.requirements.clone());
    Ok(setupcfg)
}

/// Declares the `testing` extra with the fixed list of test tools.
pub fn add_test_requirements(
    mut setupcfg: ConfigUpdater,
    _opts: &Options,
) -> Result<ConfigUpdater> {
    setupcfg.set("options.extras_require", "testing", TEST_DEPENDENCIES);
    Ok(setupcfg)
}

/// Declares the entry point the host's plugin discovery loads the generated
/// extension from.
pub fn add_entry_point(
    mut setupcfg: ConfigUpdater,
    opts: &Options,
) -> Result<ConfigUpdater> {
    let class_name = opts
        .class_name
        .clone()
        .unwrap_or_else(|| naming::class_name(&opts.package));
    let value = format!(
        "{} = {}.{}.{}:{}",
        opts.package,
        opts.namespace_path(),
        opts.package,
        EXTENSION_FILE_NAME,
        class_name,
    );

    // Keep the section next to [options] when that anchor exists.
    let section = if !setupcfg.has_section("options.entry_points")
        && setupcfg.has_section("options")
    {
        setupcfg.add_section_after("options.entry_points", "options")?
    } else {
        setupcfg.ensure_section("options.entry_points")
    };
    section.set(ENTRY_POINT_GROUP, [value]);
    Ok(setupcfg)
}
