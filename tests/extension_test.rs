use scaffoldext::actions::{default_actions, invoke, Extension};
use scaffoldext::config::ConfigUpdater;
use scaffoldext::constants::TEST_DEPENDENCIES;
use scaffoldext::error::{Error, Result};
use scaffoldext::extension::{add_doc_requirements, add_entry_point, CustomExtension};
use scaffoldext::options::Options;
use scaffoldext::structure::{reify, resolve_leaf, Structure};

fn generate(project: &str, namespace: &[&str]) -> Result<(Structure, Options)> {
    let mut opts = Options::new(project);
    opts.namespace = namespace.iter().map(|s| s.to_string()).collect();

    let actions = CustomExtension.activate(default_actions())?;
    invoke(&actions, Structure::new(), opts)
}

fn setupcfg(struct_: &mut Structure, opts: &Options) -> ConfigUpdater {
    let leaf = resolve_leaf(struct_, &[&opts.project, "setup.cfg"]).unwrap();
    let content = reify(leaf, opts).unwrap();
    ConfigUpdater::read_string(&content).unwrap()
}

#[test]
fn test_extension_file_is_generated_under_namespace() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();

    let leaf = resolve_leaf(
        &mut struct_,
        &[
            "pyscaffoldext-some_extension",
            "src",
            "pyscaffoldext",
            "some_extension",
            "extension.py",
        ],
    )
    .unwrap();
    let content = reify(leaf, &opts).unwrap();

    assert!(content.contains("class SomeExtension(Extension):"));
}

#[test]
fn test_entry_point_declaration() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();
    let setupcfg = setupcfg(&mut struct_, &opts);

    assert_eq!(
        setupcfg.get("options.entry_points", "pyscaffold.cli").unwrap(),
        ["some_extension = pyscaffoldext.some_extension.extension:SomeExtension"]
    );
}

#[test]
fn test_install_requires_carries_version_constraint() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();
    let setupcfg = setupcfg(&mut struct_, &opts);

    let requires = setupcfg.get("options", "install_requires").unwrap();
    assert!(requires.contains(&"pyscaffold>=4.6,<5.0".to_string()));
}

#[test]
fn test_testing_extras_declaration() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();
    let setupcfg = setupcfg(&mut struct_, &opts);

    assert_eq!(
        setupcfg.get("options.extras_require", "testing").unwrap(),
        TEST_DEPENDENCIES
    );
}

#[test]
fn test_test_suite_files_are_generated() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();

    for file in ["conftest.py", "helpers.py", "test_custom_extension.py"] {
        let leaf = resolve_leaf(
            &mut struct_,
            &["pyscaffoldext-some_extension", "tests", file],
        )
        .unwrap();
        assert!(!reify(leaf, &opts).unwrap().is_empty());
    }

    let leaf = resolve_leaf(
        &mut struct_,
        &["pyscaffoldext-some_extension", "tests", "helpers.py"],
    )
    .unwrap();
    let helpers = reify(leaf, &opts).unwrap();
    assert!(helpers.contains("def uniqstr():"));
    assert!(helpers.contains("def rmpath(path):"));
}

#[test]
fn test_reserved_namespace_is_accepted() {
    let result = generate("pyscaffoldext-some_extension", &["pyscaffoldext"]);
    let (_, opts) = result.unwrap();
    assert_eq!(opts.namespace, ["pyscaffoldext"]);
}

#[test]
fn test_custom_namespace_is_rejected() {
    let result = generate("pyscaffoldext-some_extension", &["custom", "ns"]);
    match result {
        Err(Error::NamespaceConflict { namespace }) => assert_eq!(namespace, "custom.ns"),
        _ => panic!("Expected NamespaceConflict error"),
    }
}

#[test]
fn test_entry_point_mutator_is_idempotent() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();
    let setupcfg = setupcfg(&mut struct_, &opts);

    let once = add_entry_point(setupcfg, &opts).unwrap();
    let twice = add_entry_point(once.clone(), &opts).unwrap();
    assert_eq!(once.to_string(), twice.to_string());
}

#[test]
fn test_rerunning_pipeline_keeps_existing_files() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();

    let path = [
        "pyscaffoldext-some_extension",
        "src",
        "pyscaffoldext",
        "some_extension",
        "extension.py",
    ];
    let edited = "# user edited this file\n";
    let leaf = resolve_leaf(&mut struct_, &path).unwrap();
    leaf.content = scaffoldext::structure::Content::Literal(edited.to_string());

    // Simulate a re-run over the already generated tree
    let actions = CustomExtension.activate(default_actions()).unwrap();
    let (mut struct_, opts) = invoke(&actions, struct_, opts).unwrap();

    let leaf = resolve_leaf(&mut struct_, &path).unwrap();
    assert_eq!(reify(leaf, &opts).unwrap(), edited);
}

#[test]
fn test_rerunning_pipeline_is_stable_for_setupcfg() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();
    let first = setupcfg(&mut struct_, &opts).to_string();

    let actions = CustomExtension.activate(default_actions()).unwrap();
    let (mut struct_, opts) = invoke(&actions, struct_, opts).unwrap();
    let second = setupcfg(&mut struct_, &opts).to_string();

    assert_eq!(first, second);
}

#[test]
fn test_doc_requirements_are_generated() {
    let (mut struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();

    let leaf = resolve_leaf(
        &mut struct_,
        &["pyscaffoldext-some_extension", "docs", "requirements.txt"],
    )
    .unwrap();
    assert_eq!(reify(leaf, &opts).unwrap(), "pyscaffold\n");
}

#[test]
fn test_doc_requirements_keep_header_and_sort_body() {
    let mut opts = Options::new("pyscaffoldext-some_extension");
    opts.package = "some_extension".to_string();

    let struct_ = scaffoldext::structure::ensure(
        Structure::new(),
        &["pyscaffoldext-some_extension", "docs", "requirements.txt"],
        scaffoldext::structure::Leaf::no_overwrite("# doc tools\nsphinx\nalpha\n"),
    )
    .unwrap();

    let (mut struct_, opts) = add_doc_requirements(struct_, opts).unwrap();
    let leaf = resolve_leaf(
        &mut struct_,
        &["pyscaffoldext-some_extension", "docs", "requirements.txt"],
    )
    .unwrap();

    assert_eq!(reify(leaf, &opts).unwrap(), "# doc tools\nalpha\npyscaffold\nsphinx\n");
}

#[test]
fn test_doc_requirements_are_idempotent() {
    let (struct_, opts) = generate("pyscaffoldext-some_extension", &[]).unwrap();

    let (mut struct_, opts) = add_doc_requirements(struct_, opts).unwrap();
    let leaf = resolve_leaf(
        &mut struct_,
        &["pyscaffoldext-some_extension", "docs", "requirements.txt"],
    )
    .unwrap();

    assert_eq!(reify(leaf, &opts).unwrap(), "pyscaffold\n");
}

#[test]
fn test_project_name_without_prefix_fails_generation() {
    let result = generate("some_extension", &[]);
    assert!(matches!(result, Err(Error::InvalidProjectName { .. })));
}

#[test]
fn test_forced_project_name_is_used_unmodified() {
    let mut opts = Options::new("some_extension");
    opts.force = true;

    let actions = CustomExtension.activate(default_actions()).unwrap();
    let (mut struct_, opts) = invoke(&actions, Structure::new(), opts).unwrap();

    assert_eq!(opts.project, "some_extension");
    assert!(resolve_leaf(
        &mut struct_,
        &["some_extension", "src", "pyscaffoldext", "some_extension", "extension.py"],
    )
    .is_ok());
}
