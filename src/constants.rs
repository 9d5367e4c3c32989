//! Common constants used throughout the scaffoldext application.

/// Reserved top-level namespace for generated extensions
pub const RESERVED_NAMESPACE: &str = "pyscaffoldext";

/// Required prefix for extension project names
pub const PROJECT_PREFIX: &str = "pyscaffoldext-";

/// Redundant package-name prefix that gets stripped
pub const PACKAGE_PREFIX: &str = "pyscaffoldext_";

/// Module name of the generated extension entry point (without extension)
pub const EXTENSION_FILE_NAME: &str = "extension";

/// Name of the config file the mutation step edits
pub const SETUP_CFG: &str = "setup.cfg";

/// Entry-point group consumed by the host's plugin discovery
pub const ENTRY_POINT_GROUP: &str = "pyscaffold.cli";

/// Distribution name of the host scaffolding tool
pub const HOST_TOOL: &str = "pyscaffold";

/// Version of the host scaffolding tool the generated project is pinned to
pub const HOST_TOOL_VERSION: &str = "4.6.0";

/// Test tools declared in the generated `[options.extras_require]` section
pub const TEST_DEPENDENCIES: [&str; 8] = [
    "tox",
    "pre-commit",
    "setuptools_scm",
    "virtualenv",
    "configupdater",
    "pytest",
    "pytest-cov",
    "pytest-xdist",
];
