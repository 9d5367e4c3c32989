//! Embedded file templates for the generated extension project.
//!
//! Templates are compiled into the binary and resolved by name; rendering
//! goes through the MiniJinja renderer with the options as context.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

/// Embedded templates, looked up by logical name.
const TEMPLATES: [(&str, &str); 9] = [
    ("setup.cfg", include_str!("../templates/setup.cfg.j2")),
    ("init.py", include_str!("../templates/init.py.j2")),
    ("extension.py", include_str!("../templates/extension.py.j2")),
    ("readme", include_str!("../templates/readme.rst.j2")),
    ("contributing", include_str!("../templates/contributing.rst.j2")),
    ("conftest", include_str!("../templates/conftest.py.j2")),
    ("helpers", include_str!("../templates/helpers.py.j2")),
    ("test_custom_extension", include_str!("../templates/test_custom_extension.py.j2")),
    ("publish_package", include_str!("../templates/publish-package.yml.j2")),
];

/// Returns the raw source of the named template.
pub fn get_template(name: &str) -> Result<&'static str> {
    TEMPLATES
        .iter()
        .find(|(template_name, _)| *template_name == name)
        .map(|(_, source)| *source)
        .ok_or_else(|| Error::ConfigError(format!("Unknown template '{}'", name)))
}

/// Renders the named template with the given options as context.
pub fn render(name: &str, opts: &Options) -> Result<String> {
    let source = get_template(name)?;
    let renderer = MiniJinjaRenderer::new();
    renderer.render(source, &opts.context())
}
