use crate::config::Config;
use crate::error::{PackError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Complete package metadata handed to the external packaging tool.
///
/// Field names follow the distribution-metadata conventions the
/// downstream tool expects (`install_requires`, `extras_require`, ...),
/// so the rendered output maps one-to-one onto its inputs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub long_description: String,
    pub long_description_content_type: String,
    pub python_requires: String,
    pub classifiers: Vec<String>,
    pub scripts: Vec<String>,
    pub install_requires: Vec<String>,
    pub include_package_data: bool,
    pub zip_safe: bool,
    // Serialized last: TOML sub-tables must follow all plain keys.
    pub extras_require: BTreeMap<String, Vec<String>>,
}

/// Assembles the package descriptor from configuration, the resolved
/// canonical version, and the file-derived inputs.
///
/// # Arguments
/// * `config` - Loaded descriptor configuration
/// * `version` - Canonical version string (already normalized)
/// * `long_description` - README contents, or `None` to fall back to the
///   short description
/// * `install_requires` - Base requirement specs
pub fn build_descriptor(
    config: &Config,
    version: String,
    long_description: Option<String>,
    install_requires: Vec<String>,
) -> PackageDescriptor {
    let long_description =
        long_description.unwrap_or_else(|| config.package.description.clone());

    PackageDescriptor {
        name: config.package.name.clone(),
        version,
        description: config.package.description.clone(),
        long_description,
        long_description_content_type: "text/markdown".to_string(),
        python_requires: config.package.python_requires.clone(),
        classifiers: config.package.classifiers.clone(),
        scripts: config.package.scripts.clone(),
        install_requires,
        include_package_data: true,
        zip_safe: false,
        extras_require: config.extras.clone(),
    }
}

/// Render a descriptor as pretty TOML for the downstream packaging tool.
pub fn render_descriptor(descriptor: &PackageDescriptor) -> Result<String> {
    toml::to_string_pretty(descriptor)
        .map_err(|e| PackError::descriptor(format!("Cannot serialize descriptor: {}", e)))
}
