use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Represents the complete configuration for chronon-pack.
///
/// Describes the package being distributed, where its text inputs live,
/// and the default release identifiers used when no override is present.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub requirements: RequirementsConfig,

    #[serde(default = "default_extras")]
    pub extras: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_package_name() -> String {
    "chronon-ai".to_string()
}

fn default_description() -> String {
    "Chronon python API library".to_string()
}

fn default_readme() -> String {
    "README.md".to_string()
}

fn default_python_requires() -> String {
    ">=3.7".to_string()
}

/// Returns the default list of entry-point scripts shipped with the package.
fn default_scripts() -> Vec<String> {
    vec![
        "ai/chronon/repo/explore.py".to_string(),
        "ai/chronon/repo/compile.py".to_string(),
        "ai/chronon/repo/run.py".to_string(),
    ]
}

fn default_classifiers() -> Vec<String> {
    vec!["Programming Language :: Python :: 3.7".to_string()]
}

/// Configuration for the distributed package itself.
///
/// Field defaults mirror the published Chronon client metadata; a config
/// file only needs to override what differs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PackageConfig {
    #[serde(default = "default_package_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_readme")]
    pub readme: String,

    #[serde(default = "default_python_requires")]
    pub python_requires: String,

    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,

    #[serde(default = "default_classifiers")]
    pub classifiers: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            name: default_package_name(),
            description: default_description(),
            readme: default_readme(),
            python_requires: default_python_requires(),
            scripts: default_scripts(),
            classifiers: default_classifiers(),
        }
    }
}

fn default_requirements_base() -> String {
    "requirements/base.in".to_string()
}

/// Location of the plain-text dependency lists.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RequirementsConfig {
    #[serde(default = "default_requirements_base")]
    pub base: String,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        RequirementsConfig {
            base: default_requirements_base(),
        }
    }
}

/// Returns the default extras map.
///
/// `pip2compat` keeps cli commands importable from python2 environments.
fn default_extras() -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    map.insert("pip2compat".to_string(), vec!["click<8".to_string()]);
    map
}

fn default_version_str() -> String {
    "local".to_string()
}

fn default_branch_str() -> String {
    "master".to_string()
}

/// Default release identifiers, used when neither the environment nor
/// the command line provides an override.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_version_str")]
    pub version: String,

    #[serde(default = "default_branch_str")]
    pub branch: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            version: default_version_str(),
            branch: default_branch_str(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package: PackageConfig::default(),
            requirements: RequirementsConfig::default(),
            extras: default_extras(),
            release: ReleaseConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `chronon-pack.toml` in current directory
/// 3. `chronon-pack.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./chronon-pack.toml").exists() {
        fs::read_to_string("./chronon-pack.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("chronon-pack.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_package() {
        let config = Config::default();
        assert_eq!(config.package.name, "chronon-ai");
        assert_eq!(config.package.python_requires, ">=3.7");
        assert_eq!(config.package.scripts.len(), 3);
    }

    #[test]
    fn test_default_release_identifiers() {
        let config = Config::default();
        assert_eq!(config.release.version, "local");
        assert_eq!(config.release.branch, "master");
    }

    #[test]
    fn test_default_extras() {
        let config = Config::default();
        assert_eq!(
            config.extras.get("pip2compat"),
            Some(&vec!["click<8".to_string()])
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[package]
name = "custom-client"

[release]
branch = "main"
"#,
        )
        .unwrap();

        assert_eq!(config.package.name, "custom-client");
        assert_eq!(config.package.readme, "README.md");
        assert_eq!(config.release.branch, "main");
        assert_eq!(config.release.version, "local");
        assert_eq!(config.requirements.base, "requirements/base.in");
    }
}
