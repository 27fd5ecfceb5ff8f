use crate::config::ReleaseConfig;
use std::env;

/// Environment override for the upstream version identifier.
pub const VERSION_ENV: &str = "CHRONON_VERSION_STR";
/// Environment override for the source branch identifier.
pub const BRANCH_ENV: &str = "CHRONON_BRANCH_STR";

/// Resolved ambient release identifiers, ready to feed the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInputs {
    pub version: String,
    pub branch: String,
}

/// Resolves the ambient version/branch pair.
///
/// Precedence per identifier: command-line flag, then environment
/// variable, then the config-file default. Resolution happens here, at
/// the entry point, so the normalizer itself stays pure.
///
/// # Arguments
/// * `cli_version` - `--version-str` flag value, if given
/// * `cli_branch` - `--branch` flag value, if given
/// * `defaults` - Release defaults from configuration
pub fn resolve(
    cli_version: Option<&str>,
    cli_branch: Option<&str>,
    defaults: &ReleaseConfig,
) -> ReleaseInputs {
    ReleaseInputs {
        version: resolve_one(cli_version, VERSION_ENV, &defaults.version),
        branch: resolve_one(cli_branch, BRANCH_ENV, &defaults.branch),
    }
}

fn resolve_one(cli: Option<&str>, env_name: &str, default: &str) -> String {
    if let Some(value) = cli {
        return value.to_string();
    }
    match env::var(env_name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn defaults() -> ReleaseConfig {
        ReleaseConfig::default()
    }

    #[test]
    #[serial]
    fn test_defaults_when_nothing_set() {
        env::remove_var(VERSION_ENV);
        env::remove_var(BRANCH_ENV);

        let inputs = resolve(None, None, &defaults());
        assert_eq!(inputs.version, "local");
        assert_eq!(inputs.branch, "master");
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        env::set_var(VERSION_ENV, "1.2.3-SNAPSHOT");
        env::set_var(BRANCH_ENV, "main");

        let inputs = resolve(None, None, &defaults());
        assert_eq!(inputs.version, "1.2.3-SNAPSHOT");
        assert_eq!(inputs.branch, "main");

        env::remove_var(VERSION_ENV);
        env::remove_var(BRANCH_ENV);
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        env::set_var(VERSION_ENV, "from-env");

        let inputs = resolve(Some("from-cli"), None, &defaults());
        assert_eq!(inputs.version, "from-cli");

        env::remove_var(VERSION_ENV);
    }

    #[test]
    #[serial]
    fn test_empty_env_value_falls_back() {
        env::set_var(VERSION_ENV, "");

        let inputs = resolve(None, None, &defaults());
        assert_eq!(inputs.version, "local");

        env::remove_var(VERSION_ENV);
    }
}
