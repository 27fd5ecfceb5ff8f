// tests/descriptor_test.rs
//
// End-to-end descriptor assembly from files on disk, exercising the
// same pipeline the binary runs: load config, read readme and
// requirements, normalize the version, build and render the descriptor.
use chronon_pack::{config, descriptor, requirements, version};
use std::fs;
use tempfile::TempDir;

fn write_project(dir: &TempDir) -> String {
    let root = dir.path();

    fs::write(root.join("README.md"), "# Chronon\n\nClient library.\n").unwrap();

    fs::create_dir(root.join("requirements")).unwrap();
    fs::write(
        root.join("requirements").join("base.in"),
        "# base deps\nclick>=7.0\nthrift==0.13.0\n",
    )
    .unwrap();

    let config_path = root.join("chronon-pack.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[package]
name = "chronon-ai"
readme = "{}"

[requirements]
base = "{}"
"#,
            root.join("README.md").display(),
            root.join("requirements").join("base.in").display()
        ),
    )
    .unwrap();

    config_path.to_str().unwrap().to_string()
}

#[test]
fn test_full_descriptor_from_files() {
    let dir = TempDir::new().unwrap();
    let config_path = write_project(&dir);

    let config = config::load_config(Some(&config_path)).unwrap();
    let canonical = version::normalize("1.2.3-SNAPSHOT", "master");
    let long_description = fs::read_to_string(&config.package.readme).ok();
    let install_requires = requirements::read_requirements(&config.requirements.base).unwrap();

    let built = descriptor::build_descriptor(&config, canonical, long_description, install_requires);

    assert_eq!(built.name, "chronon-ai");
    assert_eq!(built.version, "1.2.3.dev");
    assert!(built.long_description.contains("Client library."));
    assert_eq!(built.long_description_content_type, "text/markdown");
    assert_eq!(built.install_requires, vec!["click>=7.0", "thrift==0.13.0"]);
}

#[test]
fn test_rendered_descriptor_round_trips_version() {
    let dir = TempDir::new().unwrap();
    let config_path = write_project(&dir);

    let config = config::load_config(Some(&config_path)).unwrap();
    let canonical = version::normalize("master-20240101-abcd", "master");
    let built = descriptor::build_descriptor(&config, canonical, None, vec![]);

    let rendered = descriptor::render_descriptor(&built).unwrap();
    let parsed: toml::Value = toml::from_str(&rendered).unwrap();
    assert_eq!(
        parsed.get("version").and_then(|v| v.as_str()),
        Some("20240101.abcd+master")
    );
    assert_eq!(
        parsed.get("python_requires").and_then(|v| v.as_str()),
        Some(">=3.7")
    );
}

#[test]
fn test_missing_requirements_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.in");
    assert!(requirements::read_requirements(&missing).is_err());
}
