use crate::error::{PackError, Result};
use std::fs;
use std::path::Path;

/// Reads the base dependency declarations from a plain-text requirements
/// file.
///
/// One requirement spec per line. Blank lines and `#` comment lines are
/// skipped, inline comments are stripped, and surrounding whitespace is
/// trimmed.
///
/// # Arguments
/// * `path` - Path to the requirements file (e.g. `requirements/base.in`)
///
/// # Returns
/// * `Ok(Vec<String>)` - Requirement specs in file order
/// * `Err` - If the file cannot be read
pub fn read_requirements(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        PackError::requirements(format!(
            "Cannot read requirements file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(parse_requirements(&contents))
}

/// Parse requirement specs out of raw requirements-file text.
pub fn parse_requirements(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| {
            let spec = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            let spec = spec.trim();
            if spec.is_empty() {
                None
            } else {
                Some(spec.to_string())
            }
        })
        .collect()
}
