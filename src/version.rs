use regex::Regex;

/// Parsed form of an upstream-supplied version string.
///
/// The raw string is classified before rendering so the branch-prefix
/// conversion and snapshot handling stay explicit instead of being a
/// chain of in-place string edits.
#[derive(Debug, Clone, PartialEq, Eq)]
enum VersionForm {
    /// Plain version core, no branch prefix detected
    Release { core: String },
    /// Version that carried a `{branch}-` prefix, converted to a
    /// `+{branch}` local suffix
    BranchLocal { core: String, branch: String },
}

/// Upstream version string after classification, with the snapshot flag
/// captured from the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedVersion {
    form: VersionForm,
    is_dev: bool,
}

/// Normalizes an upstream version/branch pair into a canonical release
/// version string.
///
/// The transformation, in order:
/// 1. A trailing `-SNAPSHOT` marks a development build; the marker is
///    removed wherever it occurs.
/// 2. A `{branch}-` prefix is converted into a `+{branch}` local suffix.
/// 3. Runs of `-` or `_` become a single `.`.
/// 4. The dotted string is capped at 3 segments. A local suffix attached
///    in step 2 is dropped with the rest if the core alone exceeds the
///    cap; callers relying on the suffix should keep the core short.
/// 5. Development builds get a trailing `.dev`.
///
/// Never fails: malformed input degrades to a best-effort string.
///
/// # Arguments
/// * `raw_version` - Upstream version identifier (non-empty)
/// * `branch` - Source branch name (may be empty)
///
/// # Example
/// ```ignore
/// assert_eq!(normalize("1.2.3-SNAPSHOT", "master"), "1.2.3.dev");
/// assert_eq!(normalize("master-20240101-abcd", "master"), "20240101.abcd+master");
/// ```
pub fn normalize(raw_version: &str, branch: &str) -> String {
    render(parse(raw_version, branch))
}

/// Classify the raw string into a [`ParsedVersion`].
fn parse(raw_version: &str, branch: &str) -> ParsedVersion {
    let is_dev = raw_version.ends_with("-SNAPSHOT");
    let stripped = raw_version.replace("-SNAPSHOT", "");

    let prefix = format!("{}-", branch);
    let form = match stripped.strip_prefix(&prefix) {
        Some(rest) => VersionForm::BranchLocal {
            core: rest.to_string(),
            branch: branch.to_string(),
        },
        None => VersionForm::Release { core: stripped },
    };

    ParsedVersion { form, is_dev }
}

/// Render a [`ParsedVersion`] canonically: join the local suffix, map
/// separator runs to periods, cap at 3 dotted segments, then append the
/// development marker.
fn render(parsed: ParsedVersion) -> String {
    let joined = match parsed.form {
        VersionForm::Release { core } => core,
        VersionForm::BranchLocal { core, branch } => format!("{}+{}", core, branch),
    };

    // Label segments after '+' are period-separated too, so the
    // substitution runs over the whole string.
    let dotted = match Regex::new(r"[-_]+") {
        Ok(re) => re.replace_all(&joined, ".").into_owned(),
        Err(_) => joined,
    };

    let segments: Vec<&str> = dotted.split('.').collect();
    let mut canonical = if segments.len() > 3 {
        segments[..3].join(".")
    } else {
        dotted
    };

    if parsed.is_dev {
        canonical.push_str(".dev");
    }
    canonical
}

/// Check whether a canonical version string is a plain X.Y.Z release.
///
/// Development builds (`.dev`) and branch-local versions (`+branch`) are
/// not plain releases. Used for warning only; non-release strings are
/// still valid descriptor versions.
pub fn is_plain_release(canonical: &str) -> bool {
    semver::Version::parse(canonical)
        .map(|v| v.pre.is_empty() && v.build.is_empty())
        .unwrap_or(false)
}
