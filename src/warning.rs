use std::fmt;

/// Warnings raised while assembling the package descriptor.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PackagingWarning {
    /// Canonical version is not a plain X.Y.Z release
    NonReleaseVersion { version: String },
    /// Requirements file produced no dependency specs
    EmptyRequirements { path: String },
    /// Long description file could not be read
    MissingLongDescription { path: String },
}

impl fmt::Display for PackagingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingWarning::NonReleaseVersion { version } => {
                write!(
                    f,
                    "Version '{}' is not a plain release (dev build or branch-local)",
                    version
                )
            }
            PackagingWarning::EmptyRequirements { path } => {
                write!(f, "Requirements file '{}' contains no dependency specs", path)
            }
            PackagingWarning::MissingLongDescription { path } => {
                write!(
                    f,
                    "Cannot read long description '{}', falling back to short description",
                    path
                )
            }
        }
    }
}
