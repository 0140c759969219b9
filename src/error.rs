use std::path::PathBuf;

/// Exit codes for the CLI process.
///
/// - 1: general error (including IO)
/// - 3: malformed schema specification
///
/// Usage errors exit with 2 from clap before any of this runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    GeneralError = 1,
    SchemaError = 3,
}

/// Why a specification string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaReason {
    #[error("missing `|` between variant name and field list")]
    MissingSeparator,
    #[error("empty variant name")]
    EmptyName,
    #[error("`{0}` is not a valid identifier")]
    InvalidIdent(String),
    #[error("empty field list")]
    NoFields,
    #[error("empty field at position {0}")]
    EmptyField(usize),
    #[error("malformed field descriptor `{text}`: {detail}")]
    BadDescriptor { text: String, detail: String },
    #[error("duplicate variant `{name}` (first defined by spec #{first})")]
    DuplicateVariant { name: String, first: usize },
    #[error("constructor `{name}` clashes with the one for spec #{first}")]
    ConstructorClash { name: String, first: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed specification text. Names the offending spec.
    #[error("invalid specification `{spec}` for `{category}`: {reason}")]
    Schema {
        category: String,
        spec: String,
        reason: SchemaReason,
    },

    /// Cannot create or write the output artifact.
    #[error("IO error for {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Schema { .. } => ExitCode::SchemaError,
            Self::Io { .. } => ExitCode::GeneralError,
        }
    }
}
