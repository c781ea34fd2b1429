use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used in the entire schema crate.
pub type Result<T> = std::result::Result<T, SchemaErr>;

/// Failures while reading specs and points or writing reports.
#[derive(Debug)]
pub enum SchemaErr {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Parse { line: usize, msg: String },
    Empty { path: PathBuf },
}

impl Display for SchemaErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaErr::Io { path, source } => write!(f, "cannot access '{}': {source}", path.display()),
            SchemaErr::Json(e) => write!(f, "invalid JSON: {e}"),
            SchemaErr::Parse { line, msg } => write!(f, "line {line}: {msg}"),
            SchemaErr::Empty { path } => write!(f, "'{}' contains no points", path.display()),
        }
    }
}

impl Error for SchemaErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SchemaErr::Io { source, .. } => Some(source),
            SchemaErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
