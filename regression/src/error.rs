use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

use crate::events::Stage;

/// The result type used in the entire regression crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
///
/// Every variant signals caller misuse or a mathematically undefined result, none of them is
/// transient and none is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    /// A generator or configuration input is outside its domain.
    InvalidParameter { name: &'static str, reason: String },
    /// A stage that needs data received zero points.
    EmptyDataset,
    /// A zero-variance axis makes a division undefined.
    DegenerateInput { what: &'static str },
    /// A stage of the `Analyzer` was invoked before its prerequisite produced output.
    SequenceError { stage: Stage, requires: Stage },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
}

impl RegressionErr {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            RegressionErr::EmptyDataset => {
                write!(f, "the dataset is empty, generate or load data first")
            }
            RegressionErr::DegenerateInput { what } => write!(f, "degenerate input: {what}"),
            RegressionErr::SequenceError { stage, requires } => write!(
                f,
                "the {stage} stage was invoked before the {requires} stage produced its output"
            ),
            RegressionErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "there's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
        }
    }
}

impl Error for RegressionErr {}

impl From<UniformError> for RegressionErr {
    fn from(value: UniformError) -> Self {
        Self::invalid("uniform distribution", value.to_string())
    }
}
