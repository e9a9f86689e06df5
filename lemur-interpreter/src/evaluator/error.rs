use std::{
    error::Error,
    fmt::{self, Display},
};

/// A runtime failure. Evaluation short-circuits through `?` the moment one
/// is produced, unwinding every enclosing block.
#[derive(Debug, PartialEq, Eq)]
pub struct EvalError(pub String);

impl Error for EvalError {}

impl Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
