use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, SvmErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum SvmErr {
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    IndexOutOfRange {
        row: usize,
        label: usize,
        classes: usize,
    },
    EmptyBatch,
    InvalidConfig(serde_json::Error),
}

impl Display for SvmErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SvmErr::DimensionMismatch {
                what,
                got,
                expected,
            } => format!("There's a dimension mismatch in {what}, got {got} and expected {expected}"),
            SvmErr::IndexOutOfRange {
                row,
                label,
                classes,
            } => format!(
                "The label {label} of the {row}-th example is out of range, there are only {classes} classes"
            ),
            SvmErr::EmptyBatch => "Can't average the loss over a batch with no examples".to_string(),
            SvmErr::InvalidConfig(e) => format!("Failed to parse the loss configuration: {e}"),
        };

        write!(f, "{s}")
    }
}

impl Error for SvmErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SvmErr::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SvmErr {
    fn from(e: serde_json::Error) -> Self {
        SvmErr::InvalidConfig(e)
    }
}
