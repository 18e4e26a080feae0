use std::fmt;

/// Exit status used for every failed run.
pub const ERROR_EXIT_CODE: i32 = 84;

/// Terminal error kinds of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum GroundhogError {
    /// The window period is missing, non-numeric or not strictly positive.
    InvalidPeriodArgument,
    /// An input line is neither the sentinel nor a finite real number.
    InvalidNumericToken { token: String },
    /// The sentinel arrived before a full window of readings was collected.
    InsufficientDataAtTermination { n_readings: usize, period: usize },
}

impl fmt::Display for GroundhogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroundhogError::InvalidPeriodArgument => {
                write!(f, "period must be an integer strictly greater than zero")
            }
            GroundhogError::InvalidNumericToken { token } => {
                write!(f, "invalid input {token:?}: expected a number or the sentinel")
            }
            GroundhogError::InsufficientDataAtTermination { n_readings, period } => {
                write!(
                    f,
                    "not enough readings: got {n_readings}, but period is {period}"
                )
            }
        }
    }
}

impl std::error::Error for GroundhogError {}
