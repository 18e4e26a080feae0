use crate::error::GroundhogError;

/// Outcome of submitting one input token.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The token was a number and has been appended to the readings.
    Accepted(f64),
    /// The sentinel arrived after enough readings were collected.
    Terminated,
    /// The run must abort.
    Rejected(GroundhogError),
}

/// Validates input tokens and appends accepted readings.
pub struct IngestGate {
    sentinel: String,
    period: usize,
}

impl IngestGate {
    pub fn new(sentinel: String, period: usize) -> Self {
        Self { sentinel, period }
    }

    /// Submit a token, appending it to `readings` when it is a finite number.
    pub fn submit(&self, token: &str, readings: &mut Vec<f64>) -> Outcome {
        if token == self.sentinel {
            return self.terminate(readings);
        }
        match token.parse::<f64>() {
            Ok(val) if val.is_finite() => {
                readings.push(val);
                Outcome::Accepted(val)
            }
            _ => Outcome::Rejected(GroundhogError::InvalidNumericToken {
                token: token.to_string(),
            }),
        }
    }

    /// Handle the end of the stream, whether by sentinel or by end of input.
    pub fn terminate(&self, readings: &[f64]) -> Outcome {
        if readings.len() < self.period {
            return Outcome::Rejected(GroundhogError::InsufficientDataAtTermination {
                n_readings: readings.len(),
                period: self.period,
            });
        }
        Outcome::Terminated
    }
}
