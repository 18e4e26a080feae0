//! Printed records.

use std::fmt;

/// Statistics emitted after each accepted reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub average_increase: Option<f64>,
    pub relative_evolution: Option<f64>,
    pub std_dev: Option<f64>,
    pub switched: bool,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_increase {
            Some(val) => write!(f, "g={val:.2}")?,
            None => write!(f, "g=nan")?,
        }
        match self.relative_evolution {
            Some(val) => write!(f, "\t\tr={val:.0}%")?,
            None => write!(f, "\t\tr=nan%")?,
        }
        match self.std_dev {
            Some(val) => write!(f, "\t\ts={val:.2}")?,
            None => write!(f, "\t\ts=nan")?,
        }
        if self.switched {
            write!(f, "\t\ta switch occurs")?;
        }
        Ok(())
    }
}

/// Report emitted once the stream has terminated.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub n_switches: usize,
    pub weird_values: Vec<f64>,
    pub readings: &'a [f64],
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Global tendency switched {} times", self.n_switches)?;
        writeln!(f, "Weird values: {:?}", self.weird_values)?;
        write!(f, "Readings: {:?}", self.readings)
    }
}
