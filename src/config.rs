use crate::error::GroundhogError;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Run configuration.
///
/// The period always comes from the command line; the remaining
/// parameters may be loaded from a TOML file (see [`FileConfig`]).
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// Number of readings in a window.
    pub period: usize,
    /// Minimum absolute difference between evolutions to count a switch.
    pub threshold: f64,
    /// Token terminating the input stream.
    pub sentinel: String,
    /// Number of weirdest values reported at termination.
    pub n_weird: usize,
}

/// Optional parameters read from a configuration file.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub threshold: Option<f64>,
    pub sentinel: Option<String>,
    pub n_weird: Option<usize>,
}

impl Config {
    pub const DEFAULT_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_SENTINEL: &'static str = "STOP";
    pub const DEFAULT_N_WEIRD: usize = 5;

    /// Create a [`Config`] with default parameters and the given period.
    ///
    /// # Errors
    /// Returns [`GroundhogError::InvalidPeriodArgument`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self> {
        let config = Self {
            period,
            threshold: Self::DEFAULT_THRESHOLD,
            sentinel: Self::DEFAULT_SENTINEL.to_string(),
            n_weird: Self::DEFAULT_N_WEIRD,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override parameters with the ones present in `file_config`.
    pub fn merge(mut self, file_config: FileConfig) -> Result<Self> {
        if let Some(threshold) = file_config.threshold {
            self.threshold = threshold;
        }
        if let Some(sentinel) = file_config.sentinel {
            self.sentinel = sentinel;
        }
        if let Some(n_weird) = file_config.n_weird {
            self.n_weird = n_weird;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.period < 1 {
            return Err(GroundhogError::InvalidPeriodArgument.into());
        }
        check_num(self.threshold, 0.0..f64::INFINITY).context("invalid threshold")?;
        if self.sentinel.is_empty() {
            bail!("sentinel must not be empty");
        }
        check_num(self.n_weird, 1..).context("invalid number of weird values")?;
        Ok(())
    }
}

impl FileConfig {
    /// Load a [`FileConfig`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        let file_config = toml::from_str(&contents).context("failed to deserialize config")?;
        Ok(file_config)
    }
}

/// Parse the raw period argument.
///
/// # Errors
/// Returns [`GroundhogError::InvalidPeriodArgument`] unless `arg` is an integer greater than zero.
pub fn parse_period(arg: &str) -> Result<usize, GroundhogError> {
    match arg.parse::<usize>() {
        Ok(period) if period > 0 => Ok(period),
        _ => Err(GroundhogError::InvalidPeriodArgument),
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_must_be_positive_integer() {
        assert_eq!(parse_period("7"), Ok(7));
        assert_eq!(parse_period("0"), Err(GroundhogError::InvalidPeriodArgument));
        assert_eq!(parse_period("-3"), Err(GroundhogError::InvalidPeriodArgument));
        assert_eq!(parse_period("3.5"), Err(GroundhogError::InvalidPeriodArgument));
        assert_eq!(parse_period("abc"), Err(GroundhogError::InvalidPeriodArgument));
        assert_eq!(parse_period(""), Err(GroundhogError::InvalidPeriodArgument));
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = Config::new(0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GroundhogError>(),
            Some(&GroundhogError::InvalidPeriodArgument)
        );
    }

    #[test]
    fn defaults() {
        let cfg = Config::new(3).unwrap();
        assert_eq!(cfg.threshold, 0.5);
        assert_eq!(cfg.sentinel, "STOP");
        assert_eq!(cfg.n_weird, 5);
    }

    #[test]
    fn file_values_override_defaults() {
        let file_config: FileConfig = toml::from_str("threshold = 1.5\nsentinel = \"END\"\n").unwrap();
        let cfg = Config::new(4).unwrap().merge(file_config).unwrap();
        assert_eq!(cfg.period, 4);
        assert_eq!(cfg.threshold, 1.5);
        assert_eq!(cfg.sentinel, "END");
        assert_eq!(cfg.n_weird, 5);
    }

    #[test]
    fn invalid_file_values_are_rejected() {
        let negative = FileConfig {
            threshold: Some(-1.0),
            ..Default::default()
        };
        assert!(Config::new(2).unwrap().merge(negative).is_err());

        let empty = FileConfig {
            sentinel: Some(String::new()),
            ..Default::default()
        };
        assert!(Config::new(2).unwrap().merge(empty).is_err());

        let no_weird = FileConfig {
            n_weird: Some(0),
            ..Default::default()
        };
        assert!(Config::new(2).unwrap().merge(no_weird).is_err());
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("period = 3\n").is_err());
    }
}
