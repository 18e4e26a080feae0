use crate::config::Config;
use crate::error::GroundhogError;
use crate::gate::{IngestGate, Outcome};
use crate::outlier::rank_outliers;
use crate::report::{StepRecord, Summary};
use crate::trend::TrendTracker;
use crate::window::{average_increase, relative_evolution, standard_deviation};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Statistics engine.
///
/// Owns the reading sequence and the trend state, and drives the
/// computations for each input token and at the end of the stream.
pub struct Engine {
    cfg: Config,
    gate: IngestGate,
    readings: Vec<f64>,
    tracker: TrendTracker,
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        let gate = IngestGate::new(cfg.sentinel.clone(), cfg.period);
        let tracker = TrendTracker::new(cfg.threshold);
        Self {
            cfg,
            gate,
            readings: Vec::new(),
            tracker,
        }
    }

    /// Read tokens until the sentinel, writing one record per reading and
    /// the summary at the end.
    ///
    /// Reaching the end of input is handled like the sentinel.
    ///
    /// # Errors
    /// Returns an error on a rejected token, on insufficient data at
    /// termination, or if reading or writing fails. Records already written
    /// stay written.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        let mut terminated = false;

        for line in reader.lines() {
            let line = line.context("failed to read input line")?;
            let token = line.strip_suffix('\r').unwrap_or(&line);

            match self.process_token(token)? {
                Some(record) => {
                    writeln!(writer, "{record}").context("failed to write record")?;
                    writer.flush().context("failed to flush writer stream")?;
                }
                None => {
                    terminated = true;
                    break;
                }
            }
        }

        if !terminated {
            log::info!("end of input reached without sentinel");
            if let Outcome::Rejected(error) = self.gate.terminate(&self.readings) {
                return Err(error.into());
            }
        }

        let summary = self.summary();
        writeln!(writer, "{summary}").context("failed to write summary")?;
        writer.flush().context("failed to flush writer stream")?;

        log::info!(
            "processed {} readings, {} switches",
            self.readings().len(),
            summary.n_switches
        );

        Ok(())
    }

    /// Process one token.
    ///
    /// Returns the record of an accepted reading, or `None` once the stream
    /// is terminated.
    pub fn process_token(&mut self, token: &str) -> Result<Option<StepRecord>, GroundhogError> {
        match self.gate.submit(token, &mut self.readings) {
            Outcome::Accepted(val) => {
                log::debug!("accepted reading {val} (#{})", self.readings.len());
                Ok(Some(self.compute_step()))
            }
            Outcome::Terminated => Ok(None),
            Outcome::Rejected(error) => {
                log::warn!("rejected token {token:?}");
                Err(error)
            }
        }
    }

    /// Build the end of stream summary.
    pub fn summary(&self) -> Summary<'_> {
        let ranked = rank_outliers(&self.readings, self.cfg.period, self.cfg.n_weird);
        Summary {
            n_switches: self.tracker.n_switches(),
            weird_values: ranked.iter().map(|cand| cand.value).collect(),
            readings: &self.readings,
        }
    }

    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    fn compute_step(&mut self) -> StepRecord {
        let period = self.cfg.period;

        let average_increase = average_increase(&self.readings, period);
        let relative_evolution = relative_evolution(&self.readings, period);
        let std_dev = standard_deviation(&self.readings, period, None);

        let mut switched = false;
        if let Some(evolution) = relative_evolution {
            self.tracker.record_evolution(evolution);
            switched = self.tracker.evaluate_switch();
        }
        if switched {
            log::debug!("trend switch #{}", self.tracker.n_switches());
        }

        StepRecord {
            average_increase,
            relative_evolution,
            std_dev,
            switched,
        }
    }
}
