//! Ranking of the weirdest readings of the whole history.
//!
//! Each reading that closes a full window is scored by its distance to the
//! nearer edge of that window's `mean ± 2·std_dev` interval. Readings lying
//! outside the interval get a negative margin. The readings with the
//! smallest margins are the weirdest ones.

use crate::window::{mean, population_std_dev, window};
use std::cmp::Ordering;

/// Reading paired with its margin to its window bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub margin: f64,
    pub value: f64,
}

impl Candidate {
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.margin
            .total_cmp(&other.margin)
            .then_with(|| self.value.total_cmp(&other.value))
    }
}

/// Score the reading at index `end` against the window it closes.
pub fn score(readings: &[f64], period: usize, end: usize) -> Option<Candidate> {
    let vals = window(readings, period, end)?;
    let avg = mean(vals);
    let half_width = round_1(2.0 * population_std_dev(vals));
    let lower = avg - half_width;
    let upper = avg + half_width;

    let value = readings[end];
    let margin = (upper - value).min(value - lower);
    Some(Candidate { margin, value })
}

/// Score every reading closing a full window, in chronological order.
pub fn candidates(readings: &[f64], period: usize) -> Vec<Candidate> {
    (period.saturating_sub(1)..readings.len())
        .filter_map(|end| score(readings, period, end))
        .collect()
}

/// Select the `n_weird` candidates with the smallest margins.
///
/// Ties are broken by the reading value. Fewer candidates are returned when
/// the history holds fewer full windows.
pub fn rank_outliers(readings: &[f64], period: usize, n_weird: usize) -> Vec<Candidate> {
    let mut ranked = candidates(readings, period);
    ranked.sort_by(Candidate::cmp_rank);
    ranked.truncate(n_weird);
    ranked
}

/// Round to one decimal place from the exact binary value, ties to even.
fn round_1(val: f64) -> f64 {
    format!("{val:.1}").parse().unwrap_or(val)
}
