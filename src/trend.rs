//! Trend switch detection.

use std::collections::VecDeque;

/// Sign of a real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Null,
}

impl Sign {
    pub fn of(val: f64) -> Self {
        if val > 0.0 {
            Sign::Positive
        } else if val < 0.0 {
            Sign::Negative
        } else {
            Sign::Null
        }
    }
}

/// Detects sign reversals between consecutive evolution values.
///
/// Holds the two most recent evolutions and counts every reversal whose
/// amplitude reaches the threshold. The counter never decreases.
#[derive(Debug, Clone)]
pub struct TrendTracker {
    evolutions: VecDeque<f64>,
    threshold: f64,
    n_switches: usize,
}

impl TrendTracker {
    const CAPACITY: usize = 2;

    pub fn new(threshold: f64) -> Self {
        Self {
            evolutions: VecDeque::with_capacity(Self::CAPACITY),
            threshold,
            n_switches: 0,
        }
    }

    /// Push an evolution value, evicting the oldest one when full.
    pub fn record_evolution(&mut self, val: f64) {
        if self.evolutions.len() == Self::CAPACITY {
            self.evolutions.pop_front();
        }
        self.evolutions.push_back(val);
    }

    /// Check whether the two held evolutions form a switch and count it.
    pub fn evaluate_switch(&mut self) -> bool {
        let (Some(&previous), Some(&current)) = (self.evolutions.front(), self.evolutions.get(1))
        else {
            return false;
        };

        let (sign_previous, sign_current) = (Sign::of(previous), Sign::of(current));
        let switched = sign_previous != sign_current
            && sign_previous != Sign::Null
            && sign_current != Sign::Null
            && (current - previous).abs() >= self.threshold;

        if switched {
            self.n_switches += 1;
        }
        switched
    }

    pub fn n_switches(&self) -> usize {
        self.n_switches
    }
}
