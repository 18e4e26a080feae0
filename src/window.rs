//! Rolling statistics over the most recent readings.
//!
//! Every function borrows the reading sequence and returns `None` when
//! there are not enough readings to fill the required window.

/// Get the window of `period` readings ending at index `end` (inclusive).
pub fn window(readings: &[f64], period: usize, end: usize) -> Option<&[f64]> {
    if period == 0 || end >= readings.len() || end + 1 < period {
        return None;
    }
    Some(&readings[end + 1 - period..=end])
}

/// Get the window of `period` readings ending at the latest reading.
pub fn latest_window(readings: &[f64], period: usize) -> Option<&[f64]> {
    let end = readings.len().checked_sub(1)?;
    window(readings, period, end)
}

pub fn mean(vals: &[f64]) -> f64 {
    vals.iter().sum::<f64>() / vals.len() as f64
}

/// Population standard deviation of a window.
pub fn population_std_dev(vals: &[f64]) -> f64 {
    let mean = mean(vals);
    let diff_2_sum: f64 = vals.iter().map(|&val| (val - mean).powi(2)).sum();
    (diff_2_sum / vals.len() as f64).sqrt()
}

/// Average of the increases observed over the last `period` steps.
///
/// Only positive differences between consecutive readings are summed, but
/// the sum is always divided by `period`.
pub fn average_increase(readings: &[f64], period: usize) -> Option<f64> {
    let steps = latest_window(readings, period.checked_add(1)?)?;
    let increase_sum: f64 = steps
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).max(0.0))
        .sum();
    Some(increase_sum / period as f64)
}

/// Relative evolution (in percent) between the latest reading and the one
/// observed `period` steps before.
///
/// When the past reading is zero the division is skipped and the result is
/// the latest reading times 100.
pub fn relative_evolution(readings: &[f64], period: usize) -> Option<f64> {
    let steps = latest_window(readings, period.checked_add(1)?)?;
    let past = steps[0];
    let latest = steps[period];
    if past == 0.0 {
        return Some(latest * 100.0);
    }
    Some((latest - past) / past * 100.0)
}

/// Population standard deviation of the window ending at `end`
/// (the latest reading when `None`).
pub fn standard_deviation(readings: &[f64], period: usize, end: Option<usize>) -> Option<f64> {
    let vals = match end {
        Some(end) => window(readings, period, end)?,
        None => latest_window(readings, period)?,
    };
    Some(population_std_dev(vals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn window_bounds() {
        let readings = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(window(&readings, 2, 1), Some(&readings[0..2]));
        assert_eq!(window(&readings, 2, 3), Some(&readings[2..4]));
        assert_eq!(window(&readings, 3, 1), None);
        assert_eq!(window(&readings, 2, 4), None);
        assert_eq!(window(&readings, 0, 2), None);
        assert_eq!(latest_window(&[], 1), None);
    }

    #[test]
    fn average_increase_divides_by_period() {
        let readings = [10.0, 12.0, 11.0, 15.0];
        assert_eq!(average_increase(&readings[..3], 3), None);
        // (2 + 0 + 4) / 3
        assert_close(average_increase(&readings, 3).unwrap(), 2.0);
    }

    #[test]
    fn average_increase_ignores_older_readings() {
        let readings = [0.0, 100.0, 10.0, 12.0, 11.0, 15.0];
        assert_close(average_increase(&readings, 3).unwrap(), 2.0);
    }

    #[test]
    fn average_increase_of_decreasing_readings_is_zero() {
        let readings = [5.0, 4.0, 3.0];
        let increase = average_increase(&readings, 2).unwrap();
        assert_eq!(increase, 0.0);
        assert!(increase.is_sign_positive());
        assert_eq!(format!("{increase:.2}"), "0.00");
    }

    #[test]
    fn huge_period_is_undefined() {
        assert_eq!(average_increase(&[1.0], usize::MAX), None);
        assert_eq!(relative_evolution(&[1.0], usize::MAX), None);
        assert_eq!(standard_deviation(&[1.0], usize::MAX, None), None);
    }

    #[test]
    fn relative_evolution_percentage() {
        let readings = [10.0, 12.0, 11.0, 15.0];
        assert_eq!(relative_evolution(&readings[..3], 3), None);
        assert_close(relative_evolution(&readings, 3).unwrap(), 50.0);
        assert_close(relative_evolution(&readings, 1).unwrap(), 400.0 / 11.0);
    }

    #[test]
    fn relative_evolution_with_zero_past_reading() {
        let readings = [0.0, 3.0, 2.5];
        assert_close(relative_evolution(&readings, 2).unwrap(), 250.0);
        let readings = [0.0, -1.5];
        assert_close(relative_evolution(&readings, 1).unwrap(), -150.0);
    }

    #[test]
    fn standard_deviation_uses_population_formula() {
        let readings = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_close(standard_deviation(&readings, 8, None).unwrap(), 2.0);
        assert_eq!(standard_deviation(&readings[..7], 8, None), None);
    }

    #[test]
    fn standard_deviation_at_window_end() {
        let readings = [1.0, 3.0, 10.0, 10.0];
        assert_close(standard_deviation(&readings, 2, Some(1)).unwrap(), 1.0);
        assert_close(standard_deviation(&readings, 2, Some(3)).unwrap(), 0.0);
        assert_eq!(standard_deviation(&readings, 2, Some(0)), None);
        assert_eq!(standard_deviation(&readings, 2, Some(4)), None);
    }
}
