use nalgebra::DVector;
use serde::Serialize;

use crate::data::dataset::RealNumber;

const OUTLIER_IQR_FACTOR: f64 = 1.5;

/// Summary of one numeric attribute. All spread measures are population
/// statistics (division by `n`, not `n - 1`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticalReport<T: RealNumber> {
    pub mean: T,
    pub median: T,
    /// Every value tied at the highest frequency, in ascending order.
    pub mode: Vec<T>,
    pub variance: T,
    pub std_dev: T,
    pub min: T,
    pub max: T,
    pub q1: T,
    pub q3: T,
    pub iqr: T,
    pub skewness: T,
    pub kurtosis: T,
}

impl<T: RealNumber> StatisticalReport<T> {
    fn zeroed() -> Self {
        Self {
            mean: T::zero(),
            median: T::zero(),
            mode: Vec::new(),
            variance: T::zero(),
            std_dev: T::zero(),
            min: T::zero(),
            max: T::zero(),
            q1: T::zero(),
            q3: T::zero(),
            iqr: T::zero(),
            skewness: T::zero(),
            kurtosis: T::zero(),
        }
    }
}

/// Computes the descriptive statistics of a numeric sequence.
///
/// Quartiles use linear interpolation between the closest ranks. Skewness is
/// the Fisher-Pearson population coefficient and kurtosis is reported as
/// excess kurtosis; both are `0` for a constant sequence, where they would
/// otherwise be undefined. An empty sequence yields an all-zero report with
/// an empty mode.
///
/// # Arguments
///
/// * `sequence` - The values to summarise.
///
/// # Returns
///
/// The filled-in [`StatisticalReport`].
///
/// ```
/// use laris::stats::describe::basic_stats;
/// use nalgebra::DVector;
///
/// let values = DVector::from_vec(vec![10.0, 20.0, 20.0, 30.0]);
/// let report = basic_stats(&values);
///
/// assert_eq!(report.mean, 20.0);
/// assert_eq!(report.median, 20.0);
/// assert_eq!(report.mode, vec![20.0]);
/// assert_eq!(report.variance, 50.0);
/// ```
pub fn basic_stats<T: RealNumber>(sequence: &DVector<T>) -> StatisticalReport<T> {
    let n = sequence.len();
    if n == 0 {
        return StatisticalReport::zeroed();
    }

    let mut sorted = sequence.iter().cloned().collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n_t = T::from_usize(n).unwrap();
    let mean = sorted.iter().fold(T::zero(), |acc, &value| acc + value) / n_t;

    let mid = n / 2;
    let median = if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / T::from_f64(2.0).unwrap()
    } else {
        sorted[mid]
    };

    let mode = mode_of_sorted(&sorted);

    let variance = sorted
        .iter()
        .fold(T::zero(), |acc, &value| acc + (value - mean).powi(2))
        / n_t;
    let std_dev = variance.sqrt();

    let q1 = quartile(&sorted, 0.25);
    let q3 = quartile(&sorted, 0.75);
    let iqr = q3 - q1;

    let (skewness, kurtosis) = if std_dev == T::zero() {
        (T::zero(), T::zero())
    } else {
        let m3 = sorted
            .iter()
            .fold(T::zero(), |acc, &value| acc + (value - mean).powi(3))
            / n_t;
        let m4 = sorted
            .iter()
            .fold(T::zero(), |acc, &value| acc + (value - mean).powi(4))
            / n_t;
        (
            m3 / std_dev.powi(3),
            m4 / std_dev.powi(4) - T::from_f64(3.0).unwrap(),
        )
    };

    StatisticalReport {
        mean,
        median,
        mode,
        variance,
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        q1,
        q3,
        iqr,
        skewness,
        kurtosis,
    }
}

/// Values strictly outside `[q1 - 1.5 * iqr, q3 + 1.5 * iqr]`, in input
/// order and with duplicates kept.
pub fn detect_outliers<T: RealNumber>(sequence: &DVector<T>) -> Vec<T> {
    let report = basic_stats(sequence);
    let spread = T::from_f64(OUTLIER_IQR_FACTOR).unwrap() * report.iqr;
    let lower = report.q1 - spread;
    let upper = report.q3 + spread;

    sequence
        .iter()
        .cloned()
        .filter(|&value| value < lower || value > upper)
        .collect()
}

/// Quartile by linear interpolation, `position = (n - 1) * fraction`.
fn quartile<T: RealNumber>(sorted: &[T], fraction: f64) -> T {
    let position = (sorted.len() - 1) as f64 * fraction;
    let base = position.floor() as usize;
    let remainder = T::from_f64(position - base as f64).unwrap();

    match sorted.get(base + 1) {
        Some(&next) => sorted[base] + remainder * (next - sorted[base]),
        None => sorted[base],
    }
}

fn mode_of_sorted<T: RealNumber>(sorted: &[T]) -> Vec<T> {
    let mut mode = Vec::new();
    let mut max_frequency = 0;

    let mut index = 0;
    while index < sorted.len() {
        let mut run_end = index + 1;
        while run_end < sorted.len() && sorted[run_end] == sorted[index] {
            run_end += 1;
        }

        let frequency = run_end - index;
        if frequency > max_frequency {
            max_frequency = frequency;
            mode.clear();
            mode.push(sorted[index]);
        } else if frequency == max_frequency {
            mode.push(sorted[index]);
        }

        index = run_end;
    }

    mode
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_basic_stats_interpolated_quartiles() {
        let values = DVector::from_vec(vec![10.0, 20.0, 20.0, 30.0]);
        let report = basic_stats(&values);

        assert_relative_eq!(report.mean, 20.0, epsilon = 1e-6);
        assert_relative_eq!(report.median, 20.0, epsilon = 1e-6);
        assert_eq!(report.mode, vec![20.0]);
        assert_relative_eq!(report.variance, 50.0, epsilon = 1e-6);
        assert_relative_eq!(report.std_dev, 50.0_f64.sqrt(), epsilon = 1e-6);
        assert_relative_eq!(report.min, 10.0, epsilon = 1e-6);
        assert_relative_eq!(report.max, 30.0, epsilon = 1e-6);
        assert_relative_eq!(report.q1, 17.5, epsilon = 1e-6);
        assert_relative_eq!(report.q3, 22.5, epsilon = 1e-6);
        assert_relative_eq!(report.iqr, 5.0, epsilon = 1e-6);
        assert_relative_eq!(report.skewness, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.kurtosis, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_basic_stats_constant_sequence() {
        let values = DVector::from_vec(vec![7.0, 7.0, 7.0]);
        let report = basic_stats(&values);

        assert_relative_eq!(report.mean, 7.0, epsilon = 1e-6);
        assert_relative_eq!(report.median, 7.0, epsilon = 1e-6);
        assert_relative_eq!(report.variance, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.std_dev, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.iqr, 0.0, epsilon = 1e-6);
        assert_eq!(report.mode, vec![7.0]);
        assert_relative_eq!(report.skewness, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.kurtosis, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_basic_stats_empty_sequence() {
        let values = DVector::<f64>::from_vec(vec![]);
        let report = basic_stats(&values);

        assert_relative_eq!(report.mean, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.median, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.min, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.max, 0.0, epsilon = 1e-6);
        assert!(report.mode.is_empty());
    }

    #[test]
    fn test_basic_stats_single_value() {
        let values = DVector::from_vec(vec![42.0]);
        let report = basic_stats(&values);

        assert_relative_eq!(report.mean, 42.0, epsilon = 1e-6);
        assert_relative_eq!(report.median, 42.0, epsilon = 1e-6);
        assert_eq!(report.mode, vec![42.0]);
        assert_relative_eq!(report.q1, 42.0, epsilon = 1e-6);
        assert_relative_eq!(report.q3, 42.0, epsilon = 1e-6);
        assert_relative_eq!(report.variance, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.skewness, 0.0, epsilon = 1e-6);
        assert_relative_eq!(report.kurtosis, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_basic_stats_mode_keeps_all_tied_values() {
        let values = DVector::from_vec(vec![2.0, 1.0, 2.0, 1.0, 3.0]);
        let report = basic_stats(&values);

        assert_eq!(report.mode, vec![1.0, 2.0]);
    }

    #[test]
    fn test_basic_stats_median_odd_length() {
        let values = DVector::from_vec(vec![9.0, 1.0, 5.0, 3.0, 7.0]);
        let report = basic_stats(&values);

        assert_relative_eq!(report.median, 5.0, epsilon = 1e-6);
        assert_relative_eq!(report.q1, 3.0, epsilon = 1e-6);
        assert_relative_eq!(report.q3, 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_basic_stats_quartiles_are_ordered() {
        let values = DVector::from_vec(vec![42.0, 3.0, 17.0, 8.0, 25.0, 3.0, 11.0]);
        let report = basic_stats(&values);

        assert!(report.min <= report.q1);
        assert!(report.q1 <= report.median);
        assert!(report.median <= report.q3);
        assert!(report.q3 <= report.max);
    }

    #[test]
    fn test_basic_stats_skewness_sign() {
        let right_skewed = DVector::from_vec(vec![1.0, 1.0, 1.0, 10.0]);
        let report = basic_stats(&right_skewed);
        assert!(report.skewness > 0.0);

        let uniform = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let report = basic_stats(&uniform);
        assert_relative_eq!(report.kurtosis, -1.36, epsilon = 1e-6);
    }

    #[test]
    fn test_detect_outliers_flags_extremes() {
        let values = DVector::from_vec(vec![
            10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 100.0,
        ]);

        assert_eq!(detect_outliers(&values), vec![100.0]);
    }

    #[test]
    fn test_detect_outliers_keeps_duplicates() {
        let values = DVector::from_vec(vec![
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 10.0,
        ]);

        assert_eq!(detect_outliers(&values), vec![10.0, 10.0]);
    }

    #[test]
    fn test_detect_outliers_values_on_the_fence_stay() {
        // q1 = q3 = 1, iqr = 0, so the fences sit exactly on 1.0.
        let values = DVector::from_vec(vec![1.0, 1.0, 1.0, 1.0, 1.0]);

        assert!(detect_outliers(&values).is_empty());
    }

    #[test]
    fn test_detect_outliers_empty_sequence() {
        let values = DVector::<f64>::from_vec(vec![]);

        assert!(detect_outliers(&values).is_empty());
    }
}
