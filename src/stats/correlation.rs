use nalgebra::DVector;
use std::error::Error;

use crate::data::dataset::RealNumber;

/// Computes the Pearson correlation coefficient between two sequences.
///
/// Returns `0` when either sequence has zero variance (or is empty), where
/// the coefficient would otherwise be undefined. Mismatched lengths are an
/// error.
pub fn pearson<T: RealNumber>(x: &DVector<T>, y: &DVector<T>) -> Result<T, Box<dyn Error>> {
    if x.len() != y.len() {
        return Err("Correlation inputs are of different sizes.".into());
    }

    let n = x.len();
    if n == 0 {
        return Ok(T::zero());
    }

    let n_t = T::from_usize(n).unwrap();
    let mean_x = x.sum() / n_t;
    let mean_y = y.sum() / n_t;

    let covariance = x
        .iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&xi, &yi)| {
            acc + (xi - mean_x) * (yi - mean_y)
        });
    let spread_x = x
        .iter()
        .fold(T::zero(), |acc, &xi| acc + (xi - mean_x).powi(2));
    let spread_y = y
        .iter()
        .fold(T::zero(), |acc, &yi| acc + (yi - mean_y).powi(2));

    let denominator = (spread_x * spread_y).sqrt();
    if denominator == T::zero() {
        return Ok(T::zero());
    }

    Ok(covariance / denominator)
}
