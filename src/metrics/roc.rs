use serde::Serialize;

use crate::metrics::confusion::ConfusionCounts;

/// One point of the ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
}

/// Three-point ROC curve for a hard-label classifier: the corners `(0,0)`
/// and `(1,1)` plus the single operating point of the given confusion
/// counts, sorted by false positive rate.
pub fn roc_curve(counts: &ConfusionCounts) -> Vec<RocPoint> {
    let mut curve = vec![
        RocPoint { fpr: 0.0, tpr: 0.0 },
        RocPoint {
            fpr: counts.false_positive_rate(),
            tpr: counts.true_positive_rate(),
        },
        RocPoint { fpr: 1.0, tpr: 1.0 },
    ];

    curve.sort_by(|a, b| a.fpr.partial_cmp(&b.fpr).unwrap_or(std::cmp::Ordering::Equal));
    curve
}

/// Area under the curve by the trapezoidal rule. Assumes the points are
/// sorted by ascending false positive rate, as [`roc_curve`] returns them.
pub fn auc(curve: &[RocPoint]) -> f64 {
    curve
        .windows(2)
        .map(|pair| (pair[1].fpr - pair[0].fpr) * (pair[1].tpr + pair[0].tpr) / 2.0)
        .sum()
}
