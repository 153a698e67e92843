use serde::Serialize;

use crate::data::book::SalesStatus;

/// Two-class confusion counts with `Laris` as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one actual/predicted label pair to the counts.
    ///
    /// # Arguments
    ///
    /// * `actual` - The true label.
    /// * `predicted` - The label the model produced.
    pub fn record(&mut self, actual: SalesStatus, predicted: SalesStatus) {
        match (actual, predicted) {
            (SalesStatus::Laris, SalesStatus::Laris) => self.tp += 1,
            (SalesStatus::Biasa, SalesStatus::Biasa) => self.tn += 1,
            (SalesStatus::Biasa, SalesStatus::Laris) => self.fp += 1,
            (SalesStatus::Laris, SalesStatus::Biasa) => self.fn_ += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// Computes the share of correct predictions.
    ///
    /// # Returns
    ///
    /// The accuracy as a `f64`, `0.0` when no pairs have been recorded.
    pub fn accuracy(&self) -> f64 {
        (self.tp + self.tn) as f64 / guard_denominator(self.total())
    }

    /// Computes the precision of the positive class.
    ///
    /// # Returns
    ///
    /// The precision as a `f64`, `0.0` when nothing was predicted positive.
    pub fn precision(&self) -> f64 {
        self.tp as f64 / guard_denominator(self.tp + self.fp)
    }

    /// Computes the recall of the positive class.
    ///
    /// # Returns
    ///
    /// The recall as a `f64`, `0.0` when no positives were present.
    pub fn recall(&self) -> f64 {
        self.tp as f64 / guard_denominator(self.tp + self.fn_)
    }

    /// Computes the F1 score, the harmonic mean of precision and recall.
    ///
    /// # Returns
    ///
    /// The F1 score as a `f64`, `0.0` when precision and recall are both `0`.
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        let denominator = if precision + recall > 0.0 {
            precision + recall
        } else {
            1.0
        };
        2.0 * precision * recall / denominator
    }

    pub fn true_positive_rate(&self) -> f64 {
        self.recall()
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.fp as f64 / guard_denominator(self.fp + self.tn)
    }
}

// Zero denominators are replaced by 1 so every derived rate stays a finite
// number instead of NaN.
fn guard_denominator(denominator: usize) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        denominator as f64
    }
}
