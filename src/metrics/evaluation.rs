use std::error::Error;

use serde::Serialize;

use crate::data::book::Book;
use crate::data::dataset::BookDataset;
use crate::metrics::confusion::ConfusionCounts;
use crate::metrics::roc::{auc, roc_curve, RocPoint};
use crate::trees::classifier::DecisionTree;

/// Share of the records used for training in [`evaluate`].
pub const TRAIN_RATIO: f64 = 0.75;

/// Everything measured by one hold-out evaluation round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub confusion: ConfusionCounts,
    pub roc_curve: Vec<RocPoint>,
    pub auc: f64,
}

/// Trains a fresh tree on a shuffled 75% partition of the records and scores
/// its predictions on the remaining 25%.
///
/// Every record must carry a sales status; evaluating unlabelled records
/// would silently score the `Biasa` default, so they are rejected instead.
/// With a fixed `seed` the split, and with it every metric, is reproducible.
pub fn evaluate(books: &[Book], seed: Option<u64>) -> Result<EvaluationMetrics, Box<dyn Error>> {
    if books.iter().any(|book| book.status.is_none()) {
        return Err("Every record must be labelled to take part in an evaluation.".into());
    }

    let dataset = BookDataset::new(books.to_vec());
    let (train, test) = dataset.train_test_split(TRAIN_RATIO, seed)?;

    let mut model = DecisionTree::new();
    let _ = model.fit(train.books());

    let mut counts = ConfusionCounts::new();
    for book in test.books() {
        counts.record(book.status_or_default(), model.predict(book));
    }

    let curve = roc_curve(&counts);
    let area = auc(&curve);

    Ok(EvaluationMetrics {
        accuracy: counts.accuracy(),
        precision: counts.precision(),
        recall: counts.recall(),
        f1: counts.f1(),
        confusion: counts,
        roc_curve: curve,
        auc: area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::book::{Category, CoverType, SalesStatus};

    // Authorship decides the label, so any split of this catalogue trains a
    // model that scores the hold-out partition perfectly.
    fn separable_catalogue() -> Vec<Book> {
        let mut books = Vec::new();
        for index in 0..12 {
            let popular = index % 2 == 0;
            books.push(Book {
                title: format!("Buku {index}"),
                category: Category::Fiksi,
                price: 100_000.0,
                popular_author: popular,
                pages: 200,
                cover: CoverType::Softcover,
                rating: 4.5,
                stock: 10,
                discount: 5.0,
                status: Some(if popular {
                    SalesStatus::Laris
                } else {
                    SalesStatus::Biasa
                }),
                created_at: None,
            });
        }
        books
    }

    #[test]
    fn test_evaluate_scores_the_test_partition() {
        let books = separable_catalogue();
        let metrics = evaluate(&books, Some(3)).unwrap();

        assert_eq!(metrics.confusion.total(), 3);
        assert_eq!(metrics.roc_curve.len(), 3);
        assert!(metrics.accuracy >= 0.0 && metrics.accuracy <= 1.0);
        assert!(metrics.auc >= 0.0 && metrics.auc <= 1.0);
        assert!(metrics.f1.is_finite());
    }

    #[test]
    fn test_evaluate_is_reproducible_with_a_seed() {
        let books = separable_catalogue();

        let first = evaluate(&books, Some(42)).unwrap();
        let second = evaluate(&books, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_rejects_unlabelled_records() {
        let mut books = separable_catalogue();
        books[3].status = None;

        assert!(evaluate(&books, None).is_err());
    }

    #[test]
    fn test_evaluate_single_label_catalogue_stays_finite() {
        let mut books = separable_catalogue();
        for book in &mut books {
            book.status = Some(SalesStatus::Biasa);
        }

        let metrics = evaluate(&books, Some(7)).unwrap();
        // No positives anywhere: the guards keep every metric a number.
        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
        assert!(metrics.auc.is_finite());
    }

    #[test]
    fn test_evaluate_serializes_to_json() {
        let books = separable_catalogue();
        let metrics = evaluate(&books, Some(1)).unwrap();

        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"roc_curve\""));
        assert!(json.contains("\"confusion\""));
    }
}
