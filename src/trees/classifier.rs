//! Decision Tree Classifier
use std::collections::HashMap;

use crate::data::book::{Book, SalesStatus};
use crate::trees::attribute::Attribute;
use crate::trees::node::TreeNode;
use crate::trees::view::{FeatureImportance, TreeView};

const FALLBACK_RATING_LIMIT: f64 = 4.0;

/// Result of a [`DecisionTree::fit`] call.
#[must_use = "fitting an empty catalogue leaves the model unchanged; check the outcome"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// A new tree was induced from the given records.
    Fitted,
    /// The input was empty; any previously trained tree stays in place.
    Unchanged,
}

/// ID3-style classifier over discretized book attributes. Each internal node
/// splits on the attribute with the highest information gain; an attribute is
/// used at most once per path.
pub struct DecisionTree {
    root: Option<TreeNode>,
    importance_scores: HashMap<Attribute, f64>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    pub fn new() -> Self {
        let importance_scores = Attribute::ALL
            .iter()
            .map(|&attribute| (attribute, 0.0))
            .collect();
        Self {
            root: None,
            importance_scores,
        }
    }

    pub fn is_trained(&self) -> bool {
        self.root.is_some()
    }

    /// Rebuilds the tree from scratch over the given records. Unlabelled
    /// records count as `Biasa`. Importance scores are reset on every
    /// successful fit.
    pub fn fit(&mut self, books: &[Book]) -> FitOutcome {
        if books.is_empty() {
            return FitOutcome::Unchanged;
        }

        for score in self.importance_scores.values_mut() {
            *score = 0.0;
        }
        self.root = Some(self.build_tree(books, &Attribute::ALL));
        FitOutcome::Fitted
    }

    /// Walks the tree to a leaf. An untrained model predicts `Biasa`. When a
    /// record's bin was never seen during training the walk stops and a
    /// heuristic takes over: popular authors rated at least 4.0 are `Laris`,
    /// everything else `Biasa`.
    pub fn predict(&self, book: &Book) -> SalesStatus {
        let mut node = match &self.root {
            Some(root) => root,
            None => return SalesStatus::Biasa,
        };

        loop {
            match node {
                TreeNode::Leaf { prediction, .. } => return *prediction,
                TreeNode::Internal { attribute, .. } => {
                    match node.child(attribute.discretize(book)) {
                        Some(child) => node = child,
                        None => return fallback_label(book),
                    }
                }
            }
        }
    }

    /// Importance of every attribute as a percentage of the total
    /// gain-weighted score, in descending order. All zero when the model is
    /// untrained or the tree is a single leaf.
    pub fn feature_importance(&self) -> Vec<FeatureImportance> {
        let total = self.importance_scores.values().sum::<f64>();

        let mut ranking = Attribute::ALL
            .iter()
            .map(|&attribute| {
                let score = self
                    .importance_scores
                    .get(&attribute)
                    .copied()
                    .unwrap_or(0.0);
                let importance = if total > 0.0 {
                    score / total * 100.0
                } else {
                    0.0
                };
                FeatureImportance {
                    attribute,
                    importance,
                }
            })
            .collect::<Vec<_>>();

        ranking.sort_by(|a, b| {
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranking
    }

    /// Display rendering of the trained tree, or `None` before training.
    pub fn tree_structure(&self) -> Option<TreeView> {
        self.root.as_ref().map(TreeView::from_node)
    }

    fn build_tree(&mut self, books: &[Book], attributes: &[Attribute]) -> TreeNode {
        let samples = books.len();
        let entropy = label_entropy(books);

        if let Some(first) = books.first() {
            let label = first.status_or_default();
            if books.iter().all(|book| book.status_or_default() == label) {
                return TreeNode::Leaf {
                    prediction: label,
                    samples,
                    entropy,
                };
            }
        }

        if attributes.is_empty() || samples < 2 {
            return TreeNode::Leaf {
                prediction: majority_label(books),
                samples,
                entropy,
            };
        }

        let (best, gain) = find_best_split(books, attributes, entropy);
        *self.importance_scores.entry(best).or_insert(0.0) += gain * samples as f64;

        let remaining = attributes
            .iter()
            .copied()
            .filter(|attribute| *attribute != best)
            .collect::<Vec<_>>();

        let children = partition_by_bin(books, best)
            .into_iter()
            .map(|(bin, subset)| (bin, self.build_tree(&subset, &remaining)))
            .collect();

        TreeNode::Internal {
            attribute: best,
            children,
            samples,
            entropy,
        }
    }
}

/// Shannon entropy (base 2) of the sales labels. Unlabelled records count as
/// `Biasa`; an empty or single-label group has entropy `0`.
pub fn label_entropy(books: &[Book]) -> f64 {
    if books.is_empty() {
        return 0.0;
    }

    let total = books.len() as f64;
    let laris = books
        .iter()
        .filter(|book| book.status_or_default() == SalesStatus::Laris)
        .count();

    [laris, books.len() - laris]
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

fn find_best_split(
    books: &[Book],
    attributes: &[Attribute],
    base_entropy: f64,
) -> (Attribute, f64) {
    let mut best_attribute = attributes[0];
    let mut best_gain = -1.0;

    for &attribute in attributes {
        let weighted_entropy = partition_by_bin(books, attribute)
            .iter()
            .map(|(_, subset)| subset.len() as f64 / books.len() as f64 * label_entropy(subset))
            .sum::<f64>();

        let gain = base_entropy - weighted_entropy;
        if gain > best_gain {
            best_gain = gain;
            best_attribute = attribute;
        }
    }

    (best_attribute, best_gain)
}

fn partition_by_bin(books: &[Book], attribute: Attribute) -> Vec<(&'static str, Vec<Book>)> {
    let mut partitions: Vec<(&'static str, Vec<Book>)> = Vec::new();
    for book in books {
        let bin = attribute.discretize(book);
        match partitions.iter_mut().find(|(existing, _)| *existing == bin) {
            Some((_, subset)) => subset.push(book.clone()),
            None => partitions.push((bin, vec![book.clone()])),
        }
    }
    partitions
}

fn majority_label(books: &[Book]) -> SalesStatus {
    let mut counts: Vec<(SalesStatus, usize)> = Vec::new();
    for book in books {
        let label = book.status_or_default();
        match counts.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    // Strict comparison keeps the first-encountered label on a tie.
    let mut majority = SalesStatus::Biasa;
    let mut majority_count = 0;
    for (label, count) in counts {
        if count > majority_count {
            majority = label;
            majority_count = count;
        }
    }
    majority
}

fn fallback_label(book: &Book) -> SalesStatus {
    if book.popular_author && book.rating >= FALLBACK_RATING_LIMIT {
        SalesStatus::Laris
    } else {
        SalesStatus::Biasa
    }
}
