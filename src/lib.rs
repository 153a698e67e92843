//! # Laris
//!
//! `laris` classifies book sales records into a binary outcome, best seller (`Laris`) or
//! ordinary (`Biasa`), using a discretizing decision tree trained from scratch.
//! It also contains descriptive statistics, correlation and outlier analysis for the
//! numeric attributes, and a hold-out evaluation harness for the trained model.
//!
//! ## Getting Started
//!
//! To use `laris`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! laris = "*"
//! ```
//!
//! ## Example Usage
//!
//! As a quick example, here's how you can use `laris` to train a decision tree on the
//! built-in sample catalogue and classify its records:
//!
//! ```rust
//!
//! use laris::data::book::sample_books;
//! use laris::trees::classifier::{DecisionTree, FitOutcome};
//!
//! let books = sample_books();
//!
//! let mut model = DecisionTree::new();
//! assert_eq!(model.fit(&books), FitOutcome::Fitted);
//!
//! let predictions = books.iter().map(|book| model.predict(book)).collect::<Vec<_>>();
//! assert_eq!(predictions.len(), books.len());
//! ```

/// Book records, sample data and dataset utilities
pub mod data;
/// Functions for evaluating model performance
pub mod metrics;
/// Descriptive statistics, correlation and outlier detection
pub mod stats;
/// Decision trees
pub mod trees;
