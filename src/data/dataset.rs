use nalgebra::DVector;
use num_traits::{Float, FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::cmp::PartialOrd;
use std::error::Error;
use std::fmt::{Debug, Display};
use std::ops::AddAssign;

use crate::data::book::Book;

pub trait DataValue:
    Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + AddAssign + Display + 'static
{
}

impl<T> DataValue for T where
    T: Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + AddAssign + Display + 'static
{
}

pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

pub trait RealNumber: Number + Float {}
impl<T> RealNumber for T where T: Number + Float {}

/// Numeric book attributes that can be pulled out as a column for the
/// statistics functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericAttribute {
    Price,
    Pages,
    Rating,
    Stock,
    Discount,
}

impl NumericAttribute {
    pub const ALL: [NumericAttribute; 5] = [
        NumericAttribute::Price,
        NumericAttribute::Pages,
        NumericAttribute::Rating,
        NumericAttribute::Stock,
        NumericAttribute::Discount,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NumericAttribute::Price => "price",
            NumericAttribute::Pages => "pages",
            NumericAttribute::Rating => "rating",
            NumericAttribute::Stock => "stock",
            NumericAttribute::Discount => "discount",
        }
    }

    fn extract(&self, book: &Book) -> f64 {
        match self {
            NumericAttribute::Price => book.price,
            NumericAttribute::Pages => f64::from(book.pages),
            NumericAttribute::Rating => book.rating,
            NumericAttribute::Stock => f64::from(book.stock),
            NumericAttribute::Discount => book.discount,
        }
    }
}

impl Display for NumericAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A catalogue of book records with column access and a shuffled hold-out
/// split.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDataset {
    books: Vec<Book>,
}

impl BookDataset {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// One numeric attribute of every record, in catalogue order.
    pub fn column(&self, attribute: NumericAttribute) -> DVector<f64> {
        let values = self
            .books
            .iter()
            .map(|book| attribute.extract(book))
            .collect::<Vec<_>>();
        DVector::from_vec(values)
    }

    /// Shuffles the records and cuts them into a train and a test partition.
    /// The cut index is `floor(len * train_size)`. A fixed `seed` makes the
    /// shuffle reproducible.
    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), Box<dyn Error>> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err("Train size should be between 0.0 and 1.0".into());
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.books.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.books.len() as f64 * train_size).floor() as usize;
        let train_indices = &indices[..train_size];
        let test_indices = &indices[train_size..];

        let train_books = train_indices
            .iter()
            .map(|&index| self.books[index].clone())
            .collect::<Vec<_>>();
        let test_books = test_indices
            .iter()
            .map(|&index| self.books[index].clone())
            .collect::<Vec<_>>();

        Ok((Self::new(train_books), Self::new(test_books)))
    }
}

impl From<Vec<Book>> for BookDataset {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::data::book::sample_books;

    #[test]
    fn test_column_extracts_values_in_order() {
        let dataset = BookDataset::new(sample_books());

        let prices = dataset.column(NumericAttribute::Price);
        assert_eq!(prices.len(), 6);
        assert_relative_eq!(prices[0], 95000.0, epsilon = 1e-6);
        assert_relative_eq!(prices[5], 200000.0, epsilon = 1e-6);

        let ratings = dataset.column(NumericAttribute::Rating);
        assert_relative_eq!(ratings[4], 3.5, epsilon = 1e-6);

        let pages = dataset.column(NumericAttribute::Pages);
        assert_relative_eq!(pages[3], 50.0, epsilon = 1e-6);
    }

    #[test]
    fn test_train_test_split_sizes() {
        let dataset = BookDataset::new(sample_books());

        let (train, test) = dataset.train_test_split(0.75, None).unwrap();
        assert_eq!(train.len(), 4);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_train_test_split_rejects_bad_ratio() {
        let dataset = BookDataset::new(sample_books());

        assert!(dataset.train_test_split(1.5, None).is_err());
        assert!(dataset.train_test_split(-0.1, None).is_err());
    }

    #[test]
    fn test_train_test_split_seeded_is_reproducible() {
        let dataset = BookDataset::new(sample_books());

        let (train_a, test_a) = dataset.train_test_split(0.75, Some(42)).unwrap();
        let (train_b, test_b) = dataset.train_test_split(0.75, Some(42)).unwrap();

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_train_test_split_partitions_cover_catalogue() {
        let dataset = BookDataset::new(sample_books());

        let (train, test) = dataset.train_test_split(0.5, Some(7)).unwrap();
        let mut titles = train
            .books()
            .iter()
            .chain(test.books())
            .map(|book| book.title.clone())
            .collect::<Vec<_>>();
        titles.sort();

        let mut expected = sample_books()
            .iter()
            .map(|book| book.title.clone())
            .collect::<Vec<_>>();
        expected.sort();

        assert_eq!(titles, expected);
    }
}
