use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::data::book::Book;

const PRICE_CHEAP_LIMIT: f64 = 65_000.0;
const PRICE_MID_LIMIT: f64 = 135_000.0;
const PAGES_THIN_LIMIT: u32 = 150;
const PAGES_MID_LIMIT: u32 = 350;
const RATING_LOW_LIMIT: f64 = 3.8;
const RATING_GOOD_LIMIT: f64 = 4.6;
const DISCOUNT_SMALL_LIMIT: f64 = 15.0;

/// Attributes the tree can split on. Numeric attributes are discretized into
/// fixed named bins; categorical ones use their value verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Category,
    Price,
    PopularAuthor,
    Pages,
    CoverType,
    Rating,
    Discount,
}

impl Attribute {
    /// Order matters: on equal information gain the earlier attribute wins.
    pub const ALL: [Attribute; 7] = [
        Attribute::Category,
        Attribute::Price,
        Attribute::PopularAuthor,
        Attribute::Pages,
        Attribute::CoverType,
        Attribute::Rating,
        Attribute::Discount,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Category => "category",
            Attribute::Price => "price",
            Attribute::PopularAuthor => "popular author",
            Attribute::Pages => "pages",
            Attribute::CoverType => "cover type",
            Attribute::Rating => "rating",
            Attribute::Discount => "discount",
        }
    }

    /// The bin a record falls into for this attribute.
    pub fn discretize(&self, book: &Book) -> &'static str {
        match self {
            Attribute::Category => book.category.name(),
            Attribute::Price => {
                if book.price < PRICE_CHEAP_LIMIT {
                    "Murah"
                } else if book.price <= PRICE_MID_LIMIT {
                    "Sedang"
                } else {
                    "Mahal"
                }
            }
            Attribute::PopularAuthor => {
                if book.popular_author {
                    "Ya"
                } else {
                    "Tidak"
                }
            }
            Attribute::Pages => {
                if book.pages < PAGES_THIN_LIMIT {
                    "Tipis"
                } else if book.pages <= PAGES_MID_LIMIT {
                    "Sedang"
                } else {
                    "Tebal"
                }
            }
            Attribute::CoverType => book.cover.name(),
            Attribute::Rating => {
                if book.rating < RATING_LOW_LIMIT {
                    "Rendah"
                } else if book.rating < RATING_GOOD_LIMIT {
                    "Bagus"
                } else {
                    "Sangat Bagus"
                }
            }
            Attribute::Discount => {
                if book.discount == 0.0 {
                    "Tanpa Diskon"
                } else if book.discount <= DISCOUNT_SMALL_LIMIT {
                    "Diskon Kecil"
                } else {
                    "Diskon Besar"
                }
            }
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
