use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// Sales outcome of a book. The classifier only ever deals with these two
/// classes, so unknown labels are rejected at parse time instead of being
/// carried around as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SalesStatus {
    Laris,
    Biasa,
}

impl SalesStatus {
    pub fn name(&self) -> &'static str {
        match self {
            SalesStatus::Laris => "Laris",
            SalesStatus::Biasa => "Biasa",
        }
    }
}

impl Display for SalesStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SalesStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Laris" => Ok(SalesStatus::Laris),
            "Biasa" => Ok(SalesStatus::Biasa),
            other => Err(format!(
                "Unknown sales status: '{other}'. Expected 'Laris' or 'Biasa'."
            )),
        }
    }
}

/// Catalogue category of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Fiksi,
    SelfHelp,
    AnakAnak,
    Teknologi,
    Bisnis,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fiksi => "Fiksi",
            Category::SelfHelp => "Self-Help",
            Category::AnakAnak => "Anak-anak",
            Category::Teknologi => "Teknologi",
            Category::Bisnis => "Bisnis",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiksi" => Ok(Category::Fiksi),
            "Self-Help" => Ok(Category::SelfHelp),
            "Anak-anak" => Ok(Category::AnakAnak),
            "Teknologi" => Ok(Category::Teknologi),
            "Bisnis" => Ok(Category::Bisnis),
            other => Err(format!("Unknown category: '{other}'.")),
        }
    }
}

/// Binding of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoverType {
    Hardcover,
    Softcover,
}

impl CoverType {
    pub fn name(&self) -> &'static str {
        match self {
            CoverType::Hardcover => "Hardcover",
            CoverType::Softcover => "Softcover",
        }
    }
}

impl Display for CoverType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoverType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hardcover" => Ok(CoverType::Hardcover),
            "Softcover" => Ok(CoverType::Softcover),
            other => Err(format!(
                "Unknown cover type: '{other}'. Expected 'Hardcover' or 'Softcover'."
            )),
        }
    }
}

/// One catalogue record. `status` is the training label and stays `None` for
/// books that have not been labelled yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub category: Category,
    pub price: f64,
    pub popular_author: bool,
    pub pages: u32,
    pub cover: CoverType,
    pub rating: f64,
    pub stock: u32,
    pub discount: f64,
    pub status: Option<SalesStatus>,
    pub created_at: Option<String>,
}

impl Book {
    /// Label used during training and entropy computations. Unlabelled
    /// records count as `Biasa`.
    pub fn status_or_default(&self) -> SalesStatus {
        self.status.unwrap_or(SalesStatus::Biasa)
    }
}

/// Built-in sample catalogue, small enough to train and inspect by hand.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            title: "Laskar Pelangi".to_string(),
            category: Category::Fiksi,
            price: 95000.0,
            popular_author: true,
            pages: 529,
            cover: CoverType::Softcover,
            rating: 4.8,
            stock: 100,
            discount: 10.0,
            status: Some(SalesStatus::Laris),
            created_at: None,
        },
        Book {
            title: "Bumi Manusia".to_string(),
            category: Category::Fiksi,
            price: 125000.0,
            popular_author: true,
            pages: 535,
            cover: CoverType::Hardcover,
            rating: 4.9,
            stock: 50,
            discount: 0.0,
            status: Some(SalesStatus::Laris),
            created_at: None,
        },
        Book {
            title: "Atomic Habits Edisi Indonesia".to_string(),
            category: Category::SelfHelp,
            price: 110000.0,
            popular_author: true,
            pages: 320,
            cover: CoverType::Softcover,
            rating: 4.9,
            stock: 300,
            discount: 20.0,
            status: Some(SalesStatus::Laris),
            created_at: None,
        },
        Book {
            title: "Dongeng Si Kancil".to_string(),
            category: Category::AnakAnak,
            price: 45000.0,
            popular_author: false,
            pages: 50,
            cover: CoverType::Softcover,
            rating: 4.0,
            stock: 500,
            discount: 25.0,
            status: Some(SalesStatus::Laris),
            created_at: None,
        },
        Book {
            title: "Pemrograman Python Dasar".to_string(),
            category: Category::Teknologi,
            price: 180000.0,
            popular_author: false,
            pages: 350,
            cover: CoverType::Softcover,
            rating: 3.5,
            stock: 40,
            discount: 0.0,
            status: Some(SalesStatus::Biasa),
            created_at: None,
        },
        Book {
            title: "Strategi Investasi Saham".to_string(),
            category: Category::Bisnis,
            price: 200000.0,
            popular_author: true,
            pages: 220,
            cover: CoverType::Hardcover,
            rating: 4.6,
            stock: 60,
            discount: 10.0,
            status: Some(SalesStatus::Laris),
            created_at: None,
        },
    ]
}
