use csv::ReaderBuilder;
use laris::data::book::{sample_books, Book, SalesStatus};
use laris::data::dataset::{BookDataset, NumericAttribute};
use laris::metrics::evaluation::evaluate;
use laris::stats::correlation::pearson;
use laris::stats::describe::{basic_stats, detect_outliers};
use laris::trees::classifier::{DecisionTree, FitOutcome};
use std::env;
use std::error::Error;

const MIN_EVALUATION_RECORDS: usize = 10;

fn field<'a>(record: &'a csv::StringRecord, index: usize) -> Result<&'a str, Box<dyn Error>> {
    record
        .get(index)
        .ok_or_else(|| format!("Missing column {index}").into())
}

fn parse_flag(value: &str) -> Result<bool, Box<dyn Error>> {
    match value {
        "Ya" => Ok(true),
        "Tidak" => Ok(false),
        other => {
            Err(format!("Unknown popular-author flag: '{other}'. Expected 'Ya' or 'Tidak'.").into())
        }
    }
}

/// Columns: title, category, price, popular author, pages, cover, rating,
/// stock, discount, status. The status column may be empty for unlabelled
/// records.
fn read_books(file_path: &str) -> Result<Vec<Book>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(file_path)?;
    let mut books = Vec::new();

    for result in reader.records() {
        let record = result?;

        let status = match record.get(9) {
            Some(value) if !value.is_empty() => Some(value.parse::<SalesStatus>()?),
            _ => None,
        };

        books.push(Book {
            title: field(&record, 0)?.to_string(),
            category: field(&record, 1)?.parse()?,
            price: field(&record, 2)?.parse()?,
            popular_author: parse_flag(field(&record, 3)?)?,
            pages: field(&record, 4)?.parse()?,
            cover: field(&record, 5)?.parse()?,
            rating: field(&record, 6)?.parse()?,
            stock: field(&record, 7)?.parse()?,
            discount: field(&record, 8)?.parse()?,
            status,
            created_at: None,
        });
    }

    Ok(books)
}

fn report_statistics(dataset: &BookDataset) -> Result<(), Box<dyn Error>> {
    println!("== Descriptive statistics ==");
    for attribute in NumericAttribute::ALL {
        let column = dataset.column(attribute);
        let report = basic_stats(&column);
        println!(
            "{attribute}: mean {:.2}, median {:.2}, std dev {:.2}, q1 {:.2}, q3 {:.2}, skewness {:.3}, kurtosis {:.3}",
            report.mean,
            report.median,
            report.std_dev,
            report.q1,
            report.q3,
            report.skewness,
            report.kurtosis
        );
    }

    println!("\n== Correlations ==");
    let pairs = [
        (NumericAttribute::Price, NumericAttribute::Pages),
        (NumericAttribute::Rating, NumericAttribute::Discount),
        (NumericAttribute::Stock, NumericAttribute::Price),
    ];
    for (left, right) in pairs {
        let r = pearson(&dataset.column(left), &dataset.column(right))?;
        println!("{left} vs {right}: {r:.3}");
    }

    let price_outliers = detect_outliers(&dataset.column(NumericAttribute::Price));
    if price_outliers.is_empty() {
        println!("\nNo price outliers found.");
    } else {
        println!("\nPrice outliers: {price_outliers:?}");
    }

    Ok(())
}

fn report_model(books: &[Book]) -> Result<(), Box<dyn Error>> {
    let mut model = DecisionTree::new();
    if model.fit(books) == FitOutcome::Unchanged {
        println!("No records to train on.");
        return Ok(());
    }

    println!("\n== Feature importance ==");
    for entry in model.feature_importance() {
        println!("{}: {:.1}%", entry.attribute, entry.importance);
    }

    if let Some(view) = model.tree_structure() {
        println!("\n== Tree structure ==");
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    println!("\n== Predictions ==");
    for book in books {
        println!("{} -> {}", book.title, model.predict(book));
    }

    Ok(())
}

fn report_evaluation(books: &[Book]) {
    let labeled = books
        .iter()
        .filter(|book| book.status.is_some())
        .cloned()
        .collect::<Vec<_>>();
    if labeled.len() < MIN_EVALUATION_RECORDS {
        println!(
            "\nSkipping evaluation: {} labelled records, need at least {}.",
            labeled.len(),
            MIN_EVALUATION_RECORDS
        );
        return;
    }

    match evaluate(&labeled, None) {
        Ok(metrics) => {
            println!("\n== Evaluation ==");
            println!("accuracy  {:.3}", metrics.accuracy);
            println!("precision {:.3}", metrics.precision);
            println!("recall    {:.3}", metrics.recall);
            println!("f1        {:.3}", metrics.f1);
            println!("auc       {:.3}", metrics.auc);
            println!(
                "confusion tp {} tn {} fp {} fn {}",
                metrics.confusion.tp, metrics.confusion.tn, metrics.confusion.fp, metrics.confusion.fn_
            );
        }
        Err(err) => println!("Evaluation failed: {err}"),
    }
}

fn main() {
    let books = match env::args().nth(1) {
        Some(path) => match read_books(&path) {
            Ok(books) => {
                println!("Loaded {} records from {path}\n", books.len());
                books
            }
            Err(err) => panic!("{}", err),
        },
        None => {
            let books = sample_books();
            println!("Using the built-in sample catalogue ({} records)\n", books.len());
            books
        }
    };

    let dataset = BookDataset::new(books.clone());
    if let Err(err) = report_statistics(&dataset) {
        panic!("{}", err);
    }
    if let Err(err) = report_model(&books) {
        panic!("{}", err);
    }
    report_evaluation(&books);
}
