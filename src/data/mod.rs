pub mod book;
pub mod dataset;
