pub mod confusion;
pub mod evaluation;
pub mod roc;
