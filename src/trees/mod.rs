pub mod attribute;
pub mod classifier;
pub mod node;
pub mod view;
