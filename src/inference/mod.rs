pub mod adapter;
pub mod preprocess;
pub mod select;
