pub mod aggregator;
pub mod catalog;
pub mod reader;
