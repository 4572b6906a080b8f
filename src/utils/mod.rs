pub mod formatters;

pub use formatters::*;
