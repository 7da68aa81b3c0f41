pub mod dataset;
pub mod meanings;
