pub mod check;
pub mod cli;
pub mod data;
pub mod logging;
pub mod populate;

pub use check::{check_dataset, CheckReport};
pub use data::dataset::{default_data_path, load_dataset, save_dataset, DatasetError};
pub use data::meanings::{default_meanings, is_empty_meanings, Orientation, Topic};
pub use populate::{populate, populate_to, MissingCard, PopulateOutcome};
