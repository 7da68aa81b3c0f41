//! Read-only scan: which cards would the populator fill? Never writes the dataset.

use std::path::Path;

use serde::Serialize;

use crate::data::dataset::{load_dataset, DatasetError};
use crate::populate::{find_missing_meanings, MissingCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub source_path: String,
    pub total_cards: usize,
    pub missing_meanings: Vec<MissingCard>,
}

impl CheckReport {
    pub fn is_complete(&self) -> bool {
        self.missing_meanings.is_empty()
    }
}

pub fn check_dataset(path: &Path) -> Result<CheckReport, DatasetError> {
    let cards = load_dataset(path)?;
    Ok(CheckReport {
        source_path: path.display().to_string(),
        total_cards: cards.len(),
        missing_meanings: find_missing_meanings(&cards),
    })
}
