//! Meanings populator: fill every card whose `meanings` is empty with the default
//! topic/orientation structure, then rewrite the dataset in place.
//! Load → scan → (nothing to do | patch → save). Errors end the run as printed text.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::data::dataset::{card_name, display_name, load_dataset, save_dataset};
use crate::data::meanings::{default_meanings, is_empty_meanings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCard {
    pub index: usize,
    pub name: String,
}

/// How a populate run ended. Every variant prints its own distinct message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateOutcome {
    ReadFailed { message: String },
    NothingToDo { total_cards: usize },
    Saved { total_cards: usize, patched: Vec<MissingCard> },
    WriteFailed { patched: usize, message: String },
}

impl PopulateOutcome {
    pub fn patched_count(&self) -> usize {
        match self {
            Self::Saved { patched, .. } => patched.len(),
            Self::WriteFailed { patched, .. } => *patched,
            Self::ReadFailed { .. } | Self::NothingToDo { .. } => 0,
        }
    }

    pub fn wrote_file(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Cards whose `meanings` is empty, in dataset order. Non-object entries are skipped.
pub fn find_missing_meanings(cards: &[Value]) -> Vec<MissingCard> {
    cards
        .iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let Some(object) = card.as_object() else {
                warn!(index, "dataset entry is not an object; left untouched");
                return None;
            };
            is_empty_meanings(object.get("meanings")).then(|| MissingCard {
                index,
                name: card_name(card),
            })
        })
        .collect()
}

/// Replace each empty `meanings` with a freshly built default. Returns the patched cards.
pub fn patch_missing_meanings(cards: &mut [Value]) -> Vec<MissingCard> {
    let missing = find_missing_meanings(cards);
    for card in &missing {
        if let Some(object) = cards[card.index].as_object_mut() {
            object.insert("meanings".to_string(), default_meanings());
        }
    }
    missing
}

pub fn populate(path: &Path) -> PopulateOutcome {
    populate_to(path, path)
}

/// Populate `source` and write the result to `destination`; nothing is written when no
/// card needs filling.
pub fn populate_to(source: &Path, destination: &Path) -> PopulateOutcome {
    let file = display_name(source);
    let target = display_name(destination);

    let mut cards = match load_dataset(source) {
        Ok(cards) => cards,
        Err(err) => {
            eprintln!("error: failed to load {file}: {err}");
            return PopulateOutcome::ReadFailed {
                message: err.to_string(),
            };
        }
    };
    println!("loaded data file: {file}");

    let patched = patch_missing_meanings(&mut cards);
    for card in &patched {
        println!("  -> populated empty meanings for card '{}'", card.name);
    }

    if patched.is_empty() {
        println!("\nall cards already have meanings; nothing to populate.");
        return PopulateOutcome::NothingToDo {
            total_cards: cards.len(),
        };
    }

    if let Err(err) = save_dataset(destination, &cards) {
        eprintln!("error: failed to write {target}: {err}");
        return PopulateOutcome::WriteFailed {
            patched: patched.len(),
            message: err.to_string(),
        };
    }

    info!(path = %destination.display(), patched = patched.len(), "dataset rewritten");
    println!("\n--- meanings populate report ---");
    println!(
        "populated the default meanings structure for {} card(s).",
        patched.len()
    );
    println!("updated {target}");

    PopulateOutcome::Saved {
        total_cards: cards.len(),
        patched,
    }
}
