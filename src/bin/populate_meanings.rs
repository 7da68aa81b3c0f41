//! Fill empty card meanings in data/tarot-data.json with the default topic structure.
//! Run from the project root: cargo run --bin populate_meanings [-- path/to/tarot-data.json]
//! TAROT_DATA_FILE overrides the default location.

use tarot_data::cli::data_path_arg;
use tarot_data::{logging, populate};

fn main() {
    logging::init();
    let path = data_path_arg(std::env::args().nth(1).as_ref());

    println!("--- tarot meanings populator ---");
    populate(&path);
    println!("\n--- done ---");
}
