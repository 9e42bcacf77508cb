use log::warn;

use crate::error::{HuntError, Result};
use crate::model::Clue;

use super::Workbook;

/// Read the clue pool from a workbook table. A leading header row is
/// skipped when its first cell reads `Clue` or `Question`; rows missing
/// a question or answer are dropped.
pub fn read_clue_pool(workbook: &impl Workbook, table: &str) -> Result<Vec<Clue>> {
    let rows = workbook.read_table(table)?;

    let start = match rows.first().and_then(|row| row.first()) {
        Some(cell) => {
            let label = cell.to_lowercase();
            if label == "clue" || label == "question" {
                1
            } else {
                0
            }
        }
        None => 0,
    };

    let clues: Vec<Clue> = rows[start..]
        .iter()
        .filter_map(|row| Clue::from_row(row))
        .collect();

    let skipped = rows.len() - start - clues.len();
    if skipped > 0 {
        warn!(
            target: "workbook",
            "Skipped {} incomplete clue rows in table '{}'",
            skipped,
            table
        );
    }

    if clues.is_empty() {
        return Err(HuntError::EmptyCluePool(table.to_string()));
    }

    Ok(clues)
}

/// Starter pool written when the input table is missing, so a first run
/// leaves something to edit.
pub fn sample_clue_rows() -> Vec<Vec<String>> {
    let rows: &[[&str; 3]] = &[
        ["Clue", "Answer/Location/Person", "Type"],
        ["What has keys but can't open locks?", "Piano", "Place"],
        [
            "What has a face and two hands but no arms or legs?",
            "Clock",
            "Place",
        ],
        ["Who created this scavenger hunt?", "Kevin", "Person"],
        ["Where do you cook your meals?", "Kitchen", "Place"],
        ["Who is your favorite teacher?", "Mrs. Smith", "Person"],
        ["What room has books but no bookshelf?", "Library", "Place"],
        ["Where do cars sleep at night?", "Garage", "Place"],
        ["Who can help you check out a book?", "Librarian", "Person"],
        [
            "What's the coldest appliance in the house?",
            "Refrigerator",
            "Place",
        ],
        [
            "Where do you wash your hands before dinner?",
            "Bathroom sink",
            "Place",
        ],
    ];

    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
