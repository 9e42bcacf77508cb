use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueCategory {
    Person,
    Place,
    Other,
}

impl Default for ClueCategory {
    fn default() -> Self {
        ClueCategory::Other
    }
}

impl ClueCategory {
    /// Parse a category cell. Comparison is case-insensitive; anything
    /// outside the closed Person/Place set is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "person" => ClueCategory::Person,
            "place" => ClueCategory::Place,
            _ => ClueCategory::Other,
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, ClueCategory::Person | ClueCategory::Place)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Identity for cross-group constraint tracking. Pools holding two
    /// clues with the same question text are undefined input.
    pub question: String,
    pub answer: String,
    pub category: ClueCategory,
}

impl Clue {
    pub fn new(question: &str, answer: &str, category: ClueCategory) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
        }
    }

    /// Parse one table row: question, answer, optional category label.
    /// Rows missing either of the first two cells are not clues.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let question = row.first().filter(|cell| !cell.trim().is_empty())?;
        let answer = row.get(1).filter(|cell| !cell.trim().is_empty())?;
        let category = row
            .get(2)
            .map(|label| ClueCategory::from_label(label))
            .unwrap_or_default();
        Some(Self::new(question.trim(), answer.trim(), category))
    }
}
