use serde::{Deserialize, Serialize};

use crate::model::Clue;

/// One emitted row of a group's trail: the clue to hand out, where to
/// hide it, and the label announcing the clue hidden there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueStep {
    pub number: usize,
    pub question: String,
    pub location: String,
    pub next_clue: String,
}

impl ClueStep {
    /// `next_question` is the question hidden at this step's answer,
    /// or `"The End"` for the terminal step.
    pub fn new(number: usize, clue: &Clue, next_question: &str) -> Self {
        Self {
            number,
            question: clue.question.clone(),
            location: format!("Hide this at/with: {}", clue.answer),
            next_clue: format!("{}. {}", number + 1, next_question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClueCategory;

    #[test]
    fn test_step_labels() {
        let clue = Clue::new(
            "What has keys but can't open locks?",
            "Piano",
            ClueCategory::Place,
        );
        let step = ClueStep::new(3, &clue, "Where do cars sleep at night?");
        assert_eq!(step.number, 3);
        assert_eq!(step.location, "Hide this at/with: Piano");
        assert_eq!(step.next_clue, "4. Where do cars sleep at night?");
    }

    #[test]
    fn test_terminal_step_label() {
        let clue = Clue::new("Final question", "Under the stairs", ClueCategory::Place);
        let step = ClueStep::new(8, &clue, "The End");
        assert_eq!(step.next_clue, "9. The End");
    }
}
