mod clue;
mod clue_step;

pub use clue::{Clue, ClueCategory};
pub use clue_step::ClueStep;
