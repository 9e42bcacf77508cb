use crate::model::ClueStep;

use super::sequencer::GroupSequences;

/// Project all trails into the organizer's master table: one row per
/// (group, step), header fixed. Pure and order-preserving.
pub fn format_master_sheet(sequences: &GroupSequences) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Group".to_string(),
        "Clue Number".to_string(),
        "Question".to_string(),
        "Location".to_string(),
        "Next Clue".to_string(),
    ]];

    for (group, steps) in sequences {
        for step in steps {
            rows.push(vec![
                format!("Group {}", group),
                step.number.to_string(),
                step.question.clone(),
                step.location.clone(),
                step.next_clue.clone(),
            ]);
        }
    }

    rows
}

/// Project one group's trail into its handout table: the announcement
/// row carries the clue read to the group at the start; every other row
/// pairs a hiding spot with the label found there.
pub fn format_group_sheet(group: usize, steps: &[ClueStep]) -> Vec<Vec<String>> {
    let mut rows = vec![vec!["Location".to_string(), "Clue".to_string()]];

    if let Some(first) = steps.first() {
        rows.push(vec![
            format!("Group {} First Clue", group),
            format!("1. {}", first.question),
        ]);
    }

    for step in steps {
        rows.push(vec![step.location.clone(), step.next_clue.clone()]);
    }

    rows
}
