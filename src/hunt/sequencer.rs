use std::collections::BTreeMap;

use log::{info, trace};
use rand::seq::SliceRandom;

use crate::error::{HuntError, Result};
use crate::model::{Clue, ClueStep};

use super::sequencer_state::SequencerState;

/// Bound on the generate-and-test search for any single group.
pub const MAX_SEQUENCE_ATTEMPTS: usize = 100;

/// Group index (1-based) to that group's ordered trail.
pub type GroupSequences = BTreeMap<usize, Vec<ClueStep>>;

/// Generate one trail per group from a shared pool. The pool's last
/// clue is reserved as the terminal step every group shares; the rest
/// are permuted per group under the cross-group ledger constraints.
///
/// Groups are generated sequentially: each group's candidate orderings
/// are validated against the first clues and adjacent pairs committed
/// by all prior groups. Passing the same `seed` reproduces the run.
pub fn generate_hunt(
    clues: &[Clue],
    n_groups: usize,
    seed: Option<u64>,
) -> Result<GroupSequences> {
    if clues.len() < 2 {
        return Err(HuntError::InsufficientClues(clues.len()));
    }

    let final_clue = &clues[clues.len() - 1];
    let randomizable_clues = &clues[..clues.len() - 1];

    let mut state = SequencerState::new(seed);
    info!(
        target: "sequencer",
        "Generating hunt for {} groups from {} clues (seed {})",
        n_groups,
        clues.len(),
        state.seed
    );

    let mut all_sequences = GroupSequences::new();

    for group in 1..=n_groups {
        let ordering = find_group_ordering(&mut state, randomizable_clues, group)?;
        let sequence = build_group_steps(&ordering, final_clue);
        state.record_constraints(&ordering);
        all_sequences.insert(group, sequence);
    }

    Ok(all_sequences)
}

/// Bounded generate-and-test search for one group's ordering. Each
/// attempt tries the alternating builder first and falls back to a
/// plain shuffle; both candidates share the attempt.
fn find_group_ordering(
    state: &mut SequencerState,
    clues: &[Clue],
    group: usize,
) -> Result<Vec<Clue>> {
    state.reset_stats();

    for attempt in 1..=MAX_SEQUENCE_ATTEMPTS {
        if let Some(candidate) = state.create_alternating_sequence(clues) {
            if !state.violates_constraints(&candidate) {
                trace!(
                    target: "sequencer",
                    "Group {}: alternating candidate accepted on attempt {}",
                    group,
                    attempt
                );
                return Ok(candidate);
            }
        }

        let mut candidate = clues.to_vec();
        candidate.shuffle(&mut state.rng);
        state.stats.n_fallback_shuffles += 1;

        if !state.violates_constraints(&candidate) {
            trace!(
                target: "sequencer",
                "Group {}: fallback shuffle accepted on attempt {}",
                group,
                attempt
            );
            return Ok(candidate);
        }
    }

    info!(
        target: "sequencer",
        "Group {}: search exhausted after {} attempts. Stats: {:?}",
        group,
        MAX_SEQUENCE_ATTEMPTS,
        state.stats
    );
    Err(HuntError::UnsatisfiableConstraints {
        group,
        attempts: MAX_SEQUENCE_ATTEMPTS,
    })
}

/// Materialize an accepted ordering: each step points at the next
/// step's question, the last randomizable step points at the final
/// clue, and the final step closes the trail.
fn build_group_steps(ordering: &[Clue], final_clue: &Clue) -> Vec<ClueStep> {
    let mut steps = Vec::with_capacity(ordering.len() + 1);

    for (i, clue) in ordering.iter().enumerate() {
        let next_question = match ordering.get(i + 1) {
            Some(next) => next.question.as_str(),
            None => final_clue.question.as_str(),
        };
        steps.push(ClueStep::new(i + 1, clue, next_question));
    }

    steps.push(ClueStep::new(ordering.len() + 1, final_clue, "The End"));
    steps
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_context::test_context;

    use super::*;
    use crate::hunt::tests::UsingLogger;
    use crate::model::ClueCategory;

    fn sample_pool() -> Vec<Clue> {
        // the last clue is a Place, reserved as the shared final step
        vec![
            Clue::new("Who waters the garden?", "Grandpa", ClueCategory::Person),
            Clue::new(
                "What has keys but can't open locks?",
                "Piano",
                ClueCategory::Place,
            ),
            Clue::new(
                "Who can help you check out a book?",
                "Librarian",
                ClueCategory::Person,
            ),
            Clue::new("Where do you cook your meals?", "Kitchen", ClueCategory::Place),
            Clue::new("Where do cars sleep at night?", "Garage", ClueCategory::Place),
            Clue::new(
                "Who is your favorite teacher?",
                "Mrs. Smith",
                ClueCategory::Person,
            ),
            Clue::new(
                "What's the coldest appliance in the house?",
                "Refrigerator",
                ClueCategory::Place,
            ),
            Clue::new(
                "Where do you wash your hands before dinner?",
                "Bathroom sink",
                ClueCategory::Place,
            ),
        ]
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_generate_hunt_respects_cross_group_constraints(_: &mut UsingLogger) {
        let pool = sample_pool();
        let sequences = generate_hunt(&pool, 3, Some(42)).expect("hunt should generate");

        assert_eq!(sequences.len(), 3);

        let pool_questions: BTreeSet<&str> = pool.iter().map(|c| c.question.as_str()).collect();
        let mut first_questions = BTreeSet::new();
        let mut seen_pairs = BTreeSet::new();

        for steps in sequences.values() {
            assert_eq!(steps.len(), pool.len());

            // every group walks the same clues and ends on the shared
            // final step
            let questions: BTreeSet<&str> = steps.iter().map(|s| s.question.as_str()).collect();
            assert_eq!(questions, pool_questions);

            let last = steps.last().unwrap();
            assert_eq!(last.question, "Where do you wash your hands before dinner?");
            assert_eq!(last.next_clue, "9. The End");
            assert_eq!(last.location, "Hide this at/with: Bathroom sink");

            // the first clue is a Place, unique across groups
            let first = &steps[0];
            let first_clue = pool
                .iter()
                .find(|c| c.question == first.question)
                .expect("first step should come from the pool");
            assert_eq!(first_clue.category, ClueCategory::Place);
            assert!(
                first_questions.insert(first.question.clone()),
                "first clue reused across groups"
            );

            // no ordered adjacent pair repeats across groups within the
            // permuted portion of the trail
            let randomizable = &steps[..steps.len() - 1];
            for pair in randomizable.windows(2) {
                let key = format!("{}|{}", pair[0].question, pair[1].question);
                assert!(seen_pairs.insert(key), "adjacent pair reused across groups");
            }
        }
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_generate_hunt_numbers_steps_consecutively(_: &mut UsingLogger) {
        let pool = sample_pool();
        let sequences = generate_hunt(&pool, 1, Some(9)).expect("hunt should generate");
        let steps = &sequences[&1];

        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.number, i + 1);
        }

        // every non-terminal label announces the question that follows
        for pair in steps.windows(2) {
            assert_eq!(
                pair[0].next_clue,
                format!("{}. {}", pair[1].number, pair[1].question)
            );
        }
    }

    #[test]
    fn test_generate_hunt_deterministic_with_seed() {
        let pool = sample_pool();
        let first = generate_hunt(&pool, 3, Some(7)).expect("hunt should generate");
        let second = generate_hunt(&pool, 3, Some(7)).expect("hunt should generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_hunt_without_categories() {
        let pool: Vec<Clue> = (0..5)
            .map(|i| {
                Clue::new(
                    &format!("Question {}", i),
                    &format!("Answer {}", i),
                    ClueCategory::Other,
                )
            })
            .collect();

        let sequences = generate_hunt(&pool, 2, Some(11)).expect("hunt should generate");
        for steps in sequences.values() {
            assert_eq!(steps.len(), 5);
            assert_eq!(steps.last().unwrap().question, "Question 4");
        }
    }

    #[test]
    fn test_generate_hunt_requires_two_clues() {
        let pool = vec![Clue::new("Only question", "Only answer", ClueCategory::Place)];
        let err = generate_hunt(&pool, 1, Some(1)).unwrap_err();
        assert!(matches!(err, HuntError::InsufficientClues(1)));
    }

    #[test]
    fn test_generate_hunt_exhausts_attempts_when_groups_collide() {
        // one randomizable clue: every group would need the same first
        // clue, so the second group can never satisfy the ledger
        let pool = vec![
            Clue::new("Where do cars sleep at night?", "Garage", ClueCategory::Place),
            Clue::new(
                "Where do you wash your hands before dinner?",
                "Bathroom sink",
                ClueCategory::Place,
            ),
        ];

        let err = generate_hunt(&pool, 2, Some(5)).unwrap_err();
        assert!(err.to_string().contains("more clues or fewer groups"));
        match err {
            HuntError::UnsatisfiableConstraints { group, attempts } => {
                assert_eq!(group, 2);
                assert_eq!(attempts, MAX_SEQUENCE_ATTEMPTS);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
