use itertools::Itertools;
use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use std::collections::BTreeSet;

use crate::model::{Clue, ClueCategory};

#[derive(Debug, Default)]
pub struct SequencerStats {
    pub n_rejected_used_first: usize,
    pub n_rejected_first_not_place: usize,
    pub n_rejected_repeated_pair: usize,
    pub n_rejected_broken_alternation: usize,
    pub n_fallback_shuffles: usize,
}

/// Run-scoped generation state: the seeded rng plus the cross-group
/// ledger. The ledger only grows; it is discarded with the state when
/// the run ends.
pub struct SequencerState {
    pub rng: Box<dyn RngCore>,
    pub seed: u64,
    pub used_first_clues: BTreeSet<String>,
    pub used_consecutive_pairs: BTreeSet<String>,
    pub stats: SequencerStats,
}

impl SequencerState {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(rand::rng().next_u64());
        let rng = Box::new(StdRng::seed_from_u64(seed));

        Self {
            rng,
            seed,
            used_first_clues: BTreeSet::new(),
            used_consecutive_pairs: BTreeSet::new(),
            stats: SequencerStats::default(),
        }
    }

    pub fn reset_stats(&mut self) {
        self.stats = SequencerStats::default();
    }

    fn pair_key(a: &Clue, b: &Clue) -> String {
        format!("{}|{}", a.question, b.question)
    }

    /// Build an ordering that starts with a Place and alternates Person
    /// and Place where the buckets allow it. Untyped clues are woven in
    /// afterwards, anywhere but the first slot. Returns `None` when the
    /// pool cannot support the pattern (no Place clues, or fewer than
    /// two typed clues) so the caller falls back to a plain shuffle.
    pub fn create_alternating_sequence(&mut self, clues: &[Clue]) -> Option<Vec<Clue>> {
        let mut person_clues: Vec<Clue> = clues
            .iter()
            .filter(|c| c.category == ClueCategory::Person)
            .cloned()
            .collect();
        let mut place_clues: Vec<Clue> = clues
            .iter()
            .filter(|c| c.category == ClueCategory::Place)
            .cloned()
            .collect();
        let mut other_clues: Vec<Clue> = clues
            .iter()
            .filter(|c| c.category == ClueCategory::Other)
            .cloned()
            .collect();

        // the first slot must hold a Place
        if place_clues.is_empty() {
            return None;
        }
        if person_clues.len() + place_clues.len() < 2 {
            return None;
        }

        person_clues.shuffle(&mut self.rng);
        place_clues.shuffle(&mut self.rng);
        other_clues.shuffle(&mut self.rng);

        let total_typed = person_clues.len() + place_clues.len();
        let mut result: Vec<Clue> = Vec::with_capacity(clues.len());
        let mut person_idx = 0;
        let mut place_idx = 0;
        let mut expect = ClueCategory::Place;

        for _ in 0..total_typed {
            if expect == ClueCategory::Place && place_idx < place_clues.len() {
                result.push(place_clues[place_idx].clone());
                place_idx += 1;
                expect = ClueCategory::Person;
            } else if expect == ClueCategory::Person && person_idx < person_clues.len() {
                result.push(person_clues[person_idx].clone());
                person_idx += 1;
                expect = ClueCategory::Place;
            } else if place_idx < place_clues.len() {
                // expected bucket exhausted; keep drawing from whatever
                // remains, breaking strict alternation near the end
                result.push(place_clues[place_idx].clone());
                place_idx += 1;
                expect = ClueCategory::Person;
            } else if person_idx < person_clues.len() {
                result.push(person_clues[person_idx].clone());
                person_idx += 1;
                expect = ClueCategory::Place;
            }
        }

        // single repair pass: try to put a Place second-to-last
        if result.len() >= 2 {
            let second_to_last = result.len() - 2;
            if result[second_to_last].category == ClueCategory::Person {
                if let Some(i) =
                    (0..second_to_last).find(|&i| result[i].category == ClueCategory::Place)
                {
                    result.swap(i, second_to_last);
                }
            }
        }

        for clue in other_clues {
            let pos = self.rng.random_range(1..=result.len());
            result.insert(pos, clue);
        }

        Some(result)
    }

    /// Check a candidate ordering against the cross-group ledger and
    /// the alternation heuristic, counting the reason for any
    /// rejection. `ordering` must be non-empty.
    pub fn violates_constraints(&mut self, ordering: &[Clue]) -> bool {
        // no two groups may start from the same clue
        if self.used_first_clues.contains(&ordering[0].question) {
            self.stats.n_rejected_used_first += 1;
            return true;
        }

        // the clue handed to a group at the start must name a Place;
        // untyped clues pass as category-absent
        if ordering[0].category == ClueCategory::Person {
            self.stats.n_rejected_first_not_place += 1;
            return true;
        }

        // no two groups may share an ordered adjacent pair
        for (a, b) in ordering.iter().tuple_windows() {
            if self.used_consecutive_pairs.contains(&Self::pair_key(a, b)) {
                self.stats.n_rejected_repeated_pair += 1;
                trace!(
                    target: "sequencer",
                    "Rejecting ordering; pair already used: {:?}",
                    Self::pair_key(a, b)
                );
                return true;
            }
        }

        if !self.follows_alternating_types(ordering) {
            self.stats.n_rejected_broken_alternation += 1;
            return true;
        }

        false
    }

    /// Soft alternation check: same-type adjacent pairs among typed
    /// clues may not exceed half the sequence length. Pairs touching an
    /// untyped clue are ignored.
    fn follows_alternating_types(&self, ordering: &[Clue]) -> bool {
        let n_typed = ordering.iter().filter(|c| c.category.is_typed()).count();
        if n_typed < 2 {
            return true;
        }

        let violations = ordering
            .iter()
            .tuple_windows()
            .filter(|(a, b)| a.category.is_typed() && b.category == a.category)
            .count();

        violations <= ordering.len() / 2
    }

    /// Commit an accepted ordering's first clue and adjacent pairs to
    /// the ledger before the next group is attempted.
    pub fn record_constraints(&mut self, ordering: &[Clue]) {
        self.used_first_clues.insert(ordering[0].question.clone());

        for (a, b) in ordering.iter().tuple_windows() {
            self.used_consecutive_pairs.insert(Self::pair_key(a, b));
        }
    }
}
