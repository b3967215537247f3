//! Mastery update applied when a round ends.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::round::Round;
use crate::set::{CardId, CardSet};
use crate::types::MAX_MASTERY;

/// How one card did over a round, with its mastery after the update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResult {
    pub card: CardId,
    pub term: String,
    pub correct: usize,
    pub total: usize,
    pub mastery: u8,
}

#[derive(Default)]
struct Tally {
    correct: usize,
    total: usize,
    gain: u32,
}

/// Fold a round's outcomes into the mastery of its cards.
///
/// Each correct answer adds the gain of its question type, summed over every
/// occurrence of the card, and mastery is capped at [`MAX_MASTERY`]. Cards
/// that left the set during the round are skipped. Results come back in
/// order of each card's first appearance in the round.
pub fn apply_round_results(round: &Round, set: &mut CardSet) -> Vec<CardResult> {
    let mut order: Vec<CardId> = Vec::new();
    let mut tallies: HashMap<CardId, Tally> = HashMap::new();

    for item in round.items() {
        let tally = tallies.entry(item.card).or_insert_with(|| {
            order.push(item.card);
            Tally::default()
        });
        tally.total += 1;
        if item.correct {
            tally.correct += 1;
            tally.gain += item.question.question_type.mastery_gain();
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let tally = &tallies[&id];
            let card = set.get_mut(id)?;
            let raised = (u32::from(card.mastery) + tally.gain).min(u32::from(MAX_MASTERY));
            card.mastery = raised as u8;
            Some(CardResult {
                card: id,
                term: card.term.clone(),
                correct: tally.correct,
                total: tally.total,
                mastery: card.mastery,
            })
        })
        .collect()
}
