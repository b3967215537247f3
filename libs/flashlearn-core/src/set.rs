//! Card sets and the named set library.
//!
//! A [`CardSet`] is an ordered sequence of cards. Each card gets a [`CardId`]
//! when it enters the set so rounds can refer back to it after the pool has
//! been shuffled or other cards have been removed. Ids are not persisted: a
//! set serializes as a plain array of cards and gets fresh ids when loaded.

use serde::{Deserialize, Serialize};

use crate::error::{SetError, SetResult};
use crate::types::Card;

/// Stable identity of a card within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: CardId,
    card: Card,
}

/// Ordered collection of cards with stable ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardSet {
    entries: Vec<Entry>,
    next_id: u64,
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        let mut set = Self::default();
        for card in cards {
            set.append(card);
        }
        set
    }
}

impl From<CardSet> for Vec<Card> {
    fn from(set: CardSet) -> Self {
        set.entries.into_iter().map(|entry| entry.card).collect()
    }
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cards in set order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.card))
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.card)
    }

    /// Mastery is only written through the round-end update.
    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.card)
    }

    /// Card at a position in set order.
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.entries.get(position).map(|entry| &entry.card)
    }

    /// Id of the card at a position in set order.
    pub fn id_at(&self, position: usize) -> Option<CardId> {
        self.entries.get(position).map(|entry| entry.id)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Append a new card. Both sides must be non-empty.
    pub fn push(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> SetResult<CardId> {
        let term = term.into();
        let definition = definition.into();
        require_text("term", &term)?;
        require_text("definition", &definition)?;
        Ok(self.append(Card::new(term, definition)))
    }

    /// Replace both sides of a card, keeping its mastery and star.
    ///
    /// Input is trimmed and neither side may end up empty.
    pub fn edit(&mut self, position: usize, term: &str, definition: &str) -> SetResult<()> {
        let term = term.trim();
        let definition = definition.trim();
        require_text("term", term)?;
        require_text("definition", definition)?;

        let card = self.card_at_mut(position)?;
        card.term = term.to_string();
        card.definition = definition.to_string();
        Ok(())
    }

    pub fn remove(&mut self, position: usize) -> SetResult<Card> {
        self.check_position(position)?;
        Ok(self.entries.remove(position).card)
    }

    pub fn set_starred(&mut self, position: usize, starred: bool) -> SetResult<()> {
        self.card_at_mut(position)?.starred = starred;
        Ok(())
    }

    /// Flip the star on a card and return the new value.
    pub fn toggle_star(&mut self, position: usize) -> SetResult<bool> {
        let card = self.card_at_mut(position)?;
        card.starred = !card.starred;
        Ok(card.starred)
    }

    fn append(&mut self, card: Card) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, card });
        id
    }

    fn check_position(&self, position: usize) -> SetResult<()> {
        if position < self.entries.len() {
            Ok(())
        } else {
            Err(SetError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            })
        }
    }

    fn card_at_mut(&mut self, position: usize) -> SetResult<&mut Card> {
        self.check_position(position)?;
        Ok(&mut self.entries[position].card)
    }
}

fn require_text(field: &'static str, value: &str) -> SetResult<()> {
    if value.is_empty() {
        Err(SetError::EmptyField { field })
    } else {
        Ok(())
    }
}

/// A card set with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSet {
    pub name: String,
    pub cards: CardSet,
}

/// All of a user's sets plus the one currently selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLibrary {
    current_set: String,
    sets: Vec<NamedSet>,
}

/// Name of the set a fresh library starts with.
pub const STARTER_SET_NAME: &str = "Python Basics";

impl Default for SetLibrary {
    fn default() -> Self {
        let mut list_comprehension = Card::new(
            "list comprehension",
            "A concise way to create lists based on existing lists",
        );
        list_comprehension.starred = true;

        let cards = vec![
            Card::new("for loop", "A loop that iterates over a sequence of items"),
            list_comprehension,
            Card::new("dictionary", "A collection of key-value pairs"),
        ];

        Self {
            current_set: STARTER_SET_NAME.to_string(),
            sets: vec![NamedSet {
                name: STARTER_SET_NAME.to_string(),
                cards: CardSet::from(cards),
            }],
        }
    }
}

impl SetLibrary {
    /// Restore the library invariants after loading: at least one set and a
    /// current name that refers to one of them.
    ///
    /// Returns true if anything had to change.
    pub fn repair(&mut self) -> bool {
        if self.sets.is_empty() {
            *self = Self::default();
            return true;
        }
        if self.index_of(&self.current_set).is_none() {
            self.current_set = self.sets[0].name.clone();
            return true;
        }
        false
    }

    pub fn current_name(&self) -> &str {
        &self.current_set
    }

    pub fn current(&self) -> Option<&CardSet> {
        self.get(&self.current_set)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sets.iter().map(|set| set.name.as_str())
    }

    pub fn sets(&self) -> &[NamedSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CardSet> {
        self.sets
            .iter()
            .find(|set| set.name == name)
            .map(|set| &set.cards)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CardSet> {
        self.sets
            .iter_mut()
            .find(|set| set.name == name)
            .map(|set| &mut set.cards)
    }

    /// Look up a set, failing with [`SetError::UnknownSet`].
    pub fn require(&self, name: &str) -> SetResult<&CardSet> {
        self.get(name)
            .ok_or_else(|| SetError::UnknownSet(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> SetResult<&mut CardSet> {
        self.get_mut(name)
            .ok_or_else(|| SetError::UnknownSet(name.to_string()))
    }

    /// Add an empty set and make it current.
    pub fn create(&mut self, name: &str) -> SetResult<()> {
        if name.trim().is_empty() {
            return Err(SetError::BlankSetName);
        }
        if self.index_of(name).is_some() {
            return Err(SetError::DuplicateSet(name.to_string()));
        }
        self.sets.push(NamedSet {
            name: name.to_string(),
            cards: CardSet::new(),
        });
        self.current_set = name.to_string();
        Ok(())
    }

    /// Delete a set. The last remaining set cannot be deleted; deleting the
    /// current set selects the first one left.
    pub fn delete(&mut self, name: &str) -> SetResult<CardSet> {
        let index = self
            .index_of(name)
            .ok_or_else(|| SetError::UnknownSet(name.to_string()))?;
        if self.sets.len() == 1 {
            return Err(SetError::LastSet(name.to_string()));
        }

        let removed = self.sets.remove(index);
        if self.current_set == removed.name {
            self.current_set = self.sets[0].name.clone();
        }
        Ok(removed.cards)
    }

    pub fn select(&mut self, name: &str) -> SetResult<()> {
        if self.index_of(name).is_none() {
            return Err(SetError::UnknownSet(name.to_string()));
        }
        self.current_set = name.to_string();
        Ok(())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.name == name)
    }
}
