//! In-memory table of rounds in progress.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use flashlearn_core::{Round, RoundSettings};
use uuid::Uuid;

/// How long an unfinished round is kept before it is dropped.
pub const DEFAULT_ROUND_MAX_AGE_HOURS: i64 = 24;

/// A round being played against one set.
#[derive(Debug, Clone)]
pub struct ActiveRound {
    pub set_name: String,
    pub settings: RoundSettings,
    pub round: Round,
    pub started_at: DateTime<Utc>,
}

impl ActiveRound {
    pub fn new(set_name: String, settings: RoundSettings, round: Round) -> Self {
        Self {
            set_name,
            settings,
            round,
            started_at: Utc::now(),
        }
    }
}

/// Rounds keyed by a random id handed to the client.
///
/// Rounds older than `max_age` are evicted whenever a new round is added.
#[derive(Debug)]
pub struct RoundSessions {
    rounds: HashMap<Uuid, ActiveRound>,
    max_age: Duration,
}

impl Default for RoundSessions {
    fn default() -> Self {
        Self::with_max_age(Duration::hours(DEFAULT_ROUND_MAX_AGE_HOURS))
    }
}

impl RoundSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            rounds: HashMap::new(),
            max_age,
        }
    }

    pub fn insert(&mut self, round: ActiveRound) -> Uuid {
        self.evict_started_before(Utc::now() - self.max_age);

        let id = Uuid::new_v4();
        self.rounds.insert(id, round);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&ActiveRound> {
        self.rounds.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut ActiveRound> {
        self.rounds.get_mut(id)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<ActiveRound> {
        self.rounds.remove(id)
    }

    /// Drop every round played against `set_name`. Their card ids would not
    /// refer to any card of a later set with the same name.
    pub fn remove_for_set(&mut self, set_name: &str) -> usize {
        let before = self.rounds.len();
        self.rounds.retain(|_, active| active.set_name != set_name);
        before - self.rounds.len()
    }

    /// Drop rounds started before `cutoff`. Returns how many were dropped.
    pub fn evict_started_before(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.rounds.len();
        self.rounds.retain(|_, active| active.started_at >= cutoff);
        let evicted = before - self.rounds.len();
        if evicted > 0 {
            tracing::info!("Evicted {} stale rounds", evicted);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
