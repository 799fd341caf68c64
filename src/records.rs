//! Progress that survives between runs
//!
//! Diamonds and the best score, read from the store when a session loads and
//! written back whenever either changes.

use serde::{Deserialize, Serialize};

use crate::consts::{DIAMONDS_KEY, HIGH_SCORE_KEY};
use crate::error::StoreError;
use crate::persistence::PersistentStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    /// Diamonds collected across all runs
    pub diamonds: u32,
    /// Best score across all runs
    pub high_score: u32,
}

impl Records {
    /// Load from the store; absent or unreadable keys count as 0
    pub fn load(store: &dyn PersistentStore) -> Self {
        let records = Self {
            diamonds: clamp_stored(store.get_int_or(DIAMONDS_KEY, 0)),
            high_score: clamp_stored(store.get_int_or(HIGH_SCORE_KEY, 0)),
        };
        log::info!(
            "Loaded records: {} diamonds, high score {}",
            records.diamonds,
            records.high_score
        );
        records
    }

    /// Check if a score beats the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.high_score
    }

    /// Take `score` as the new best if it strictly beats the old one.
    /// Returns true if the record changed.
    pub fn record_score(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.high_score = score;
        true
    }

    /// Count one diamond, returning the new total
    pub fn add_diamond(&mut self) -> u32 {
        self.diamonds = self.diamonds.saturating_add(1);
        self.diamonds
    }

    pub fn save_high_score(&self, store: &mut dyn PersistentStore) -> Result<(), StoreError> {
        store.set_int(HIGH_SCORE_KEY, i64::from(self.high_score))
    }

    pub fn save_diamonds(&self, store: &mut dyn PersistentStore) -> Result<(), StoreError> {
        store.set_int(DIAMONDS_KEY, i64::from(self.diamonds))
    }
}

fn clamp_stored(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_load_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(Records::load(&store), Records::default());
    }

    #[test]
    fn test_load_reads_keys() {
        let store = MemoryStore::with_ints([("Diamonds", 4), ("HighScore", 9)]);
        let records = Records::load(&store);
        assert_eq!(records.diamonds, 4);
        assert_eq!(records.high_score, 9);
    }

    #[test]
    fn test_negative_values_clamp() {
        let store = MemoryStore::with_ints([("Diamonds", -3)]);
        assert_eq!(Records::load(&store).diamonds, 0);
    }

    #[test]
    fn test_record_score_strictly_greater() {
        let mut records = Records {
            diamonds: 0,
            high_score: 10,
        };
        assert!(!records.record_score(10));
        assert!(!records.record_score(3));
        assert_eq!(records.high_score, 10);
        assert!(records.record_score(11));
        assert_eq!(records.high_score, 11);
    }

    #[test]
    fn test_save_round_trip() {
        let mut store = MemoryStore::new();
        let mut records = Records::default();
        records.add_diamond();
        records.add_diamond();
        records.record_score(5);
        records.save_diamonds(&mut store).unwrap();
        records.save_high_score(&mut store).unwrap();
        assert_eq!(Records::load(&store), records);
    }
}
