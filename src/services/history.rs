use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

use crate::models::{PreferenceWeights, Recommendation, SearchRecord};

/// Per-user log of past searches, most recent first.
///
/// Bounded at `capacity` entries per user; recording beyond the bound evicts
/// the oldest entry. Held in memory only, the durable copy of anything worth
/// keeping lives in the remote profile store.
pub struct HistoryStore {
    entries: RwLock<HashMap<String, VecDeque<SearchRecord>>>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Append a search to the user's history, evicting the oldest entry if
    /// the bound is reached. Returns the stored record.
    pub async fn record(
        &self,
        user_id: &str,
        location: &str,
        preferences: PreferenceWeights,
        recommendations: Vec<Recommendation>,
    ) -> SearchRecord {
        let record = SearchRecord {
            id: uuid::Uuid::new_v4().to_string(),
            location: location.to_string(),
            preferences,
            recommendations,
            timestamp: chrono::Utc::now(),
        };

        let mut entries = self.entries.write().await;
        let log = entries.entry(user_id.to_string()).or_default();
        log.push_front(record.clone());
        log.truncate(self.capacity);

        record
    }

    /// All records for a user, most recent first.
    pub async fn list(&self, user_id: &str) -> Vec<SearchRecord> {
        let entries = self.entries.read().await;
        entries
            .get(user_id)
            .map(|log| log.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove one record by id; returns whether anything was removed.
    pub async fn delete(&self, user_id: &str, record_id: &str) -> bool {
        let mut entries = self.entries.write().await;
        if let Some(log) = entries.get_mut(user_id) {
            let before = log.len();
            log.retain(|record| record.id != record_id);
            return log.len() < before;
        }
        false
    }

    /// Drop all records for a user; returns how many were removed.
    pub async fn clear(&self, user_id: &str) -> usize {
        let mut entries = self.entries.write().await;
        entries.remove(user_id).map(|log| log.len()).unwrap_or(0)
    }
}
