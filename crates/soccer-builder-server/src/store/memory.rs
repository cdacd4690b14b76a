use super::{StoreError, TeamStoreBackend};
use async_trait::async_trait;
use soccer_builder_model::Team;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-memory backend used by tests and as the fallback when no store URL is
/// configured. The call counters let tests assert write behavior.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<HashMap<String, Team>>,
    pub load_calls: AtomicU64,
    pub save_calls: AtomicU64,
}

#[async_trait]
impl TeamStoreBackend for MemoryBackend {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, key: &str) -> Result<Option<Team>, StoreError> {
        self.load_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.records.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, team: &Team) -> Result<(), StoreError> {
        self.save_calls.fetch_add(1, Ordering::Relaxed);
        self.records
            .lock()
            .await
            .insert(key.to_string(), team.clone());
        Ok(())
    }
}
