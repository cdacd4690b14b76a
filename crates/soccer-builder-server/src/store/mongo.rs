// SPDX-License-Identifier: Apache-2.0

use super::{StoreError, TeamStoreBackend};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use soccer_builder_model::Team;

const TEAMS_COLLECTION: &str = "teams";

/// Persisted shape: the team flattened into a single document under the
/// fixed `_id`.
#[derive(Debug, Serialize, Deserialize)]
struct TeamRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    team: Team,
}

/// MongoDB-backed document store.
pub struct MongoBackend {
    teams: Collection<TeamRecord>,
}

impl MongoBackend {
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| StoreError(format!("mongodb connect failed: {e}")))?;
        Ok(Self {
            teams: client.database(db_name).collection(TEAMS_COLLECTION),
        })
    }
}

#[async_trait]
impl TeamStoreBackend for MongoBackend {
    fn backend_tag(&self) -> &'static str {
        "mongodb"
    }

    async fn load(&self, key: &str) -> Result<Option<Team>, StoreError> {
        let record = self
            .teams
            .find_one(doc! { "_id": key })
            .await
            .map_err(|e| StoreError(format!("team read failed: {e}")))?;
        Ok(record.map(|r| r.team))
    }

    async fn save(&self, key: &str, team: &Team) -> Result<(), StoreError> {
        let record = TeamRecord {
            id: key.to_string(),
            team: team.clone(),
        };
        self.teams
            .replace_one(doc! { "_id": key }, &record)
            .upsert(true)
            .await
            .map_err(|e| StoreError(format!("team write failed: {e}")))?;
        Ok(())
    }
}
