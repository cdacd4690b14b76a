use crate::stats::Stats;
use serde::{Deserialize, Serialize};

/// Placement on the pitch diagram. No range constraint is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One roster entry. `id` is caller-supplied and never generated server-side;
/// `number` stays a string so kits like "10bis" survive round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    pub number: String,
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    pub stats: Stats,
    pub position: Position,
    #[serde(default)]
    pub votes: Vec<Stats>,
}

impl Player {
    /// Append one vote and recompute the displayed stats as the rounded mean
    /// of the full vote history. The pre-vote stats value never participates
    /// in the average. Returns the recomputed stats.
    pub fn record_vote(&mut self, vote: Stats) -> Stats {
        self.votes.push(vote);
        if let Some(mean) = Stats::round_mean(&self.votes) {
            self.stats = mean;
        }
        self.stats.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PitchSettings {
    pub mode: String,
    pub formation: String,
    pub color: String,
    pub texture: String,
    pub kit_color: String,
    pub kit_number_color: String,
    pub view_mode: String,
}

impl Default for PitchSettings {
    fn default() -> Self {
        Self {
            mode: "11".to_string(),
            formation: "4-3-3".to_string(),
            color: "green".to_string(),
            texture: "striped".to_string(),
            kit_color: "#ef4444".to_string(),
            kit_number_color: "#ffffff".to_string(),
            view_mode: "2d".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubInfo {
    pub name: String,
    pub logo: String,
}

impl Default for ClubInfo {
    fn default() -> Self {
        Self {
            name: "MI EQUIPO FC".to_string(),
            logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1b/FC_Bayern_M%C3%BCnchen_logo_%282017%29.svg/1200px-FC_Bayern_M%C3%BCnchen_logo_%282017%29.svg.png".to_string(),
        }
    }
}

/// The aggregate root. Roster order is display order and caller-controlled;
/// players are created and removed only through whole-team saves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub players: Vec<Player>,
    pub pitch_settings: PitchSettings,
    pub club_info: ClubInfo,
}

impl Team {
    /// First roster entry with the given id, in roster order.
    #[must_use]
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    #[must_use]
    pub fn player_index(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }
}
