use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A rider as shown on the dashboard: stored attributes plus its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RankedRider {
    pub rank: i64,
    pub rider_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
    pub distance: Option<f64>,
    pub finish: bool,
    pub total_seconds: f64,
    pub formatted_time: String,
}

/// Both ranked lists. Ranks restart at 1 in each list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Leaderboard {
    pub finished_players: Vec<RankedRider>,
    pub ongoing_players: Vec<RankedRider>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub title: String,
    pub finished_players: Vec<RankedRider>,
    pub ongoing_players: Vec<RankedRider>,
}

impl DashboardResponse {
    pub fn new(title: impl Into<String>, leaderboard: Leaderboard) -> Self {
        Self {
            title: title.into(),
            finished_players: leaderboard.finished_players,
            ongoing_players: leaderboard.ongoing_players,
        }
    }
}
