pub mod leaderboard;
pub mod password;
