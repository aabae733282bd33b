use storage::{
    dto::leaderboard::Leaderboard, error::Result, services::leaderboard::rank_leaderboard,
    store::RiderStore,
};

/// Fetch both rider sets fresh and rank them
pub async fn load_leaderboard(store: &dyn RiderStore) -> Result<Leaderboard> {
    let (finished, ongoing) = tokio::try_join!(
        store.find_by_finished(true),
        store.find_by_finished(false)
    )?;

    let leaderboard = rank_leaderboard(finished, ongoing);

    for rider in &leaderboard.ongoing_players {
        tracing::debug!(
            rank = rider.rank,
            name = %rider.name,
            distance = ?rider.distance,
            time = %rider.formatted_time,
            "Ongoing rider"
        );
    }

    Ok(leaderboard)
}
