//! Dashboard ranking.
//!
//! Finished riders are ordered by elapsed time, ongoing riders by distance.
//! Every function here is total: malformed numeric fields rank as zero and
//! format as `--:--`, they never fail the whole board.

use std::cmp::Ordering;

use crate::dto::leaderboard::{Leaderboard, RankedRider};
use crate::models::Rider;

pub const UNKNOWN_TIME: &str = "--:--";

/// Rank both lists. Each list gets its own 1-based ranks.
pub fn rank_leaderboard(finished: Vec<Rider>, ongoing: Vec<Rider>) -> Leaderboard {
    Leaderboard {
        finished_players: rank_finished(finished),
        ongoing_players: rank_ongoing(ongoing),
    }
}

/// Fastest elapsed time first; equal times fall back to name.
pub fn rank_finished(mut riders: Vec<Rider>) -> Vec<RankedRider> {
    riders.sort_by(|a, b| {
        compare_numbers(a.total_seconds(), b.total_seconds()).then_with(|| a.name.cmp(&b.name))
    });
    assign_ranks(riders)
}

/// Furthest distance first; equal distances fall back to the lower elapsed time.
pub fn rank_ongoing(mut riders: Vec<Rider>) -> Vec<RankedRider> {
    riders.sort_by(|a, b| {
        compare_numbers(b.progress(), a.progress())
            .then_with(|| compare_numbers(a.total_seconds(), b.total_seconds()))
    });
    assign_ranks(riders)
}

/// Zero-padded `MM:SS`, or `--:--` when either part is missing.
pub fn format_time(minute: Option<i32>, second: Option<i32>) -> String {
    match (minute, second) {
        (Some(m), Some(s)) => format!("{m:02}:{s:02}"),
        _ => UNKNOWN_TIME.to_string(),
    }
}

// inputs are already coerced, so NaN cannot reach here
fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn assign_ranks(riders: Vec<Rider>) -> Vec<RankedRider> {
    riders
        .into_iter()
        .enumerate()
        .map(|(index, rider)| {
            let total_seconds = rider.total_seconds();
            RankedRider {
                rank: index as i64 + 1,
                formatted_time: format_time(rider.minute, rider.second),
                total_seconds,
                rider_id: rider.rider_id,
                name: rider.name,
                phone: rider.phone,
                email: rider.email,
                minute: rider.minute,
                second: rider.second,
                distance: rider.distance,
                finish: rider.finish,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(id: &str, name: &str, minute: i32, second: i32) -> Rider {
        Rider {
            rider_id: id.to_string(),
            name: name.to_string(),
            phone: "000".to_string(),
            email: None,
            minute: Some(minute),
            second: Some(second),
            distance: None,
            finish: true,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn ongoing(id: &str, name: &str, distance: Option<f64>, minute: i32, second: i32) -> Rider {
        Rider {
            distance,
            finish: false,
            ..finished(id, name, minute, second)
        }
    }

    fn names(riders: &[RankedRider]) -> Vec<&str> {
        riders.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_finished_tie_broken_by_name() {
        let ranked = rank_finished(vec![
            finished("1", "Bob", 2, 10),
            finished("2", "Alice", 2, 10),
        ]);

        assert_eq!(names(&ranked), vec!["Alice", "Bob"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_finished_fastest_first() {
        let ranked = rank_finished(vec![
            finished("1", "Slow", 5, 0),
            finished("2", "Fast", 1, 59),
            finished("3", "Mid", 2, 0),
        ]);

        assert_eq!(names(&ranked), vec!["Fast", "Mid", "Slow"]);
        let times: Vec<f64> = ranked.iter().map(|r| r.total_seconds).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_finished_full_duplicates_keep_input_order() {
        let ranked = rank_finished(vec![
            finished("first", "Same", 3, 3),
            finished("second", "Same", 3, 3),
        ]);

        assert_eq!(ranked[0].rider_id, "first");
        assert_eq!(ranked[1].rider_id, "second");
    }

    #[test]
    fn test_ongoing_tie_broken_by_time() {
        let ranked = rank_ongoing(vec![
            ongoing("1", "A", Some(50.0), 1, 0),
            ongoing("2", "B", Some(50.0), 0, 50),
        ]);

        assert_eq!(names(&ranked), vec!["B", "A"]);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_ongoing_furthest_first() {
        let ranked = rank_ongoing(vec![
            ongoing("1", "Near", Some(10.0), 0, 10),
            ongoing("2", "Far", Some(300.0), 9, 0),
            ongoing("3", "Mid", Some(120.5), 4, 0),
        ]);

        assert_eq!(names(&ranked), vec!["Far", "Mid", "Near"]);
    }

    #[test]
    fn test_ongoing_missing_distance_ranks_as_zero() {
        let ranked = rank_ongoing(vec![
            ongoing("1", "Missing", None, 0, 1),
            ongoing("2", "NaN", Some(f64::NAN), 0, 2),
            ongoing("3", "Moving", Some(1.0), 5, 0),
            ongoing("4", "Zero", Some(0.0), 0, 0),
        ]);

        assert_eq!(names(&ranked), vec!["Moving", "Zero", "Missing", "NaN"]);
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn test_ranks_are_dense_and_one_based() {
        let board = rank_leaderboard(
            vec![finished("1", "A", 1, 0), finished("2", "B", 2, 0)],
            vec![
                ongoing("3", "C", Some(3.0), 0, 0),
                ongoing("4", "D", Some(2.0), 0, 0),
                ongoing("5", "E", Some(1.0), 0, 0),
            ],
        );

        let finished_ranks: Vec<i64> = board.finished_players.iter().map(|r| r.rank).collect();
        let ongoing_ranks: Vec<i64> = board.ongoing_players.iter().map(|r| r.rank).collect();
        assert_eq!(finished_ranks, vec![1, 2]);
        assert_eq!(ongoing_ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let finished_riders = vec![
            finished("1", "Bob", 2, 10),
            finished("2", "Alice", 2, 10),
            finished("3", "Cara", 1, 0),
        ];
        let ongoing_riders = vec![
            ongoing("4", "A", Some(50.0), 1, 0),
            ongoing("5", "B", None, 0, 50),
        ];

        let first = rank_leaderboard(finished_riders.clone(), ongoing_riders.clone());
        let second = rank_leaderboard(finished_riders, ongoing_riders);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let board = rank_leaderboard(Vec::new(), Vec::new());
        assert!(board.finished_players.is_empty());
        assert!(board.ongoing_players.is_empty());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some(5), Some(9)), "05:09");
        assert_eq!(format_time(Some(12), Some(0)), "12:00");
        assert_eq!(format_time(None, Some(30)), "--:--");
        assert_eq!(format_time(Some(1), None), "--:--");
    }

    #[test]
    fn test_missing_time_ranks_as_zero_and_formats_unknown() {
        let mut partial = finished("1", "Partial", 0, 0);
        partial.minute = None;
        partial.second = Some(30);

        let ranked = rank_finished(vec![finished("2", "Whole", 0, 45), partial]);

        assert_eq!(names(&ranked), vec!["Partial", "Whole"]);
        assert_eq!(ranked[0].total_seconds, 30.0);
        assert_eq!(ranked[0].formatted_time, "--:--");
        assert_eq!(ranked[1].formatted_time, "00:45");
    }
}
