//! Leaderboard semanal de validaciones

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::analytics::LeaderboardEntry;
use crate::models::field_report::ValidationRow;

pub const LEADERBOARD_WINDOW_DAYS: i64 = 7;
pub const LEADERBOARD_SIZE: usize = 10;

/// Suma validaciones por autor y conserva los 10 primeros.
///
/// Empates se resuelven por nombre de usuario para que el orden sea estable.
pub fn rank_validations(rows: Vec<ValidationRow>) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<Uuid, LeaderboardEntry> = HashMap::new();

    for row in rows {
        totals
            .entry(row.user_id)
            .or_insert_with(|| LeaderboardEntry {
                user_id: row.user_id,
                username: row.username.clone(),
                rank: row.rank.clone(),
                total_validations: 0,
            })
            .total_validations += i64::from(row.validations);
    }

    let mut entries: Vec<LeaderboardEntry> = totals.into_values().collect();
    entries.sort_by(|a, b| {
        b.total_validations
            .cmp(&a.total_validations)
            .then_with(|| a.username.cmp(&b.username))
    });
    entries.truncate(LEADERBOARD_SIZE);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user_id: Uuid, username: &str, validations: i32) -> ValidationRow {
        ValidationRow {
            user_id,
            username: username.to_string(),
            rank: "Scout".to_string(),
            validations,
        }
    }

    #[test]
    fn test_sums_per_author_and_sorts() {
        let alpha = Uuid::new_v4();
        let bravo = Uuid::new_v4();
        let rows = vec![row(alpha, "alpha", 3), row(bravo, "bravo", 5), row(alpha, "alpha", 4)];

        let board = rank_validations(rows);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].user_id, alpha);
        assert_eq!(board[0].total_validations, 7);
        assert_eq!(board[1].total_validations, 5);
    }

    #[test]
    fn test_keeps_top_ten() {
        let rows = (0..15)
            .map(|i| row(Uuid::new_v4(), &format!("driver{:02}", i), i))
            .collect();

        let board = rank_validations(rows);
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board[0].total_validations, 14);
        assert_eq!(board[9].total_validations, 5);
    }

    #[test]
    fn test_empty_window() {
        assert!(rank_validations(Vec::new()).is_empty());
    }
}
