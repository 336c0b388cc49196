//! Game entity - a scheduled pickup game

use chrono::{DateTime, Utc};

/// Derived scheduling classification. Never stored; computed from
/// `game_time` relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Scheduled for today or a future date
    Pending,
    /// Game date has passed
    Resolved,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
        }
    }
}

/// Game entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub game_time: DateTime<Utc>,
    pub creator_username: String,
    pub is_active: bool,
    pub created_on: DateTime<Utc>,
}

impl Game {
    /// Classify the game relative to `now`. A game counts as pending on
    /// its own calendar day, not just while its start time is in the future.
    pub fn status_at(&self, now: DateTime<Utc>) -> GameStatus {
        if self.game_time.date_naive() >= now.date_naive() {
            GameStatus::Pending
        } else {
            GameStatus::Resolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn game_at(time: DateTime<Utc>) -> Game {
        Game {
            id: 1,
            title: "5v5 at Zilker".to_string(),
            description: "Casual run".to_string(),
            location: "Zilker Park".to_string(),
            game_time: time,
            creator_username: "ana".to_string(),
            is_active: true,
            created_on: time,
        }
    }

    #[test]
    fn test_future_game_is_pending() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let game = game_at(Utc.with_ymd_and_hms(2024, 3, 17, 18, 0, 0).unwrap());
        assert_eq!(game.status_at(now), GameStatus::Pending);
    }

    #[test]
    fn test_same_day_game_is_pending() {
        // Earlier the same day still counts as pending
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap();
        let game = game_at(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap());
        assert_eq!(game.status_at(now), GameStatus::Pending);
    }

    #[test]
    fn test_past_game_is_resolved() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let game = game_at(Utc.with_ymd_and_hms(2024, 3, 9, 18, 0, 0).unwrap());
        assert_eq!(game.status_at(now), GameStatus::Resolved);
    }
}
