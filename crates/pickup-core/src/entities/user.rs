//! User entity - represents a registered player account

use chrono::{DateTime, NaiveDate, Utc};

/// User account, keyed by username. Accounts are never hard-deleted;
/// `is_active` flips on deactivation/reactivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub city: String,
    pub state: String,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub is_active: bool,
    pub is_private: bool,
    pub is_admin: bool,
    pub created_on: DateTime<Utc>,
}

impl User {
    /// Full display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years as of `today`
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            username: "ana".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1994, 6, 12).unwrap(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            image: None,
            phone: None,
            email: "ana@example.com".to_string(),
            is_active: true,
            is_private: false,
            is_admin: false,
            created_on: Utc::now(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sample_user().display_name(), "Ana Ruiz");
    }

    #[test]
    fn test_age_on() {
        let user = sample_user();
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert_eq!(user.age_on(today), 30);

        let before_birthday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        assert_eq!(user.age_on(before_birthday), 29);
    }
}
