//! User database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
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
