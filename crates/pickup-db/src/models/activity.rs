//! Activity database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row shape shared by the four per-feature audit tables. Union queries
/// select a literal `feature` discriminator alongside each row.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub feature: String,
    pub id: i64,
    pub username: String,
    pub target_username: Option<String>,
    pub game_id: Option<i64>,
    pub data: Option<serde_json::Value>,
    pub operation: String,
    pub created_on: DateTime<Utc>,
}
