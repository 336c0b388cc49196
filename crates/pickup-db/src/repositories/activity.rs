//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::{Activity, ActivityFeature};
use pickup_core::traits::{ActivityRepository, NewActivity, RepoResult};

use crate::models::ActivityModel;

use super::error::map_db_error;

/// UNION ALL across the four per-feature audit tables, tagging each row
/// with its feature so one model type covers the whole feed
const ACTIVITY_UNION: &str = r"
    SELECT 'game' AS feature, id, username, target_username, game_id, data, operation, created_on
    FROM game_activity
    UNION ALL
    SELECT 'comment' AS feature, id, username, target_username, game_id, data, operation, created_on
    FROM comment_activity
    UNION ALL
    SELECT 'follow' AS feature, id, username, target_username, game_id, data, operation, created_on
    FROM follow_activity
    UNION ALL
    SELECT 'invite' AS feature, id, username, target_username, game_id, data, operation, created_on
    FROM invite_activity
";

fn activity_table(feature: ActivityFeature) -> &'static str {
    match feature {
        ActivityFeature::Game => "game_activity",
        ActivityFeature::Comment => "comment_activity",
        ActivityFeature::Follow => "follow_activity",
        ActivityFeature::Invite => "invite_activity",
    }
}

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self, activity))]
    async fn record(&self, activity: &NewActivity) -> RepoResult<()> {
        let table = activity_table(activity.feature);
        sqlx::query(&format!(
            r"
            INSERT INTO {table} (username, target_username, game_id, data, operation)
            VALUES ($1, $2, $3, $4, $5)
            "
        ))
        .bind(&activity.username)
        .bind(&activity.target_username)
        .bind(activity.game_id)
        .bind(&activity.data)
        .bind(&activity.operation)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_for_user(&self, username: &str) -> RepoResult<Vec<Activity>> {
        let results = sqlx::query_as::<_, ActivityModel>(&format!(
            r"
            SELECT feature, id, username, target_username, game_id, data, operation, created_on
            FROM ({ACTIVITY_UNION}) a
            WHERE a.username = $1
            ORDER BY a.created_on DESC, a.id DESC
            "
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Activity::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_followed(&self, username: &str) -> RepoResult<Vec<Activity>> {
        // Only events from accounts the viewer follows that are still active
        let results = sqlx::query_as::<_, ActivityModel>(&format!(
            r"
            SELECT feature, id, username, target_username, game_id, data, operation, created_on
            FROM ({ACTIVITY_UNION}) a
            WHERE a.username IN (
                SELECT f.followed_username
                FROM follows f
                JOIN users u ON u.username = f.followed_username
                WHERE f.follower_username = $1 AND u.is_active
            )
            ORDER BY a.created_on DESC, a.id DESC
            "
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Activity::from).collect())
    }
}
