//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use pickup_core::entities::User;
use pickup_core::error::DomainError;
use pickup_core::traits::{NewUser, RepoResult, UserRepository};
use pickup_core::value_objects::UserField;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "username, first_name, last_name, birth_date, city, state, image, \
                            phone, email, is_active, is_private, is_admin, created_on";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Push `column = value` for one validated patch entry, converting the JSON
/// value to the column's type. Type mismatches fail before any SQL runs.
fn push_field_binding(
    qb: &mut QueryBuilder<'_, sqlx::Postgres>,
    field: UserField,
    value: &serde_json::Value,
) -> Result<(), DomainError> {
    qb.push(field.column());
    qb.push(" = ");

    match field {
        UserField::BirthDate => {
            let text = value.as_str().ok_or_else(|| {
                DomainError::ValidationError(format!("{} must be a date string", field.key()))
            })?;
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                DomainError::ValidationError(format!("{} must be YYYY-MM-DD", field.key()))
            })?;
            qb.push_bind(date);
        }
        UserField::IsPrivate => {
            let flag = value.as_bool().ok_or_else(|| {
                DomainError::ValidationError(format!("{} must be a boolean", field.key()))
            })?;
            qb.push_bind(flag);
        }
        UserField::Image | UserField::Phone => {
            // Nullable text columns accept null to clear the value
            let text = match value {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s.clone()),
                _ => {
                    return Err(DomainError::ValidationError(format!(
                        "{} must be a string or null",
                        field.key()
                    )))
                }
            };
            qb.push_bind(text);
        }
        _ => {
            let text = value.as_str().ok_or_else(|| {
                DomainError::ValidationError(format!("{} must be a string", field.key()))
            })?;
            qb.push_bind(text.to_string());
        }
    }

    Ok(())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, include_inactive: bool) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE is_active OR $1
            ORDER BY created_on DESC, username
            "
        ))
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_existing(&self, usernames: &[String]) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            "SELECT username FROM users WHERE username = ANY($1)",
        )
        .bind(usernames)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (username, first_name, last_name, birth_date, city, state,
                               image, phone, email, password_hash, is_private)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birth_date)
        .bind(&user.city)
        .bind(&user.state)
        .bind(&user.image)
        .bind(&user.phone)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.is_private)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("Username or email already taken: {}", user.username))
            })
        })?;

        Ok(User::from(result))
    }

    #[instrument(skip(self, changes))]
    async fn update_fields(
        &self,
        username: &str,
        changes: &[(UserField, serde_json::Value)],
    ) -> RepoResult<User> {
        if changes.is_empty() {
            return Err(DomainError::ValidationError(
                "No fields to update".to_string(),
            ));
        }

        let mut qb = QueryBuilder::new("UPDATE users SET ");
        for (i, (field, value)) in changes.iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            push_field_binding(&mut qb, *field, value)?;
        }
        qb.push(" WHERE username = ");
        qb.push_bind(username);
        qb.push(format!(" RETURNING {USER_COLUMNS}"));

        let result = qb
            .build_query_as::<UserModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| user_not_found(username))?;

        Ok(User::from(result))
    }

    #[instrument(skip(self))]
    async fn set_active(&self, username: &str, active: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET is_active = $2 WHERE username = $1")
            .bind(username)
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(username));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> RepoResult<Vec<User>> {
        // Trigram ranking is delegated to PostgreSQL (pg_trgm)
        let results = sqlx::query_as::<_, UserModel>(&format!(
            r"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE is_active
              AND NOT is_private
              AND (username || ' ' || first_name || ' ' || last_name) % $1
            ORDER BY similarity(username || ' ' || first_name || ' ' || last_name, $1) DESC,
                     username
            LIMIT 25
            "
        ))
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
