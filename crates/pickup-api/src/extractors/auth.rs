//! Authentication extractors
//!
//! Bearer tokens are decoded opportunistically: `OptionalAuthUser` never
//! rejects a request, it just carries no identity when the token is absent
//! or invalid. Routes that need an identity use `AuthUser`, and routes
//! that scope a path to an account use `ensure_self_or_admin`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Username from the token claims
    pub username: String,
    /// Admin flag from the token claims
    pub is_admin: bool,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(username: String, is_admin: bool) -> Self {
        Self { username, is_admin }
    }

    /// Route-level self-or-admin rule: the path's username must be the
    /// acting account unless the actor is an admin
    pub fn ensure_self_or_admin(&self, username: &str) -> Result<(), ApiError> {
        if self.username == username || self.is_admin {
            Ok(())
        } else {
            Err(ApiError::NotSelfOrAdmin)
        }
    }

    /// Admin-only gate
    pub fn ensure_admin(&self) -> Result<(), ApiError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(ApiError::NotSelfOrAdmin)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        Ok(AuthUser::new(claims.sub, claims.admin))
    }
}

/// Opportunistically authenticated user
///
/// Carries `None` when the authorization header is missing or the token
/// does not validate; the request itself is never rejected here.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        let Ok(TypedHeader(Authorization(bearer))) = auth_result else {
            return Ok(OptionalAuthUser(None));
        };

        let app_state = AppState::from_ref(state);
        match app_state.jwt_service().validate_access_token(bearer.token()) {
            Ok(claims) => Ok(OptionalAuthUser(Some(AuthUser::new(
                claims.sub,
                claims.admin,
            )))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid bearer token");
                Ok(OptionalAuthUser(None))
            }
        }
    }
}
