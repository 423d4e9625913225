//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use obras_core::error::CoreError;
use obras_core::types::DbId;

use obras_db::repositories::SesionRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Besides validating the token's signature and expiry, the extractor
/// requires the user to still hold an active session; logout revokes
/// every session, so an access token dies with it instead of lingering
/// until its `exp`.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(usuario_id = user.usuario_id, rol = %user.rol, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub usuario_id: DbId,
    /// The user's role name (e.g. `"admin"`, `"cliente"`).
    pub rol: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let has_session = SesionRepo::has_active_for_usuario(&state.pool, claims.sub)
            .await
            .map_err(AppError::Database)?;
        if !has_session {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session revoked or expired".into(),
            )));
        }

        Ok(AuthUser {
            usuario_id: claims.sub,
            rol: claims.rol,
        })
    }
}
