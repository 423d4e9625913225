//! Handlers for the `/auth` resource (register, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use obras_core::error::CoreError;
use obras_core::roles::ROL_CLIENTE_ID;
use obras_core::types::DbId;
use serde::{Deserialize, Serialize};

use obras_db::models::sesion::CreateSesion;
use obras_db::models::usuario::{CreateUsuario, UsuarioResponse};
use obras_db::repositories::{RolRepo, SesionRepo, UsuarioRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

/// The message returned on any credential failure. Deliberately does
/// not distinguish "no such user" from "wrong password".
const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nombre_usuario: String,
    pub password: String,
    pub email: Option<String>,
}

/// Request body for `POST /auth/login`. The identifier may be a
/// username or an email address.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identificador: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub usuario: UsuarioInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UsuarioInfo {
    pub id: DbId,
    pub nombre_usuario: String,
    pub email: Option<String>,
    pub rol: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a user with the default `cliente` role. A duplicate username
/// or email surfaces as 409 through the unique-constraint classifier.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UsuarioResponse>)> {
    validate_password_strength(&input.password, state.config.min_password_len)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let usuario = UsuarioRepo::create(
        &state.pool,
        &CreateUsuario {
            nombre_usuario: input.nombre_usuario,
            email: input.email,
            password_hash,
            rol_id: ROL_CLIENTE_ID,
        },
    )
    .await?;

    let rol = RolRepo::resolve_nombre(&state.pool, usuario.rol_id).await?;

    tracing::info!(usuario_id = usuario.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(UsuarioResponse {
            id: usuario.id,
            nombre_usuario: usuario.nombre_usuario,
            email: usuario.email,
            rol,
            rol_id: usuario.rol_id,
            is_active: usuario.is_active,
            last_login_at: usuario.last_login_at,
            created_at: usuario.created_at,
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username-or-email + password. Returns access and
/// refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find user by username, falling back to email.
    let usuario = UsuarioRepo::find_by_identificador(&state.pool, &input.identificador)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    // 2. Check if the account is active.
    if !usuario.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "La cuenta está desactivada".into(),
        )));
    }

    // 3. Check if the account is temporarily locked.
    if let Some(locked_until) = usuario.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "La cuenta está bloqueada temporalmente. Intente más tarde.".into(),
            )));
        }
    }

    // 4. Verify password.
    let password_valid = verify_password(&input.password, &usuario.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        // 5. On failure: increment counter, lock if threshold exceeded.
        UsuarioRepo::increment_failed_login(&state.pool, usuario.id).await?;

        let new_count = usuario.failed_login_count + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UsuarioRepo::lock_account(&state.pool, usuario.id, lock_until).await?;
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 6. On success: reset failed count, set last_login_at.
    UsuarioRepo::record_successful_login(&state.pool, usuario.id).await?;

    // 7. Resolve role name for JWT claims.
    let rol = RolRepo::resolve_nombre(&state.pool, usuario.rol_id).await?;

    // 8. Generate tokens and create session.
    let response = create_auth_response(
        &state,
        usuario.id,
        &usuario.nombre_usuario,
        usuario.email.as_deref(),
        &rol,
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find matching active session.
    let sesion = SesionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SesionRepo::revoke(&state.pool, sesion.id).await?;

    // 4. Find user and resolve role.
    let usuario = UsuarioRepo::find_by_id(&state.pool, sesion.usuario_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !usuario.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "La cuenta está desactivada".into(),
        )));
    }

    let rol = RolRepo::resolve_nombre(&state.pool, usuario.rol_id).await?;

    // 5. Generate new tokens and create new session.
    let response = create_auth_response(
        &state,
        usuario.id,
        &usuario.nombre_usuario,
        usuario.email.as_deref(),
        &rol,
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    SesionRepo::revoke_all_for_usuario(&state.pool, auth_user.usuario_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    usuario_id: DbId,
    nombre_usuario: &str,
    email: Option<&str>,
    rol: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(usuario_id, rol, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let sesion_input = CreateSesion {
        usuario_id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
        ip_address: None,
    };
    SesionRepo::create(&state.pool, &sesion_input).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        usuario: UsuarioInfo {
            id: usuario_id,
            nombre_usuario: nombre_usuario.to_string(),
            email: email.map(str::to_string),
            rol: rol.to_string(),
        },
    })
}
