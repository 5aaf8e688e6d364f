use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Form, Json, extract::State};
use tracing::error;

use veritas_db::StoreError;
use veritas_types::api::{AuthResponse, LoginForm, SignupForm};

use crate::AppState;
use crate::error::ApiError;

pub async fn signup(
    State(state): State<AppState>,
    Form(req): Form<SignupForm>,
) -> Result<Json<AuthResponse>, ApiError> {
    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|_| ApiError::Internal)?
        .to_string();

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.create_user(&req.name, &req.email, &password_hash))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal
        })?
        .map_err(|e| match e {
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            other => {
                error!("signup store error: {}", other);
                ApiError::Internal
            }
        })?;

    Ok(Json(AuthResponse { success: true }))
}

pub async fn login(
    State(state): State<AppState>,
    Form(req): Form<LoginForm>,
) -> Result<Json<AuthResponse>, ApiError> {
    let db = state.clone();
    let email = req.email.clone();
    let user = tokio::task::spawn_blocking(move || db.db.get_user_by_email(&email))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal
        })?
        .map_err(|e| {
            error!("login store error: {}", e);
            ApiError::Internal
        })?
        // Unknown email and wrong password must be indistinguishable.
        .ok_or(ApiError::InvalidCredentials)?;

    let parsed_hash =
        PasswordHash::new(&user.password_hash).map_err(|_| ApiError::Internal)?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::InvalidCredentials)?;

    Ok(Json(AuthResponse { success: true }))
}
