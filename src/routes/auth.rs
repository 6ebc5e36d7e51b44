use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{Role, User};
use crate::routes::SkillsField;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub skills: Option<SkillsField>,
    pub role: Option<Role>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let role = req.role.unwrap_or(Role::Candidate);
    let skills = req.skills.map(SkillsField::into_vec).unwrap_or_default();

    let user = db::users::create(
        &state.pool,
        req.name.trim(),
        req.email.trim(),
        &pw_hash,
        role,
        &skills,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("User already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    // Best-effort welcome email; never blocks or fails the registration.
    if let Some(mailer) = state.mailer.clone() {
        let email = user.email.clone();
        let name = user.name.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_welcome(&email, &name).await {
                tracing::error!("Failed to send welcome email: {e}");
            }
        });
    }

    let token =
        encode_token(&Claims::new(user.id, user.role), &state.config.jwt_secret)
            .map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { token, user }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if state.login_limiter.check(&req.email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&req.email);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token =
        encode_token(&Claims::new(user.id, user.role), &state.config.jwt_secret)
            .map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { token, user }))
}
