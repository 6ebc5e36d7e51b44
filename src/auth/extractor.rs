use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::models::Role;
use crate::state::SharedState;

/// The verified identity attached to a request. Every request re-verifies
/// the token; no session state lives server-side.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }

    pub fn require_recruiter(&self) -> Result<(), AppError> {
        if matches!(self.role, Role::Recruiter | Role::Admin) {
            Ok(())
        } else {
            Err(AppError::Forbidden("Recruiter access required".to_string()))
        }
    }

    pub fn require_candidate(&self) -> Result<(), AppError> {
        if self.role == Role::Candidate {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Only candidates can perform this action".to_string(),
            ))
        }
    }

    /// Ownership rule for mutations: the resource's owner, or an admin.
    pub fn can_manage(&self, owner: Option<Uuid>) -> bool {
        self.role == Role::Admin || owner == Some(self.user_id)
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // The SPA sends the token in x-auth-token; Authorization is accepted
        // as well, with or without the Bearer prefix.
        let raw = parts
            .headers
            .get("x-auth-token")
            .or_else(|| parts.headers.get("authorization"))
            .ok_or_else(|| AppError::Unauthorized("No token, authorization denied".to_string()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

        let claims = jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Token is not valid".to_string()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
