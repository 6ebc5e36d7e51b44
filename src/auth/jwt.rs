use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Role;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self {
            sub: user_id,
            role,
            exp: (Utc::now() + Duration::days(30)).timestamp(),
        }
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn round_trip_preserves_identity_and_role() {
        let id = Uuid::now_v7();
        let token = encode_token(&Claims::new(id, Role::Recruiter), SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, Role::Recruiter);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_token(&Claims::new(Uuid::now_v7(), Role::Candidate), SECRET).unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode_token("not.a.token", SECRET).is_err());
    }
}
