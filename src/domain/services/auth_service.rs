use crate::config::Config;
use crate::domain::models::auth::Claims;
use crate::domain::models::user::User;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

pub const AUDIENCE: &str = "venue-frontend";

pub struct AuthService {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            issuer: config.auth_issuer.clone(),
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issues an access token plus the CSRF token embedded in its claims.
    pub fn issue_session(&self, user: &User) -> Result<(String, String), AppError> {
        let csrf_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let now = Utc::now();

        let claims = Claims {
            iss: self.issuer.clone(),
            sub: user.id.clone(),
            aud: AUDIENCE.to_string(),
            exp: (now + Duration::hours(12)).timestamp() as usize,
            iat: now.timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
            role: user.role,
            planner_id: user.planner_id.clone(),
            csrf_token: csrf_token.clone(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("JWT encoding failed: {}", e);
                AppError::Internal
            })?;

        Ok((access_token, csrf_token))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUDIENCE]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}
