//! # JWT 会话令牌
//!
//! 访问令牌的签发与校验

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::Result;

const ISSUER: &str = "realty-crm";
const AUDIENCE: &str = "realty-crm-users";

/// 令牌声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// 用户 id
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT 管理器
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_hours: i64,
}

impl JwtManager {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);
        validation.validate_exp = true;
        validation.leeway = 30;

        Self {
            encoding_key,
            decoding_key,
            validation,
            token_ttl_hours: config.token_ttl_hours,
        }
    }

    /// 为用户签发访问令牌
    pub fn generate_token(&self, user_id: &str, username: &str) -> Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_ttl_hours)).timestamp(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
        };
        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// 校验令牌并返回其声明
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims> {
        let data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
