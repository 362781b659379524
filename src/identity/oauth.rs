//! # OAuth 客户端
//!
//! 按配置驱动的授权地址构造、授权码换取令牌与用户信息拉取

use std::collections::HashMap;

use reqwest::Url;
use serde_json::Value;

use super::ExternalLoginInfo;
use crate::auth_error;
use crate::config::{OAuthConfig, OAuthProviderConfig};
use crate::error::{AppError, Result};

/// 外部登录提供商客户端
pub struct OAuthClient {
    http: reqwest::Client,
    providers: HashMap<String, OAuthProviderConfig>,
}

impl OAuthClient {
    #[must_use]
    pub fn new(config: &OAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            providers: config.providers.clone(),
        }
    }

    /// 已配置的提供商名称
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    fn provider(&self, name: &str) -> Result<&OAuthProviderConfig> {
        self.providers
            .get(name)
            .ok_or_else(|| AppError::auth(format!("未配置的登录提供商: {name}")))
    }

    /// 构造跳转到提供商的授权地址
    pub fn authorize_url(&self, provider: &str, state: &str) -> Result<String> {
        let config = self.provider(provider)?;
        let scope = config.scope.as_deref().unwrap_or("openid email profile");
        let url = Url::parse_with_params(
            &config.auth_url,
            &[
                ("client_id", config.client_id.as_str()),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", scope),
                ("state", state),
            ],
        )
        .map_err(|e| AppError::auth_with_source("授权地址构造失败", e))?;
        Ok(url.to_string())
    }

    /// 用授权码换取访问令牌
    pub async fn exchange_code(&self, provider: &str, code: &str) -> Result<String> {
        let config = self.provider(provider)?;
        let response = self
            .http
            .post(&config.token_url)
            .form(&[
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(auth_error!(
                "令牌交换失败，提供商返回状态 {}",
                response.status()
            ));
        }

        let body: Value = response.json().await?;
        body.get("access_token")
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| AppError::auth("令牌响应中缺少 access_token"))
    }

    /// 拉取用户信息并组装外部登录身份
    pub async fn fetch_login_info(
        &self,
        provider: &str,
        access_token: &str,
    ) -> Result<ExternalLoginInfo> {
        let config = self.provider(provider)?;
        let response = self
            .http
            .get(&config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(auth_error!(
                "用户信息拉取失败，提供商返回状态 {}",
                response.status()
            ));
        }

        let body: Value = response.json().await?;
        Self::login_info_from_claims(provider, &body)
    }

    /// 完整走完授权码流程：换令牌、拉用户信息
    pub async fn complete_login(&self, provider: &str, code: &str) -> Result<ExternalLoginInfo> {
        let access_token = self.exchange_code(provider, code).await?;
        self.fetch_login_info(provider, &access_token).await
    }

    /// 从提供商的用户信息 JSON 提取登录身份
    ///
    /// 唯一标识取 `id` 或 OIDC 的 `sub`，两者都缺失视为认证失败
    fn login_info_from_claims(provider: &str, claims: &Value) -> Result<ExternalLoginInfo> {
        let provider_key = claims
            .get("id")
            .or_else(|| claims.get("sub"))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .ok_or_else(|| AppError::auth("提供商未返回用户唯一标识"))?;

        let text = |key: &str| {
            claims
                .get(key)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };

        Ok(ExternalLoginInfo {
            provider: provider.to_string(),
            provider_key,
            email: text("email"),
            first_name: text("given_name"),
            last_name: text("family_name"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> OAuthClient {
        let mut providers = HashMap::new();
        providers.insert(
            "google".to_string(),
            OAuthProviderConfig {
                client_id: "client-id".to_string(),
                client_secret: "client-secret".to_string(),
                auth_url: "https://accounts.google.com/o/oauth2/auth".to_string(),
                token_url: "https://oauth2.googleapis.com/token".to_string(),
                userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
                scope: None,
                redirect_uri: "http://localhost:8090/auth/callback/google".to_string(),
            },
        );
        OAuthClient::new(&OAuthConfig { providers })
    }

    #[test]
    fn test_authorize_url_carries_parameters() {
        let url = client()
            .authorize_url("google", "state-123")
            .expect("authorize url");
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains("state=state-123"));
        assert!(url.contains("response_type=code"));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = client().authorize_url("github", "s").unwrap_err();
        assert!(matches!(err, AppError::Auth { .. }));
    }

    #[test]
    fn test_login_info_from_oidc_claims() {
        let info = OAuthClient::login_info_from_claims(
            "google",
            &json!({
                "sub": "12345",
                "email": "jdoe@example.com",
                "given_name": "John",
                "family_name": "Doe"
            }),
        )
        .expect("login info");

        assert_eq!(info.provider_key, "12345");
        assert_eq!(info.email.as_deref(), Some("jdoe@example.com"));
        assert_eq!(info.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_login_info_requires_subject() {
        let err =
            OAuthClient::login_info_from_claims("google", &json!({"email": "x@y.z"})).unwrap_err();
        assert!(matches!(err, AppError::Auth { .. }));
    }
}
