use serde::{Deserialize, Serialize};

use crate::services::api::{ApiClient, ApiError};

/// The signed-in account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Linked payout/payment wallet
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub is_artist: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub is_artist: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    pub user: CurrentUser,
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    ApiClient::new()
        .post("/auth/login", &LoginRequest { email, password })
        .await
}

pub async fn register(request: &RegisterRequest<'_>) -> Result<AuthResponse, ApiError> {
    ApiClient::new().post("/auth/register", request).await
}

pub async fn me() -> Result<CurrentUser, ApiError> {
    ApiClient::new().get("/users/me").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_response_token_alias() {
        let resp: AuthResponse = serde_json::from_value(json!({
            "token": "jwt",
            "user": { "id": "u1", "username": "mo", "email": "mo@example.com" }
        }))
        .unwrap();
        assert_eq!(resp.access_token, "jwt");
        assert!(resp.user.wallet_address.is_none());
    }
}
