//! Auth endpoint payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub contrasena: String,
}

/// Successful login: the signed token plus the profile of the account it
/// belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    pub token: String,
}

/// Password change payload for `PUT /auth/change-password`. Applies to
/// the account the bearer credential belongs to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_change_uses_camel_case() {
        let request = PasswordChangeRequest {
            current_password: "vieja".to_string(),
            new_password: "nueva".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["currentPassword"], "vieja");
        assert_eq!(json["newPassword"], "nueva");
    }

    #[test]
    fn test_login_response_parses() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "id": "d1e2f3a4-b5c6-7890-1234-567890abcdef",
                "nombres": "Ana María",
                "apellidos": "González",
                "email": "ana@example.com",
                "token": "eyJhbGciOiJIUzI1NiJ9.payload.sig"
            }"#,
        )
        .unwrap();
        assert_eq!(response.email, "ana@example.com");
        assert!(response.token.starts_with("eyJ"));
    }
}
