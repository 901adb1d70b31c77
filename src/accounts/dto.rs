use serde::{Deserialize, Serialize};

use crate::accounts::repo_types::PublicUser;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for changing a password.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub new_password: Option<String>,
}

/// Query parameters for profile lookup. `userId` is accepted as an alias
/// for `id` to keep the original wire contract.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub id: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
    pub redirect: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub message: String,
    pub redirect: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_password_request_uses_camel_case() {
        let req: ChangePasswordRequest = serde_json::from_str(
            r#"{"email":"a@b.co","password":"Abc123_","newPassword":"Xyz789_"}"#,
        )
        .unwrap();
        assert_eq!(req.new_password.as_deref(), Some("Xyz789_"));
    }

    #[test]
    fn register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn success_payloads_never_contain_password() {
        let user = PublicUser {
            id: 7,
            email: "a@b.co".to_string(),
        };
        let body = RegisterResponse {
            message: "User created successfully".into(),
            user: user.clone(),
            redirect: "/profile".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains(r#""redirect":"/profile""#));

        let body = ProfileResponse { user };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains(r#""id":7"#));
    }
}
