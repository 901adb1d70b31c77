use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,            // serial primary key
    pub email: String,      // unique natural key
    #[serde(skip_serializing)]
    pub password: String,   // argon2 hash, not exposed in JSON
}

/// Projection of a user returned to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_never_contains_hash() {
        let user = User {
            id: 1,
            email: "test@example.com".to_string(),
            password: "$argon2id$v=19$secret".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("test@example.com"));
    }
}
