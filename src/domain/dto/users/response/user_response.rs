use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Role;
use crate::domain::entities::users::user::User;
use crate::domain::token::token::TokenPair;
use crate::utils::time_utils::to_chrono;

/// 클라이언트에 노출되는 사용자 정보 (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            avatar_url,
            role,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            avatar_url,
            role,
            created_at: to_chrono(created_at),
            updated_at: to_chrono(updated_at),
        }
    }
}

/// 회원가입/로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub tokens: TokenPair,
}

impl AuthResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let mut user = User::new("ada", "ada@x.com", "$2b$10$hash".to_string(), None, Role::User);
        user.id = Some(ObjectId::new());

        let value = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(value["id"], user.id_string().unwrap());
        assert_eq!(value["role"], "user");
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
        assert!(value["createdAt"].is_string());
    }
}
