//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::Role;
use crate::domain::token::token::SignPayload;

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장됩니다. 이메일과 사용자명은 소문자로 정규화되어 저장되며
/// 각각 유니크 인덱스가 걸려 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 소문자)
    pub username: String,
    /// 사용자 이메일 (unique, 소문자)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// 사용자 역할
    #[serde(default)]
    pub role: Role,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 사용자명과 이메일은 앞뒤 공백을 제거하고 소문자로 정규화합니다.
    pub fn new(
        username: &str,
        email: &str,
        password_hash: String,
        avatar_url: Option<String>,
        role: Role,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: username.trim().to_lowercase(),
            email: email.trim().to_lowercase(),
            password_hash,
            avatar_url,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 토큰 발급용 정보
    ///
    /// 저장되지 않은 사용자(ID 없음)는 `None`을 반환합니다.
    pub fn sign_payload(&self) -> Option<SignPayload> {
        Some(SignPayload {
            id: self.id_string()?,
            email: self.email.clone(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_identity() {
        let user = User::new("  Ada ", "Ada@X.com", "hash".to_string(), None, Role::User);

        assert_eq!(user.username, "ada");
        assert_eq!(user.email, "ada@x.com");
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.id.is_none());
    }

    #[test]
    fn test_sign_payload_requires_id() {
        let mut user = User::new("ada", "ada@x.com", "hash".to_string(), None, Role::Premium);
        assert!(user.sign_payload().is_none());

        let id = ObjectId::new();
        user.id = Some(id);
        let payload = user.sign_payload().unwrap();
        assert_eq!(payload.id, id.to_hex());
        assert_eq!(payload.email, "ada@x.com");
        assert_eq!(payload.role, Role::Premium);
    }

    #[test]
    fn test_role_defaults_to_user_when_missing() {
        let doc = mongodb::bson::doc! {
            "username": "ada",
            "email": "ada@x.com",
            "password_hash": "hash",
            "created_at": DateTime::now(),
            "updated_at": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.avatar_url.is_none());
    }
}
