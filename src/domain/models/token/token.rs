//! JWT 토큰 클레임 및 발급 결과 구조체
//!
//! 토큰 본문(클레임)의 와이어 형식과, 발급/갱신/진단 결과로 클라이언트나 호출자에게
//! 전달되는 값들을 정의합니다. JSON 필드는 camelCase로 직렬화됩니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Role;

/// 토큰 종류
///
/// 클레임의 `tokenType` 필드로 전달되며 검증 시점에 강제됩니다.
/// 액세스 토큰 검증에 리프레시 토큰을 제시하면 (또는 그 반대) 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 토큰 발급 시 호출자가 제공하는 사용자 정보
///
/// 로그인/회원가입 흐름에서 생성되며 이 서브시스템은 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignPayload {
    /// 사용자 ID
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `id`, `email`, `role`: 토큰 주체의 식별 정보
/// - `tokenType`: `access` 또는 `refresh`
/// - `sessionId`: 액세스/리프레시 토큰 쌍을 연결하는 식별자 (서버에 저장되지 않음)
/// - `iat` / `exp` / `nbf`: 발급, 만료, 유효 시작 시각 (Unix timestamp, 초)
/// - `jti`: 호출마다 새로 생성되는 토큰 식별자
/// - `iss` / `aud`: 발급자와 대상
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub token_type: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    pub jti: String,
    pub iss: String,
    pub aud: String,
}

impl TokenClaims {
    /// 만료 시각
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.exp, 0)
    }
}

/// 토큰 쌍
///
/// 로그인/회원가입 시 발급되어 응답 본문에 포함됩니다. 서버에는 저장되지 않습니다.
/// 만료 시각은 ISO-8601 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    pub access_token_expiry: DateTime<Utc>,
    pub refresh_token_expiry: DateTime<Utc>,
}

/// 리프레시 토큰으로 새로 발급한 액세스 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedAccessToken {
    pub access_token: String,
    pub access_token_expiry: DateTime<Utc>,
}

/// 서명 검증 없이 디코딩한 토큰 (진단 전용)
///
/// 인가 판단의 입력으로 사용해서는 안 됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedToken {
    pub payload: TokenClaims,
    pub is_expired: bool,
    /// 만료까지 남은 시간 (초). 이미 만료된 경우 0 이하
    pub expires_in: i64,
}

/// 토큰 상태 요약
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub is_valid: bool,
    pub is_expired: bool,
    pub expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<TokenClaims>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> TokenClaims {
        TokenClaims {
            id: "65f0c0ffee0000000000beef".to_string(),
            email: "ada@x.com".to_string(),
            role: Role::User,
            token_type: TokenKind::Access,
            session_id: None,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
            nbf: Some(1_700_000_000),
            jti: "0123456789abcdef0123456789abcdef".to_string(),
            iss: "notes-app".to_string(),
            aud: "notes-app-users".to_string(),
        }
    }

    #[test]
    fn test_claims_wire_field_names() {
        let value = serde_json::to_value(sample_claims()).unwrap();

        assert_eq!(value["tokenType"], "access");
        assert_eq!(value["role"], "user");
        assert_eq!(value["nbf"], 1_700_000_000);
        assert!(value.get("sessionId").is_none());
        assert!(value.get("token_type").is_none());
    }

    #[test]
    fn test_claims_without_optional_fields_deserialize() {
        let json = r#"{
            "id": "1", "email": "a@b.c", "role": "admin", "tokenType": "refresh",
            "iat": 1, "exp": 2, "jti": "j", "iss": "i", "aud": "a"
        }"#;

        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.token_type, TokenKind::Refresh);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.session_id, None);
        assert_eq!(claims.nbf, None);
    }

    #[test]
    fn test_token_pair_serializes_iso_timestamps() {
        let expiry = DateTime::<Utc>::from_timestamp(1_700_003_600, 0).unwrap();
        let pair = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_token_expiry: expiry,
            refresh_token_expiry: expiry,
        };

        let value = serde_json::to_value(&pair).unwrap();
        assert_eq!(value["accessToken"], "a");
        assert_eq!(value["refreshToken"], "r");
        assert_eq!(value["accessTokenExpiry"], "2023-11-14T23:13:20Z");
    }
}
