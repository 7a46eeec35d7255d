use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::config::Role;
use crate::core::AppError;
use crate::domain::token::token::TokenClaims;

/// 검증된 액세스 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 Request Extensions에 저장하며, 해당 요청이 끝나면 폐기됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedIdentity {
    /// 사용자 고유 ID
    pub user_id: String,
    pub email: String,
    pub role: Role,
    /// 토큰 쌍을 연결하는 세션 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl From<TokenClaims> for AuthenticatedIdentity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email,
            role: claims.role,
            session_id: claims.session_id,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 적용되지 않은 라우트에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedIdentity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authentication required".to_string(),
            ))),
        }
    }
}
