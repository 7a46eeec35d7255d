//! # User HTTP Handlers
//!
//! 인증된 사용자 본인 정보를 다루는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/me` | 현재 액세스 토큰의 사용자 정보 | 200 OK |

use actix_web::{get, HttpResponse};

use crate::core::AppError;
use crate::domain::auth::AuthenticatedIdentity;
use crate::domain::dto::ApiResponse;

/// 현재 사용자 조회
///
/// 데이터베이스를 조회하지 않고 검증된 토큰 클레임만으로 응답합니다.
///
/// # Endpoint
/// `GET /api/v1/me`
#[get("")]
pub async fn current_user(identity: AuthenticatedIdentity) -> Result<HttpResponse, AppError> {
    Ok(ApiResponse::ok("Current user retrieved Successfully", identity))
}
