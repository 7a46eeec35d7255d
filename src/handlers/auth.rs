//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 액세스 토큰 갱신 엔드포인트입니다.
//! 서버는 세션을 저장하지 않으며, 모든 응답은 토큰 쌍 또는 새 액세스 토큰을 담습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/register` | 회원가입 + 토큰 쌍 발급 | 201 Created |
//! | `POST` | `/auth/login` | 로그인 + 토큰 쌍 발급 | 200 OK |
//! | `POST` | `/auth/refresh` | 리프레시 토큰으로 액세스 토큰 재발급 | 200 OK |

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest, RefreshTokenRequest};
use crate::domain::dto::ApiResponse;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/register`
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.register(payload.into_inner()).await?;
    log::info!("회원가입 완료: {} ({})", response.user.username, response.user.id);

    Ok(ApiResponse::created("User created Successfully", response))
}

/// 로컬 로그인 핸들러
///
/// `identifier`는 이메일 또는 사용자명입니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.login(payload.into_inner()).await?;
    log::info!("로그인 성공: {} ({})", response.user.username, response.user.id);

    Ok(ApiResponse::ok("User Logged In Successfully", response))
}

/// 액세스 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증한 뒤 같은 사용자와 세션 ID로 새 액세스 토큰을 발급합니다.
/// 비밀번호를 다시 요구하지 않습니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_token(
    token_service: web::Data<TokenService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let refreshed = token_service
        .refresh_access_token(&payload.refresh_token)
        .map_err(|e| {
            log::warn!("토큰 갱신 실패: {}", e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::ok("Access token refreshed Successfully", refreshed))
}
