//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 계층의 실패는 [`AppError`]로 분류되어 전파되고,
//! `actix_web::ResponseError` 구현 한 곳에서 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | 코드 | HTTP Status | 사용 시나리오 |
//! |----------|------|-------------|---------------|
//! | `BadRequest` | `BAD_REQUEST` | 400 | 잘못된 요청 형식, 손상된 토큰 구조 |
//! | `AuthenticationError` | `UNAUTHORIZED` | 401 | 인증 실패 |
//! | `TokenExpired` | `TOKEN_EXPIRED` | 401 | 토큰 만료 (클라이언트는 갱신 시도) |
//! | `AuthorizationError` | `FORBIDDEN` | 403 | 권한 부족 |
//! | `NotFound` | `NOT_FOUND` | 404 | 리소스 없음 |
//! | `ConflictError` | `CONFLICT` | 409 | 중복 데이터 |
//! | `ValidationError` | `VALIDATION_ERROR` | 422 | 입력값 검증 실패 |
//! | `DatabaseError` | `DATABASE_ERROR` | 500 | 데이터베이스 오류 |
//! | `InternalError` | `INTERNAL_ERROR` | 500 | 서명 실패 등 내부 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "error": {
//!     "message": "Sorry, this note does not exist",
//!     "code": "NOT_FOUND",
//!     "statusCode": 404,
//!     "timestamp": "2024-01-01T00:00:00Z"
//!   }
//! }
//! ```
//!
//! 500 계열 에러는 개발 환경이 아니면 메시지가 `"Something went wrong"`으로
//! 치환되며, 원본 메시지는 서버 로그에만 남습니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::config::Environment;

/// 내부 오류를 클라이언트에 노출하지 않을 때 사용하는 메시지
pub const SANITIZED_MESSAGE: &str = "Something went wrong";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 잘못된 요청 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 인증 실패 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰 만료 (401 Unauthorized, 다른 인증 실패와 구분되는 코드)
    #[error("Token expired: {0}")]
    TokenExpired(String),

    /// 권한 부족 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 입력값 검증 실패 (422 Unprocessable Entity)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 오류 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 오류 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기에 사용할 수 있는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::AuthenticationError(_) => "UNAUTHORIZED",
            AppError::TokenExpired(_) => "TOKEN_EXPIRED",
            AppError::AuthorizationError(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 변형에 담긴 원본 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::AuthenticationError(msg)
            | AppError::TokenExpired(msg)
            | AppError::AuthorizationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::ValidationError(msg)
            | AppError::DatabaseError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 서버 측 오류 여부
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// 응답 본문을 생성합니다.
    ///
    /// `expose_internal`이 `false`이면 500 계열 메시지를 정제합니다.
    pub fn to_body(&self, expose_internal: bool) -> serde_json::Value {
        let message = if self.is_server_error() && !expose_internal {
            SANITIZED_MESSAGE
        } else {
            self.message()
        };

        json!({
            "success": false,
            "error": {
                "message": message,
                "code": self.code(),
                "statusCode": self.status_code().as_u16(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        })
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) | AppError::TokenExpired(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 계열 에러는 원본 메시지를 `log::error!`로 기록합니다.
    fn error_response(&self) -> HttpResponse {
        if self.is_server_error() {
            log::error!("{}", self);
        }

        let expose_internal = Environment::current().is_development();

        HttpResponse::build(self.status_code()).json(self.to_body(expose_internal))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::AuthenticationError("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::TokenExpired("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::AuthorizationError("x".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("x".into()), StatusCode::CONFLICT),
            (AppError::ValidationError("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.error_response().status(), status, "{:?}", error);
        }
    }

    #[test]
    fn test_expired_is_distinguished_from_unauthorized() {
        let expired = AppError::TokenExpired("Access token has expired".into());
        let invalid = AppError::AuthenticationError("Authentication failed".into());

        assert_eq!(expired.status_code(), invalid.status_code());
        assert_eq!(expired.code(), "TOKEN_EXPIRED");
        assert_eq!(invalid.code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_body_shape() {
        let body = AppError::NotFound("Sorry, this note does not exist".into()).to_body(false);

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["message"], "Sorry, this note does not exist");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["statusCode"], 404);
        assert!(body["error"]["timestamp"].is_string());
    }

    #[test]
    fn test_internal_message_is_sanitized() {
        let error = AppError::InternalError("failed to sign token: InvalidKeyFormat".into());

        let sanitized = error.to_body(false);
        assert_eq!(sanitized["error"]["message"], SANITIZED_MESSAGE);

        let exposed = error.to_body(true);
        assert_eq!(
            exposed["error"]["message"],
            "failed to sign token: InvalidKeyFormat"
        );
    }

    #[test]
    fn test_client_errors_are_never_sanitized() {
        let body = AppError::AuthorizationError("Insufficient permissions".into()).to_body(false);
        assert_eq!(body["error"]["message"], "Insufficient permissions");
    }

    #[test]
    fn test_error_context() {
        let result: Result<(), String> = Err("boom".to_string());
        let error = result.context("loading config").unwrap_err();

        assert_eq!(error, AppError::InternalError("loading config: boom".into()));
    }
}
