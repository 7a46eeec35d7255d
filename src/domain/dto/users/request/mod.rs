//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 타입으로 변환하고 `validator`로 검증합니다.
//!
//! ```rust,ignore
//! #[actix_web::post("/register")]
//! async fn register(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```

pub mod create_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use auth_request::{LoginRequest, RefreshTokenRequest};
