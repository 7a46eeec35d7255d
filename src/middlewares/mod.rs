//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출
//! - 액세스 토큰 검증 (리프레시 토큰 거부)
//! - 검증된 사용자 정보를 request extension에 저장
//! - 만료는 `TOKEN_EXPIRED`, 그 외 실패는 `UNAUTHORIZED`로 응답
//!
//! ### 2. 인가 미들웨어 (Authorize)
//! - 역할 허용 목록 검사
//! - 사용자 정보 없음 → 401, 역할 불일치 → 403
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::{AuthMiddleware, Authorize};
//!
//! App::new()
//!     .app_data(web::Data::new(token_service))
//!     .service(
//!         web::scope("/api/v1/notes")
//!             .wrap(Authorize::any_role())
//!             .wrap(AuthMiddleware::required())
//!             .service(get_all_notes)
//!     )
//! ```

pub mod auth_middleware;
pub mod authorize;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use authorize::Authorize;
