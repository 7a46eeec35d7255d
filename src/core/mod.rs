//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 단일 응답 변환 지점 제공
//! - **안정적인 코드**: 클라이언트가 분기할 수 있는 에러 코드 (`TOKEN_EXPIRED` 등)
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppResult};
//!
//! async fn find_note(id: &str) -> AppResult<Note> {
//!     repo.find(id).await?
//!         .ok_or_else(|| AppError::NotFound("Sorry, this note does not exist".into()))
//! }
//! ```

pub mod errors;

pub use errors::*;
