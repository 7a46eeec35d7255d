//! # Domain Models Module
//!
//! 영속되지 않는 도메인 값 객체를 정의합니다.
//!
//! ```text
//! models/
//! ├── auth/    ← 인증된 요청 주체, 역할 요구사항
//! └── token/   ← JWT 클레임, 토큰 쌍, 진단 정보
//! ```
//!
//! Entities(`../entities/`)와 달리 식별자보다 값 자체가 중요하며,
//! 요청 처리 중에만 존재합니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
