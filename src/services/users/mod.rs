//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 로그인 등 사용자 계정과 관련된 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일/사용자명 중복 방지
//! - 회원가입 역할 제한
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo, token_service, bcrypt_cost);
//! let response = user_service.login(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
