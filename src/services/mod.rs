//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 있으며, 각 서비스는 리포지토리 트레이트와 다른 서비스를
//! 생성자로 주입받습니다. 애플리케이션 시작 시 한 번 만들어 `web::Data`로 공유합니다.
//!
//! # Features
//!
//! - JWT 토큰 발급, 검증, 갱신 (`auth`)
//! - 회원가입과 로그인 (`users`)
//! - 사용자별 노트 관리 (`notes`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, notes::NoteService, users::UserService};
//!
//! let token_service = TokenService::new(Arc::new(TokenConfig::from_env()?));
//! let user_service = UserService::new(user_repo, token_service.clone(), PasswordConfig::bcrypt_cost());
//! let note_service = NoteService::new(note_repo);
//! ```

pub mod auth;
pub mod notes;
pub mod users;
