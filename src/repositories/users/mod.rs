//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 [`UserRepository`] 트레이트에 의존하고,
//! 런타임에는 [`MongoUserRepository`]가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo = MongoUserRepository::new(db.clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserRepository};
