//! # Domain Entities Module
//!
//! MongoDB에 저장되는 도메인 엔티티들을 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`users::User`] | `users` | 사용자 계정 |
//! | [`notes::Note`] | `notes` | 사용자별 노트 |
//!
//! ## 규칙
//!
//! - `_id`는 `Option<ObjectId>`로 두고 저장 후 채웁니다
//! - 시각 필드는 `bson::DateTime`을 사용합니다
//! - 다른 엔티티는 ID로만 참조합니다 (`Note::user_id`)

pub mod users;
pub mod notes;
