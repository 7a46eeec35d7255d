//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 객체 (User, Note)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 값 객체 (토큰 클레임, 인증 주체)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::{entities::notes::Note, dto::notes::NoteResponse};
//!
//! let note = Note::new(owner_id, "Groceries", "milk, eggs".to_string());
//! let saved = note_repo.create(note).await?;
//! let response = NoteResponse::from(saved);
//! ```
//!
//! ## 설계 원칙
//!
//! 1. **명시적 변환**: Entity → DTO는 `From` trait으로만 변환
//! 2. **민감 정보 분리**: 비밀번호 해시는 엔티티에만 존재
//! 3. **값 객체 불변성**: 토큰 클레임은 발급 후 수정하지 않음

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
