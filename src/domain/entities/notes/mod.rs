//! Notes Entity Module
//!
//! 사용자별 노트 엔티티를 정의합니다.

pub mod note;

pub use note::Note;
