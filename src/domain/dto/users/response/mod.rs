//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 그대로 노출하지 않고, 비밀번호 해시 같은 내부 필드를 제외한
//! 응답 전용 구조체로 변환합니다.

pub mod user_response;

pub use user_response::{AuthResponse, UserResponse};
