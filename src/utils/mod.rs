//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 로그인 식별자 판별
//! - [`time_utils`] - BSON/chrono 시각 변환, 날짜 필터 파싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::looks_like_email;
//! use crate::utils::time_utils::parse_day_range;
//!
//! let is_email = looks_like_email("ada@example.com");
//! let range = parse_day_range("2024-05-01");
//! ```

pub mod string_utils;
pub mod time_utils;
