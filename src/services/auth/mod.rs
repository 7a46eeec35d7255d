//! 인증 및 토큰 서비스 모듈
//!
//! JWT 액세스/리프레시 토큰의 발급과 검증을 담당합니다.
//!
//! # Features
//!
//! - HS256 고정 알고리즘 서명 (알고리즘 협상 없음)
//! - 액세스/리프레시 토큰별 독립 시크릿
//! - `tokenType` 클레임 기반 토큰 종류 강제
//! - `exp`/`nbf` 30초 시계 오차 허용
//! - 리프레시 토큰을 통한 액세스 토큰 재발급
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(Arc::new(TokenConfig::from_env()?));
//! let pair = token_service.create_token_pair(&payload, None)?;
//! let claims = token_service.verify_access_token(&pair.access_token)?;
//! ```

pub mod clock;
pub mod jwt_codec;
pub mod token_service;

pub use clock::{Clock, SystemClock};
pub use jwt_codec::{JwtCodec, TokenError, TokenKey};
pub use token_service::TokenService;
