//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 서버, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 토큰 설정과 사용자 역할
//!
//! ## 설계 원칙
//!
//! ### 1. 시작 시점 검증
//!
//! 토큰 설정은 프로세스 시작 시 한 번 생성되고 검증됩니다. 시크릿이 없거나,
//! 너무 짧거나, 서로 같거나, 만료 기간 형식이 잘못되면 서버는 기동되지 않습니다.
//!
//! ### 2. 명시적 주입
//!
//! 검증된 [`TokenConfig`]는 `Arc`로 감싸 토큰 서비스에 직접 전달합니다.
//! 전역 상태로 숨겨두지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::{Environment, ServerConfig, TokenConfig};
//!
//! let env = Environment::current();
//! let bind_address = ServerConfig::bind_address();
//! let token_config = Arc::new(TokenConfig::from_env()?);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8000"
//!
//! # 실행 환경 (development, test, staging, production)
//! export APP_ENV="development"
//!
//! # 데이터베이스
//! export MONGO_URI_DEVELOPMENT="mongodb://localhost:27017"
//! export MONGODB_DB_NAME="jotink"
//!
//! # JWT 설정
//! export ACCESS_TOKEN_SECRET="..."
//! export REFRESH_TOKEN_SECRET="..."
//!
//! # 보안 설정
//! export BCRYPT_COST="10"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
