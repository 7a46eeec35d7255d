//! 노트 서비스 백엔드
//!
//! Rust 기반의 노트 관리 REST API 서비스입니다.
//! JWT 액세스/리프레시 토큰 기반 인증과 사용자별 노트 CRUD를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 이메일 또는 사용자명 로그인
//! - **JWT 인증**: HS256 서명, 토큰 타입별 비밀키, 상태 없는 리프레시
//! - **인가**: 역할 기반 접근 제어 미들웨어
//! - **노트**: 제목 검색, 날짜 필터, 페이지네이션을 포함한 CRUD
//! - **MongoDB**: 사용자 및 노트 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 토큰 검증, 역할 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use notes_service_backend::services::auth::TokenService;
//! use notes_service_backend::services::users::UserService;
//!
//! // 서비스는 명시적으로 조립하여 web::Data로 주입합니다
//! let token_service = TokenService::new(Arc::new(TokenConfig::from_env()?));
//! let user_service = UserService::new(user_repo, token_service.clone(), PasswordConfig::bcrypt_cost());
//!
//! let auth = user_service.login(request).await?;
//! let claims = token_service.verify_access_token(&auth.tokens.access_token)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
