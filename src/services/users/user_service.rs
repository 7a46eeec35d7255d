//! # 사용자 서비스 구현
//!
//! 회원가입과 로그인을 담당하는 비즈니스 로직 계층입니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Handler ──▶ UserService ──▶ UserRepository (MongoDB)
//!                  │
//!                  └──▶ TokenService (토큰 쌍 발급)
//! ```
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost (`PasswordConfig::bcrypt_cost`)
//! - **정규화**: 이메일과 사용자명은 소문자로 저장/조회
//! - **역할 제한**: 회원가입 시 `admin`, `moderator` 요청 불가

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;

use crate::config::Role;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest};
use crate::domain::dto::users::response::AuthResponse;
use crate::domain::entities::users::user::User;
use crate::repositories::users::user_repo::{
    UserRepository, DUPLICATE_EMAIL_MESSAGE, DUPLICATE_USERNAME_MESSAGE,
};
use crate::services::auth::TokenService;
use crate::utils::string_utils::looks_like_email;

const UNKNOWN_IDENTIFIER_MESSAGE: &str = "Invalid email/username";
const WRONG_PASSWORD_MESSAGE: &str = "Invalid password";

/// 사용자 비즈니스 로직 서비스
///
/// 리포지토리와 토큰 서비스는 생성 시 주입됩니다.
///
/// ```rust,ignore
/// let user_service = UserService::new(user_repo, token_service, PasswordConfig::bcrypt_cost());
/// let response = user_service.register(request).await?;
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    token_service: TokenService,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, token_service: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost,
        }
    }

    /// 회원가입
    ///
    /// 검증된 요청을 받아 사용자를 저장하고 토큰 쌍을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 또는 사용자명 중복
    /// * `AppError::ValidationError` - 회원가입으로 받을 수 없는 역할
    /// * `AppError::InternalError` - 해싱 또는 토큰 서명 실패
    ///
    /// 다음과 같은 로그를 남깁니다:
    ///
    /// ```text
    /// [INFO] Password hashing took: 3.1ms
    /// [INFO] Total user registration took: 5.4ms
    /// ```
    pub async fn register(&self, request: CreateUserRequest) -> Result<AuthResponse, AppError> {
        let start_time = Instant::now();

        let role = request.role.unwrap_or_default();
        if !role.is_self_assignable() {
            return Err(AppError::ValidationError(format!(
                "Role '{}' cannot be requested at registration",
                role
            )));
        }

        let email = request.email.trim().to_lowercase();
        let username = request.username.trim().to_lowercase();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::ConflictError(DUPLICATE_USERNAME_MESSAGE.to_string()));
        }

        let hash_start = Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .context("password hashing failed")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(&username, &email, password_hash, request.avatar_url, role);
        let created_user = self.user_repo.create(user).await?;

        let response = self.issue_tokens(created_user)?;

        log::info!("Total user registration took: {:?}", start_time.elapsed());
        Ok(response)
    }

    /// 로그인
    ///
    /// `identifier`에 `@`가 있으면 이메일, 없으면 사용자명으로 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError("Invalid email/username")` - 사용자 없음
    /// * `AppError::AuthenticationError("Invalid password")` - 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let start_time = Instant::now();
        let identifier = request.identifier.trim().to_lowercase();

        let user = if looks_like_email(&identifier) {
            self.user_repo.find_by_email(&identifier).await?
        } else {
            self.user_repo.find_by_username(&identifier).await?
        }
        .ok_or_else(|| AppError::AuthenticationError(UNKNOWN_IDENTIFIER_MESSAGE.to_string()))?;

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(&request.password, &user.password_hash)
            .context("password verification failed")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", user.username);
            return Err(AppError::AuthenticationError(WRONG_PASSWORD_MESSAGE.to_string()));
        }

        let response = self.issue_tokens(user)?;

        log::debug!("Total login took: {:?}", start_time.elapsed());
        Ok(response)
    }

    fn issue_tokens(&self, user: User) -> Result<AuthResponse, AppError> {
        let payload = user.sign_payload().ok_or_else(|| {
            AppError::InternalError("persisted user is missing an id".to_string())
        })?;

        let tokens = self.token_service.create_token_pair(&payload, None)?;
        log::info!("토큰 발급 완료: {} ({})", user.username, user.role);

        Ok(AuthResponse::new(user, tokens))
    }
}
