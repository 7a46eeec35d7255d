//! 인증 및 토큰 관련 설정 모듈
//!
//! JWT 액세스/리프레시 토큰 발급에 필요한 설정과 사용자 역할 정의를 관리합니다.
//! 토큰 설정은 프로세스 시작 시 한 번 생성되고 검증되며, 이후에는 읽기 전용으로
//! `Arc<TokenConfig>` 형태로 토큰 서비스에 주입됩니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # 두 시크릿은 32자 이상이어야 하며 서로 달라야 합니다
//! export ACCESS_TOKEN_SECRET="access-secret-at-least-32-characters-long"
//! export REFRESH_TOKEN_SECRET="refresh-secret-at-least-32-characters-long"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_EXP="1h"        # 기본값 1h, 형식: ^\d+[smhd]$
//! export REFRESH_TOKEN_EXP="7d"       # 기본값 7d
//! export JWT_ISSUER="notes-app"
//! export JWT_AUDIENCE="notes-app-users"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::TokenConfig;
//!
//! let config = Arc::new(TokenConfig::from_env()?);
//! let token_service = TokenService::new(config);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 시크릿 키 최소 길이
pub const MIN_SECRET_LENGTH: usize = 32;

pub const DEFAULT_ACCESS_TOKEN_EXP: &str = "1h";
pub const DEFAULT_REFRESH_TOKEN_EXP: &str = "7d";
pub const DEFAULT_ISSUER: &str = "notes-app";

/// 토큰 만료 기간 상한 (일)
pub const MAX_EXPIRY_DAYS: i64 = 3650;
pub const DEFAULT_AUDIENCE: &str = "notes-app-users";

/// 설정 로딩/검증 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("{0} must be set")]
    MissingVar(&'static str),

    /// 시크릿 길이 부족
    #[error("{0} must be at least {min} characters long", min = MIN_SECRET_LENGTH)]
    SecretTooShort(&'static str),

    /// 액세스/리프레시 시크릿이 동일함
    #[error("ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET must be different")]
    IdenticalSecrets,

    /// 만료 기간 형식 오류
    #[error("invalid expiry duration '{0}': expected a number followed by one of s, m, h, d")]
    InvalidExpiry(String),

    /// 만료 기간이 상한을 초과함
    #[error("expiry duration '{0}' exceeds the maximum of {max} days", max = MAX_EXPIRY_DAYS)]
    ExpiryTooLong(String),
}

/// 토큰 만료 기간
///
/// `"30s"`, `"15m"`, `"1h"`, `"7d"` 처럼 숫자와 단위(s/m/h/d)로 구성된 문자열에서 파싱됩니다.
/// 파싱은 설정 로딩 시점에 끝나므로, 요청 처리 중에는 잘못된 형식이 존재할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryDuration {
    raw: String,
    duration: Duration,
}

impl ExpiryDuration {
    /// 파싱된 기간
    pub fn as_duration(&self) -> Duration {
        self.duration
    }

    /// 원래의 문자열 표현
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ExpiryDuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidExpiry(s.to_string());

        let unit = s.chars().last().ok_or_else(invalid)?;
        let digits = &s[..s.len() - unit.len_utf8()];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let amount: i64 = digits.parse().map_err(|_| invalid())?;
        let seconds = match unit {
            's' => Some(amount),
            'm' => amount.checked_mul(60),
            'h' => amount.checked_mul(60 * 60),
            'd' => amount.checked_mul(24 * 60 * 60),
            _ => None,
        }
        .ok_or_else(invalid)?;

        let duration = Duration::try_seconds(seconds).ok_or_else(invalid)?;
        if duration > Duration::days(MAX_EXPIRY_DAYS) {
            return Err(ConfigError::ExpiryTooLong(s.to_string()));
        }

        Ok(Self {
            raw: s.to_string(),
            duration,
        })
    }
}

impl fmt::Display for ExpiryDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// JWT 토큰 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 시크릿으로 서명됩니다.
/// 한쪽 시크릿이 유출되더라도 다른 종류의 토큰을 위조할 수 없습니다.
#[derive(Clone)]
pub struct TokenConfig {
    access_secret: String,
    refresh_secret: String,
    access_expiry: ExpiryDuration,
    refresh_expiry: ExpiryDuration,
    issuer: String,
    audience: String,
}

impl TokenConfig {
    /// 값을 직접 지정하여 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::SecretTooShort` - 시크릿이 32자 미만
    /// * `ConfigError::IdenticalSecrets` - 두 시크릿이 동일
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_expiry: ExpiryDuration,
        refresh_expiry: ExpiryDuration,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let access_secret = access_secret.into();
        let refresh_secret = refresh_secret.into();

        if access_secret.chars().count() < MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort("ACCESS_TOKEN_SECRET"));
        }
        if refresh_secret.chars().count() < MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort("REFRESH_TOKEN_SECRET"));
        }
        if access_secret == refresh_secret {
            return Err(ConfigError::IdenticalSecrets);
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            access_expiry,
            refresh_expiry,
            issuer: issuer.into(),
            audience: audience.into(),
        })
    }

    /// 프로세스 환경 변수에서 설정을 로드하고 검증합니다.
    ///
    /// 애플리케이션 시작 시 한 번만 호출됩니다. 실패하면 서버는 기동되지 않습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 로드합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let access_secret = get("ACCESS_TOKEN_SECRET")
            .ok_or(ConfigError::MissingVar("ACCESS_TOKEN_SECRET"))?;
        let refresh_secret = get("REFRESH_TOKEN_SECRET")
            .ok_or(ConfigError::MissingVar("REFRESH_TOKEN_SECRET"))?;

        let access_expiry = get("ACCESS_TOKEN_EXP")
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_EXP.to_string())
            .parse::<ExpiryDuration>()?;
        let refresh_expiry = get("REFRESH_TOKEN_EXP")
            .unwrap_or_else(|| DEFAULT_REFRESH_TOKEN_EXP.to_string())
            .parse::<ExpiryDuration>()?;

        let issuer = get("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string());
        let audience = get("JWT_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        Self::new(
            access_secret,
            refresh_secret,
            access_expiry,
            refresh_expiry,
            issuer,
            audience,
        )
    }

    pub fn access_secret(&self) -> &str {
        &self.access_secret
    }

    pub fn refresh_secret(&self) -> &str {
        &self.refresh_secret
    }

    pub fn access_expiry(&self) -> &ExpiryDuration {
        &self.access_expiry
    }

    pub fn refresh_expiry(&self) -> &ExpiryDuration {
        &self.refresh_expiry
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_expiry", &self.access_expiry.as_str())
            .field("refresh_expiry", &self.refresh_expiry.as_str())
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

/// 사용자 역할
///
/// 토큰 클레임의 `role` 필드와 사용자 문서에 소문자 문자열로 저장됩니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::config::Role;
///
/// let role: Role = "admin".parse()?;
/// assert_eq!(role.as_str(), "admin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자 (기본값)
    #[default]
    User,
    /// 관리자
    Admin,
    /// 중재자
    Moderator,
    /// 프리미엄 사용자
    Premium,
}

impl Role {
    /// 소문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Premium => "premium",
        }
    }

    /// 회원가입 시 사용자가 직접 요청할 수 있는 역할인지 여부
    pub fn is_self_assignable(&self) -> bool {
        matches!(self, Role::User | Role::Premium)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            "premium" => Ok(Role::Premium),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
