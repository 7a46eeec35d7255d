//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 내부 에러 메시지를 응답에 그대로 노출
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 에러 메시지 정제, 높은 bcrypt cost
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `APP_ENV` 또는 `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_development() {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        let name = env::var("APP_ENV")
            .or_else(|_| env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위로 지정되어 있으면 그 값을 우선 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging/Production: 10
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 10,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8000
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 기본 데이터베이스 이름
    pub const DEFAULT_DATABASE_NAME: &'static str = "jotink";

    /// 현재 환경에 해당하는 MongoDB 연결 URI를 반환합니다.
    ///
    /// 환경별 변수(`MONGO_URI_PRODUCTION`, `MONGO_URI_TEST`, `MONGO_URI_DEVELOPMENT`)를
    /// 먼저 확인하고, 없으면 `MONGODB_URI`를 사용합니다.
    pub fn uri() -> Option<String> {
        Self::uri_for_env(&Environment::current(), |key| env::var(key).ok())
    }

    pub fn uri_for_env<F>(environment: &Environment, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = match environment {
            Environment::Production | Environment::Staging => "MONGO_URI_PRODUCTION",
            Environment::Test => "MONGO_URI_TEST",
            Environment::Development => "MONGO_URI_DEVELOPMENT",
        };

        lookup(key)
            .or_else(|| lookup("MONGODB_URI"))
            .filter(|uri| !uri.trim().is_empty())
    }

    /// 데이터베이스 이름. 기본값: "jotink"
    pub fn database_name() -> String {
        env::var("MONGODB_DB_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("Staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            10
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_database_uri_per_environment() {
        let lookup = |key: &str| match key {
            "MONGO_URI_TEST" => Some("mongodb://test-host/".to_string()),
            "MONGODB_URI" => Some("mongodb://fallback/".to_string()),
            _ => None,
        };

        assert_eq!(
            DatabaseConfig::uri_for_env(&Environment::Test, lookup).as_deref(),
            Some("mongodb://test-host/")
        );
        assert_eq!(
            DatabaseConfig::uri_for_env(&Environment::Development, lookup).as_deref(),
            Some("mongodb://fallback/")
        );
        assert_eq!(
            DatabaseConfig::uri_for_env(&Environment::Production, |_| None),
            None
        );
    }
}
