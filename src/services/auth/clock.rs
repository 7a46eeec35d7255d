//! 시간 및 난수 식별자 제공자
//!
//! 토큰 만료 계산에 쓰이는 현재 시각과, 토큰 ID / 세션 ID에 쓰이는
//! 암호학적으로 안전한 난수 식별자를 제공합니다.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 현재 시각 제공자
///
/// 토큰 서비스는 이 trait를 통해서만 시간을 읽습니다.
/// 테스트에서는 고정된 시각을 주입하여 만료 경계를 결정적으로 검증합니다.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 토큰 식별자(`jti`)를 생성합니다.
///
/// UUID v4(OS 난수)를 하이픈 없는 32자리 16진수 문자열로 반환합니다.
pub fn generate_token_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// 세션 ID를 생성합니다. (하이픈 포함 UUID 형식)
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use chrono::{DateTime, Duration, Utc};

    use super::Clock;

    /// 테스트용 수동 시계
    pub struct FixedClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl FixedClock {
        pub fn at(timestamp: i64) -> Self {
            Self {
                now: Mutex::new(DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap()),
            }
        }

        pub fn advance(&self, seconds: i64) {
            let mut now = self.now.lock().unwrap();
            *now += Duration::seconds(seconds);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id_is_hex_of_sixteen_bytes() {
        let id = generate_token_id();

        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identifiers_are_unique() {
        assert_ne!(generate_token_id(), generate_token_id());
        assert_ne!(generate_session_id(), generate_session_id());
    }

    #[test]
    fn test_session_id_is_uuid() {
        let session_id = generate_session_id();
        assert!(Uuid::parse_str(&session_id).is_ok());
    }
}
