//! JWT 토큰 발급 및 검증 서비스
//!
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신을 담당합니다.
//! 두 종류의 토큰은 서로 다른 시크릿으로 서명되며, 클레임의 `tokenType`으로 구분됩니다.
//! 서버는 세션을 저장하지 않으므로 모든 판단은 서명과 클레임만으로 이루어집니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::{ExpiryDuration, TokenConfig};
use crate::core::AppError;
use crate::domain::token::token::{
    DecodedToken, RefreshedAccessToken, SignPayload, TokenClaims, TokenInfo, TokenKind, TokenPair,
};
use crate::services::auth::clock::{generate_session_id, generate_token_id, Clock, SystemClock};
use crate::services::auth::jwt_codec::{validate_token_format, JwtCodec, TokenError, TokenKey};

/// JWT 토큰 관리 서비스
///
/// 내부 상태는 모두 불변이며 `Clone`은 `Arc` 복제 비용만 듭니다.
/// `web::Data<TokenService>`로 워커 간에 공유됩니다.
#[derive(Clone)]
pub struct TokenService {
    config: Arc<TokenConfig>,
    codec: JwtCodec,
    access_key: TokenKey,
    refresh_key: TokenKey,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// 시스템 시계를 사용하는 토큰 서비스를 생성합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = Arc::new(TokenConfig::from_env()?);
    /// let token_service = TokenService::new(config);
    /// ```
    pub fn new(config: Arc<TokenConfig>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Arc<TokenConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            codec: JwtCodec::new(config.issuer(), config.audience()),
            access_key: TokenKey::from_secret(config.access_secret()),
            refresh_key: TokenKey::from_secret(config.refresh_secret()),
            config,
            clock,
        }
    }

    /// 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `payload` - 토큰 주체 정보
    /// * `session_id` - 토큰 쌍을 연결할 세션 ID (선택)
    /// * `expiry_override` - 설정된 만료 기간 대신 사용할 기간 (선택)
    ///
    /// # Errors
    ///
    /// * `TokenError::Signing` - 서명 실패
    pub fn create_access_token(
        &self,
        payload: &SignPayload,
        session_id: Option<&str>,
        expiry_override: Option<&ExpiryDuration>,
    ) -> Result<String, TokenError> {
        self.issue(payload, TokenKind::Access, session_id, expiry_override)
            .map(|(token, _)| token)
    }

    /// 리프레시 토큰 생성
    ///
    /// 리프레시 토큰은 `REFRESH_TOKEN_EXP`로 설정된 자체 만료 기간을 사용합니다.
    pub fn create_refresh_token(
        &self,
        payload: &SignPayload,
        session_id: Option<&str>,
        expiry_override: Option<&ExpiryDuration>,
    ) -> Result<String, TokenError> {
        self.issue(payload, TokenKind::Refresh, session_id, expiry_override)
            .map(|(token, _)| token)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 세션 ID가 주어지지 않으면 새 UUID를 만들어 두 토큰에 함께 넣습니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = token_service.create_token_pair(&payload, None)?;
    /// println!("Access token expires at {}", pair.access_token_expiry);
    /// ```
    pub fn create_token_pair(
        &self,
        payload: &SignPayload,
        session_id: Option<&str>,
    ) -> Result<TokenPair, TokenError> {
        let session_id = session_id
            .map(str::to_string)
            .unwrap_or_else(generate_session_id);

        let (access_token, access_token_expiry) =
            self.issue(payload, TokenKind::Access, Some(&session_id), None)?;
        let (refresh_token, refresh_token_expiry) =
            self.issue(payload, TokenKind::Refresh, Some(&session_id), None)?;

        log::debug!("토큰 쌍 발급: 사용자 {}, 세션 {}", payload.id, session_id);

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_token_expiry,
            refresh_token_expiry,
        })
    }

    /// 액세스 토큰 검증
    ///
    /// # Errors
    ///
    /// * `TokenError::Malformed` - 토큰 구조 오류
    /// * `TokenError::Expired` / `TokenError::NotYetValid` - 유효 기간 밖
    /// * `TokenError::Invalid` - 서명/발급자/대상/알고리즘/클레임 오류
    /// * `TokenError::WrongKind` - 리프레시 토큰이 제시됨
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_kind(token, TokenKind::Access)
    }

    /// 리프레시 토큰 검증
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_kind(token, TokenKind::Refresh)
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 리프레시 토큰을 완전히 검증한 뒤, 같은 사용자 정보와 세션 ID를 담은
    /// 새 액세스 토큰을 만듭니다. 검증에 실패하면 토큰을 발급하지 않습니다.
    pub fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshedAccessToken, TokenError> {
        let claims = self.verify_refresh_token(refresh_token)?;

        let payload = SignPayload {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        };

        let (access_token, access_token_expiry) = self.issue(
            &payload,
            TokenKind::Access,
            claims.session_id.as_deref(),
            None,
        )?;

        log::info!("액세스 토큰 갱신: 사용자 {}", payload.id);

        Ok(RefreshedAccessToken {
            access_token,
            access_token_expiry,
        })
    }

    /// 서명 검증 없이 토큰을 디코딩합니다. (진단 전용)
    pub fn decode_token(&self, token: &str) -> Option<DecodedToken> {
        let payload = self.codec.decode_unverified(token)?;
        let now = self.clock.now().timestamp();

        Some(DecodedToken {
            is_expired: payload.exp < now,
            expires_in: payload.exp - now,
            payload,
        })
    }

    /// 액세스 토큰의 유효성과 만료 상태를 요약합니다.
    pub fn get_token_info(&self, token: &str) -> TokenInfo {
        let now = self.clock.now().timestamp();

        match self.verify_access_token(token) {
            Ok(claims) => TokenInfo {
                is_valid: true,
                is_expired: false,
                expires_in: claims.exp - now,
                payload: Some(claims),
            },
            Err(_) => {
                let decoded = self.decode_token(token);
                TokenInfo {
                    is_valid: false,
                    is_expired: decoded.as_ref().map_or(true, |d| d.is_expired),
                    expires_in: decoded.as_ref().map_or(0, |d| d.expires_in),
                    payload: None,
                }
            }
        }
    }

    /// 토큰 구조를 빠르게 확인합니다. 서명은 검사하지 않습니다.
    pub fn validate_token_format(&self, token: &str) -> bool {
        validate_token_format(token)
    }

    /// `Authorization` 헤더에서 Bearer 토큰 추출
    ///
    /// 헤더는 정확히 `Bearer <token>` 형식이어야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 헤더 누락, 형식 오류, 빈 토큰
    pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AppError> {
        let header = header.ok_or_else(|| {
            AppError::AuthenticationError("Authorization header missing".to_string())
        })?;

        let parts: Vec<&str> = header.split(' ').collect();
        if parts.len() != 2 || parts[0] != "Bearer" {
            return Err(AppError::AuthenticationError(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = parts[1];
        if token.is_empty() {
            return Err(AppError::AuthenticationError(
                "Token missing from authorization header".to_string(),
            ));
        }

        Ok(token)
    }

    fn issue(
        &self,
        payload: &SignPayload,
        kind: TokenKind,
        session_id: Option<&str>,
        expiry_override: Option<&ExpiryDuration>,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let default_expiry = match kind {
            TokenKind::Access => self.config.access_expiry(),
            TokenKind::Refresh => self.config.refresh_expiry(),
        };
        let key = self.key_for(kind);
        let expiry = expiry_override.unwrap_or(default_expiry);

        let issued_at = self.clock.now().timestamp();
        let expires_at = issued_at
            .checked_add(expiry.as_duration().num_seconds())
            .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0))
            .ok_or_else(|| TokenError::Signing(format!("expiry '{}' is out of range", expiry)))?;

        let claims = TokenClaims {
            id: payload.id.clone(),
            email: payload.email.clone(),
            role: payload.role,
            token_type: kind,
            session_id: session_id.map(str::to_string),
            iat: issued_at,
            exp: expires_at.timestamp(),
            nbf: match kind {
                TokenKind::Access => Some(issued_at),
                TokenKind::Refresh => None,
            },
            jti: generate_token_id(),
            iss: self.config.issuer().to_string(),
            aud: self.config.audience().to_string(),
        };

        let token = self.codec.sign(&claims, key).inspect_err(|e| {
            log::error!("{} 토큰 서명 실패 - 사용자: {}, 에러: {}", kind, payload.id, e);
        })?;

        Ok((token, expires_at))
    }

    fn key_for(&self, kind: TokenKind) -> &TokenKey {
        match kind {
            TokenKind::Access => &self.access_key,
            TokenKind::Refresh => &self.refresh_key,
        }
    }

    fn verify_kind(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, TokenError> {
        let now = self.clock.now().timestamp();

        // 다른 종류의 토큰은 기대 키로는 서명 단계에서 실패하므로,
        // 선언된 종류의 키로 서명이 맞을 때만 WrongKind로 분류
        if let Some(peeked) = self.codec.decode_unverified(token) {
            if peeked.token_type != expected {
                return match self.codec.verify(token, self.key_for(peeked.token_type), now) {
                    Err(e @ (TokenError::Malformed | TokenError::Invalid(_))) => Err(e),
                    _ => Err(TokenError::WrongKind {
                        expected,
                        found: peeked.token_type,
                    }),
                };
            }
        }

        let claims = self.codec.verify(token, self.key_for(expected), now)?;

        if claims.token_type != expected {
            return Err(TokenError::WrongKind {
                expected,
                found: claims.token_type,
            });
        }

        if claims.id.trim().is_empty() || claims.email.trim().is_empty() {
            return Err(TokenError::Invalid("missing identity claims".to_string()));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::Role;
    use crate::services::auth::clock::test_support::FixedClock;
    use crate::services::auth::jwt_codec::CLOCK_SKEW_LEEWAY_SECS;

    const NOW: i64 = 1_700_000_000;
    const ACCESS_SECRET: &str = "access-secret-0123456789abcdefghijklmnop";
    const REFRESH_SECRET: &str = "refresh-secret-0123456789abcdefghijklmnop";

    fn config() -> Arc<TokenConfig> {
        Arc::new(
            TokenConfig::new(
                ACCESS_SECRET,
                REFRESH_SECRET,
                "1h".parse().unwrap(),
                "7d".parse().unwrap(),
                "notes-app",
                "notes-app-users",
            )
            .unwrap(),
        )
    }

    fn service() -> (TokenService, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at(NOW));
        (TokenService::with_clock(config(), clock.clone()), clock)
    }

    fn payload() -> SignPayload {
        SignPayload {
            id: "65f0c0ffee0000000000beef".to_string(),
            email: "ada@x.com".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let (service, _) = service();
        let token = service.create_access_token(&payload(), None, None).unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.id, payload().id);
        assert_eq!(claims.email, payload().email);
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.token_type, TokenKind::Access);
        assert_eq!(claims.iss, "notes-app");
        assert_eq!(claims.aud, "notes-app-users");
        assert_eq!(claims.iat, NOW);
        assert_eq!(claims.exp, NOW + 3600);
        assert_eq!(claims.nbf, Some(NOW));
    }

    #[test]
    fn test_refresh_token_uses_its_own_expiry() {
        let (service, _) = service();
        let token = service.create_refresh_token(&payload(), None, None).unwrap();

        let claims = service.verify_refresh_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
        assert_eq!(claims.nbf, None);
    }

    #[test]
    fn test_wrong_kind_is_rejected_both_ways() {
        let (service, _) = service();
        let access = service.create_access_token(&payload(), None, None).unwrap();
        let refresh = service.create_refresh_token(&payload(), None, None).unwrap();

        assert_eq!(
            service.verify_access_token(&refresh),
            Err(TokenError::WrongKind {
                expected: TokenKind::Access,
                found: TokenKind::Refresh,
            })
        );
        assert_eq!(
            service.verify_refresh_token(&access),
            Err(TokenError::WrongKind {
                expected: TokenKind::Refresh,
                found: TokenKind::Access,
            })
        );
    }

    #[test]
    fn test_foreign_signature_is_invalid_not_wrong_kind() {
        let (service, _) = service();
        let refresh = service.create_refresh_token(&payload(), None, None).unwrap();
        let claims = service.codec.decode_unverified(&refresh).unwrap();

        let foreign_key = TokenKey::from_secret("someone-else-0123456789abcdefghijklmnop");
        let forged = service.codec.sign(&claims, &foreign_key).unwrap();

        assert_eq!(
            service.verify_access_token(&forged),
            Err(TokenError::Invalid("signature mismatch".to_string()))
        );
        assert_eq!(
            service.verify_refresh_token(&forged),
            Err(TokenError::Invalid("signature mismatch".to_string()))
        );
    }

    #[test]
    fn test_one_second_expiry_with_clock_tolerance() {
        let (service, clock) = service();
        let one_second: ExpiryDuration = "1s".parse().unwrap();
        let token = service
            .create_access_token(&payload(), None, Some(&one_second))
            .unwrap();

        clock.advance(1 + CLOCK_SKEW_LEEWAY_SECS);
        assert!(service.verify_access_token(&token).is_ok());

        clock.advance(1);
        assert_eq!(service.verify_access_token(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_pairs_have_distinct_identifiers() {
        let (service, _) = service();
        let first = service.create_token_pair(&payload(), None).unwrap();
        let second = service.create_token_pair(&payload(), None).unwrap();

        let decode = |token: &str| service.decode_token(token).unwrap().payload;
        let claims = [
            decode(&first.access_token),
            decode(&first.refresh_token),
            decode(&second.access_token),
            decode(&second.refresh_token),
        ];

        let jtis: HashSet<&str> = claims.iter().map(|c| c.jti.as_str()).collect();
        assert_eq!(jtis.len(), 4);

        assert_eq!(claims[0].session_id, claims[1].session_id);
        assert_eq!(claims[2].session_id, claims[3].session_id);
        assert_ne!(claims[0].session_id, claims[2].session_id);
        assert!(claims[0].session_id.is_some());
    }

    #[test]
    fn test_token_pair_reuses_supplied_session() {
        let (service, _) = service();
        let pair = service.create_token_pair(&payload(), Some("session-42")).unwrap();

        let access = service.verify_access_token(&pair.access_token).unwrap();
        let refresh = service.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(access.session_id.as_deref(), Some("session-42"));
        assert_eq!(refresh.session_id.as_deref(), Some("session-42"));
        assert_eq!(pair.access_token_expiry.timestamp(), NOW + 3600);
        assert_eq!(pair.refresh_token_expiry.timestamp(), NOW + 7 * 24 * 3600);
    }

    #[test]
    fn test_refresh_access_token_keeps_identity_and_session() {
        let (service, clock) = service();
        let pair = service.create_token_pair(&payload(), Some("session-7")).unwrap();

        clock.advance(2 * 3600);
        assert_eq!(
            service.verify_access_token(&pair.access_token),
            Err(TokenError::Expired)
        );

        let refreshed = service.refresh_access_token(&pair.refresh_token).unwrap();
        let claims = service.verify_access_token(&refreshed.access_token).unwrap();
        assert_eq!(claims.id, payload().id);
        assert_eq!(claims.session_id.as_deref(), Some("session-7"));
        assert_eq!(refreshed.access_token_expiry.timestamp(), NOW + 2 * 3600 + 3600);
    }

    #[test]
    fn test_refresh_with_expired_refresh_token_fails() {
        let (service, clock) = service();
        let refresh = service.create_refresh_token(&payload(), None, None).unwrap();

        clock.advance(7 * 24 * 3600 + CLOCK_SKEW_LEEWAY_SECS + 1);

        let result = service.refresh_access_token(&refresh);
        assert_eq!(result.as_ref().unwrap_err(), &TokenError::Expired);
        assert!(matches!(
            AppError::from(result.unwrap_err()),
            AppError::TokenExpired(_)
        ));
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let (service, _) = service();
        let access = service.create_access_token(&payload(), None, None).unwrap();

        assert!(matches!(
            service.refresh_access_token(&access),
            Err(TokenError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_missing_identity_claims_are_rejected() {
        let (service, _) = service();
        let blank = SignPayload {
            id: String::new(),
            email: "ada@x.com".to_string(),
            role: Role::User,
        };
        let token = service.create_access_token(&blank, None, None).unwrap();

        assert_eq!(
            service.verify_access_token(&token),
            Err(TokenError::Invalid("missing identity claims".to_string()))
        );
    }

    #[test]
    fn test_decode_token_reports_expiry() {
        let (service, clock) = service();
        let token = service.create_access_token(&payload(), None, None).unwrap();

        let decoded = service.decode_token(&token).unwrap();
        assert!(!decoded.is_expired);
        assert_eq!(decoded.expires_in, 3600);

        clock.advance(3601);
        let decoded = service.decode_token(&token).unwrap();
        assert!(decoded.is_expired);
        assert_eq!(decoded.expires_in, -1);

        assert!(service.decode_token("garbage").is_none());
    }

    #[test]
    fn test_get_token_info() {
        let (service, _) = service();
        let token = service.create_access_token(&payload(), None, None).unwrap();

        let info = service.get_token_info(&token);
        assert!(info.is_valid);
        assert_eq!(info.expires_in, 3600);
        assert!(info.payload.is_some());

        let info = service.get_token_info("garbage");
        assert!(!info.is_valid);
        assert!(info.is_expired);
        assert_eq!(info.expires_in, 0);
        assert!(info.payload.is_none());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));

        let missing = TokenService::extract_bearer_token(None).unwrap_err();
        assert_eq!(missing.message(), "Authorization header missing");

        let empty = TokenService::extract_bearer_token(Some("Bearer ")).unwrap_err();
        assert_eq!(empty.message(), "Token missing from authorization header");

        for header in ["Basic abc", "bearer abc", "Bearer", "Bearer a b", "Bearer  abc", ""] {
            let err = TokenService::extract_bearer_token(Some(header)).unwrap_err();
            assert_eq!(
                err,
                AppError::AuthenticationError("Invalid authorization header format".to_string()),
                "{:?}",
                header
            );
        }
    }
}
