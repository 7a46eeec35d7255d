//! JWT 인코딩/디코딩
//!
//! 클레임을 HS256으로 서명된 세 부분짜리 토큰 문자열로 변환하고, 그 역을 수행합니다.
//! 알고리즘은 고정되어 있으며 토큰 헤더가 다른 알고리즘을 지정하면 거부합니다.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::core::AppError;
use crate::domain::token::token::{TokenClaims, TokenKind};

/// 서명 알고리즘 (고정)
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// `exp` / `nbf` 비교 시 허용하는 시계 오차 (초)
pub const CLOCK_SKEW_LEEWAY_SECS: i64 = 30;

/// 토큰 처리 실패 분류
///
/// 검증 실패는 일반 예외가 아닌 이 열거형으로 분류되어 전파됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 세 부분 구조가 아니거나 base64url 디코딩 실패
    #[error("malformed token")]
    Malformed,

    #[error("token has expired")]
    Expired,

    #[error("token is not yet valid")]
    NotYetValid,

    /// 서명, 발급자, 대상, 알고리즘 또는 클레임 검증 실패
    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("invalid token type: expected {expected}, found {found}")]
    WrongKind { expected: TokenKind, found: TokenKind },

    /// 서명 실패 (키 설정 오류 등)
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl TokenError {
    /// 인증 미들웨어가 클라이언트에 돌려줄 에러
    ///
    /// 어떤 검증 단계에서 실패했는지 노출하지 않고, 만료만 별도 코드로 구분합니다.
    pub fn client_facing(&self) -> AppError {
        match self {
            TokenError::Expired => AppError::TokenExpired("Access token has expired".to_string()),
            TokenError::Signing(_) => AppError::from(self.clone()),
            _ => AppError::AuthenticationError("Authentication failed".to_string()),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed => AppError::BadRequest("Malformed token".to_string()),
            TokenError::Expired => AppError::TokenExpired("Token has expired".to_string()),
            TokenError::NotYetValid => {
                AppError::AuthenticationError("Token not yet valid".to_string())
            }
            TokenError::Invalid(_) => AppError::AuthenticationError("Invalid token".to_string()),
            TokenError::WrongKind { .. } => {
                AppError::AuthenticationError("Invalid token type".to_string())
            }
            TokenError::Signing(detail) => {
                AppError::InternalError(format!("failed to sign token: {}", detail))
            }
        }
    }
}

/// 하나의 시크릿으로부터 만든 서명/검증 키 쌍
#[derive(Clone)]
pub struct TokenKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKey {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT 코덱
///
/// 발급자와 대상은 생성 시점에 고정됩니다. 만료와 유효 시작 시각은
/// 호출자가 넘긴 현재 시각 기준으로 직접 검사합니다.
#[derive(Clone)]
pub struct JwtCodec {
    header: Header,
    validation: Validation,
    inspection: Validation,
}

impl JwtCodec {
    pub fn new(issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = CLOCK_SKEW_LEEWAY_SECS as u64;
        // 시간 검사는 주입된 Clock 기준으로 verify()에서 수행
        validation.validate_exp = false;
        validation.validate_nbf = false;

        let mut inspection = Validation::new(TOKEN_ALGORITHM);
        inspection.insecure_disable_signature_validation();
        inspection.required_spec_claims.clear();
        inspection.validate_exp = false;
        inspection.validate_nbf = false;
        inspection.validate_aud = false;

        Self {
            header: Header::new(TOKEN_ALGORITHM),
            validation,
            inspection,
        }
    }

    /// 클레임에 서명하여 토큰 문자열을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Signing` - 인코딩/서명 실패
    pub fn sign(&self, claims: &TokenClaims, key: &TokenKey) -> Result<String, TokenError> {
        encode(&self.header, claims, &key.encoding).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// 서명을 검증하지 않고 클레임을 읽습니다.
    ///
    /// 진단 용도로만 사용해야 하며 인가 판단에 쓰면 안 됩니다.
    pub fn decode_unverified(&self, token: &str) -> Option<TokenClaims> {
        if !validate_token_format(token) {
            return None;
        }

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &self.inspection)
            .ok()
            .map(|data| data.claims)
    }

    /// 서명, 발급자, 대상, 알고리즘, 만료, 유효 시작 시각을 검증합니다.
    ///
    /// `now`는 Unix timestamp(초)이며 `exp`/`nbf` 양쪽에 30초 오차를 허용합니다.
    pub fn verify(&self, token: &str, key: &TokenKey, now: i64) -> Result<TokenClaims, TokenError> {
        if !validate_token_format(token) {
            return Err(TokenError::Malformed);
        }

        let claims = decode::<TokenClaims>(token, &key.decoding, &self.validation)
            .map_err(classify)?
            .claims;

        if now > claims.exp.saturating_add(CLOCK_SKEW_LEEWAY_SECS) {
            return Err(TokenError::Expired);
        }

        if let Some(nbf) = claims.nbf {
            if nbf > now.saturating_add(CLOCK_SKEW_LEEWAY_SECS) {
                return Err(TokenError::NotYetValid);
            }
        }

        Ok(claims)
    }
}

/// 토큰이 비어 있지 않은 base64url 세그먼트 세 개로 이루어졌는지 확인합니다.
///
/// 서명 유효성은 확인하지 않습니다.
pub fn validate_token_format(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();

    segments.len() == 3
        && segments
            .iter()
            .all(|segment| !segment.is_empty() && URL_SAFE_NO_PAD.decode(segment).is_ok())
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => TokenError::Malformed,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::ImmatureSignature => TokenError::NotYetValid,
        ErrorKind::InvalidSignature => TokenError::Invalid("signature mismatch".to_string()),
        ErrorKind::InvalidIssuer => TokenError::Invalid("issuer mismatch".to_string()),
        ErrorKind::InvalidAudience => TokenError::Invalid("audience mismatch".to_string()),
        ErrorKind::InvalidAlgorithm => TokenError::Invalid("algorithm mismatch".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => {
            TokenError::Invalid(format!("missing claim '{}'", claim))
        }
        ErrorKind::Json(_) => TokenError::Invalid("unreadable claims".to_string()),
        _ => TokenError::Invalid(err.to_string()),
    }
}
