use serde::Deserialize;
use validator::Validate;

/// 리프레시 토큰으로 액세스 토큰 재발급 요청
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// 로그인 요청
///
/// `identifier`는 이메일 또는 사용자명입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub identifier: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_field_name() {
        let req: RefreshTokenRequest =
            serde_json::from_str(r#"{"refreshToken":"a.b.c"}"#).unwrap();
        assert_eq!(req.refresh_token, "a.b.c");

        let empty: RefreshTokenRequest = serde_json::from_str(r#"{"refreshToken":""}"#).unwrap();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            identifier: "ada".to_string(),
            password: "secret1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = LoginRequest {
            identifier: "ada".to_string(),
            password: "123".to_string(),
        };
        assert!(short.validate().is_err());
    }
}
