//! 회원가입 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::Role;

/// 회원가입 요청
///
/// ```json
/// {
///   "username": "ada",
///   "email": "ada@x.com",
///   "password": "secret1",
///   "avatarUrl": "https://example.com/ada.png",
///   "role": "premium"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_requested_role"))]
pub struct CreateUserRequest {
    #[validate(length(
        min = 3,
        max = 30,
        message = "Username must be between 3 and 30 characters"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    #[validate(url(message = "Avatar URL must be a valid URL"))]
    pub avatar_url: Option<String>,

    /// 요청 역할. 생략하면 `user`
    pub role: Option<Role>,
}

/// 사용자명은 영문자, 숫자, `_`, `.`, `-`만 허용합니다.
///
/// `@`를 막아 로그인 식별자가 이메일인지 사용자명인지 항상 구분되도록 합니다.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-');

    if !username.chars().all(allowed) {
        return Err(ValidationError::new("invalid_username").with_message(
            "Username may only contain letters, digits, '_', '.' and '-'".into(),
        ));
    }
    Ok(())
}

fn validate_requested_role(req: &CreateUserRequest) -> Result<(), ValidationError> {
    match req.role {
        Some(role) if !role.is_self_assignable() => Err(ValidationError::new("invalid_role")
            .with_message(format!("Role '{}' cannot be requested at registration", role).into())),
        _ => Ok(()),
    }
}
