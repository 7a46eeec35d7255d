//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use validator::ValidateEmail;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Serde용 선택적 문자열 역직렬화 함수
///
/// 빈 문자열과 공백 문자열을 `None`으로 취급합니다.
/// 누락된 필드까지 처리하려면 `#[serde(default)]`와 함께 사용하세요.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct NoteListQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     title: Option<String>,
/// }
///
/// // ?title=  → None
/// // ?title=%20groc%20 → Some("groc")
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 로그인 식별자가 이메일 형태인지 판별
///
/// 회원가입 시 이메일 검증과 같은 `validator` 규칙을 사용합니다.
pub fn looks_like_email(identifier: &str) -> bool {
    identifier.validate_email()
}
