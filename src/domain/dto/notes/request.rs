use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::notes::note::MAX_TITLE_LENGTH;
use crate::utils::string_utils::deserialize_optional_string;

/// 기본 페이지 크기
pub const DEFAULT_PAGE_LIMIT: u64 = 20;
/// 최대 페이지 크기
pub const MAX_PAGE_LIMIT: u64 = 100;

/// 노트 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(
        min = 1,
        max = MAX_TITLE_LENGTH,
        message = "Title must be between 1 and 150 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// 노트 부분 수정 요청
///
/// `title`, `content` 중 최소 하나는 있어야 합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateNoteRequest {
    #[validate(length(
        min = 1,
        max = MAX_TITLE_LENGTH,
        message = "Title must be between 1 and 150 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
}

/// 노트 목록 조회 쿼리
///
/// `GET /all-notes?title=groc&date=2024-05-01&page=2&limit=10`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteListQuery {
    /// 제목 부분 일치 (대소문자 무시)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    /// 생성일 (`YYYY-MM-DD` 또는 RFC 3339)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl NoteListQuery {
    /// 1 이상의 페이지 번호
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// 1..=100 범위로 보정된 페이지 크기
    pub fn limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Value cannot be blank".into()));
    }
    Ok(())
}

fn validate_has_changes(req: &UpdateNoteRequest) -> Result<(), ValidationError> {
    if req.title.is_none() && req.content.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("At least one of title or content must be provided".into()));
    }
    Ok(())
}
