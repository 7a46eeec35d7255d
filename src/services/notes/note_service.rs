//! # 노트 서비스 구현
//!
//! 인증된 사용자의 노트를 생성, 조회, 수정, 삭제합니다.
//! 모든 연산은 호출자의 사용자 ID 범위 안에서만 동작하며, 다른 사용자의 노트는
//! 존재하지 않는 것과 동일하게 404로 응답합니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::dto::notes::request::{CreateNoteRequest, NoteListQuery, UpdateNoteRequest};
use crate::domain::dto::notes::response::{NoteListResponse, NoteResponse, Pagination};
use crate::domain::entities::notes::note::Note;
use crate::repositories::notes::note_repo::{
    NoteChanges, NoteFilter, NoteRepository, DUPLICATE_TITLE_MESSAGE,
};
use crate::utils::time_utils::parse_day_range;

pub const NOTE_NOT_FOUND_MESSAGE: &str = "Sorry, this note does not exist";
pub const EMPTY_RESULT_MESSAGE: &str = "Result Not Found!!!";

pub struct NoteService {
    note_repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(note_repo: Arc<dyn NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// 노트 추가
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 제목의 노트가 이미 있음
    pub async fn add_note(&self, owner_id: &str, request: CreateNoteRequest) -> Result<NoteResponse, AppError> {
        let owner = parse_owner(owner_id)?;
        let note = Note::new(owner, &request.title, request.content);

        if self.note_repo.find_by_title(&owner, &note.title).await?.is_some() {
            return Err(AppError::ConflictError(DUPLICATE_TITLE_MESSAGE.to_string()));
        }

        let created = self.note_repo.create(note).await?;
        log::debug!("노트 생성: {} (사용자 {})", created.id_string().unwrap_or_default(), owner_id);

        Ok(NoteResponse::from(created))
    }

    /// 노트 목록 조회
    ///
    /// 제목 검색과 날짜 필터를 적용하고 최신순으로 페이지를 나눕니다.
    /// 해석할 수 없는 날짜는 무시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound("Result Not Found!!!")` - 결과 없음
    pub async fn get_all_notes(&self, owner_id: &str, query: NoteListQuery) -> Result<NoteListResponse, AppError> {
        let owner = parse_owner(owner_id)?;
        let page = query.page();
        let limit = query.limit();

        let created_between = match query.date.as_deref() {
            Some(raw) => {
                let range = parse_day_range(raw);
                if range.is_none() {
                    log::debug!("잘못된 날짜 필터 무시: {}", raw);
                }
                range
            }
            None => None,
        };

        let filter = NoteFilter {
            user_id: owner,
            title: query.title,
            created_between,
        };

        let total_count = self.note_repo.count(&filter).await?;
        let skip = (page - 1).saturating_mul(limit);
        let notes = if total_count > skip {
            self.note_repo.find_page(&filter, skip, limit).await?
        } else {
            Vec::new()
        };

        if notes.is_empty() {
            return Err(AppError::NotFound(EMPTY_RESULT_MESSAGE.to_string()));
        }

        Ok(NoteListResponse {
            notes: notes.into_iter().map(NoteResponse::from).collect(),
            pagination: Pagination::new(page, limit, total_count),
        })
    }

    pub async fn view_note(&self, owner_id: &str, note_id: &str) -> Result<NoteResponse, AppError> {
        let owner = parse_owner(owner_id)?;
        let id = parse_note_id(note_id)?;

        self.note_repo
            .find_owned(&owner, &id)
            .await?
            .map(NoteResponse::from)
            .ok_or_else(note_not_found)
    }

    /// 노트 부분 수정
    ///
    /// 제목을 바꾸는 경우 같은 사용자의 다른 노트와 제목이 겹치면 409를 반환합니다.
    pub async fn edit_note(
        &self,
        owner_id: &str,
        note_id: &str,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, AppError> {
        let owner = parse_owner(owner_id)?;
        let id = parse_note_id(note_id)?;

        let title = request.title.map(|t| t.trim().to_string());
        if let Some(title) = &title {
            if let Some(existing) = self.note_repo.find_by_title(&owner, title).await? {
                if existing.id != Some(id) {
                    return Err(AppError::ConflictError(DUPLICATE_TITLE_MESSAGE.to_string()));
                }
            }
        }

        let changes = NoteChanges {
            title,
            content: request.content,
        };

        self.note_repo
            .update_owned(&owner, &id, changes)
            .await?
            .map(NoteResponse::from)
            .ok_or_else(note_not_found)
    }

    pub async fn delete_note(&self, owner_id: &str, note_id: &str) -> Result<(), AppError> {
        let owner = parse_owner(owner_id)?;
        let id = parse_note_id(note_id)?;

        if !self.note_repo.delete_owned(&owner, &id).await? {
            return Err(note_not_found());
        }

        log::debug!("노트 삭제: {} (사용자 {})", note_id, owner_id);
        Ok(())
    }
}

fn note_not_found() -> AppError {
    AppError::NotFound(NOTE_NOT_FOUND_MESSAGE.to_string())
}

/// 토큰의 사용자 ID는 발급 시 ObjectId 16진수 문자열입니다.
fn parse_owner(owner_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(owner_id)
        .map_err(|_| AppError::AuthenticationError("Invalid user identity".to_string()))
}

fn parse_note_id(note_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(note_id).map_err(|_| note_not_found())
}
