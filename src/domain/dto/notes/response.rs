use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::notes::note::Note;
use crate::utils::time_utils::to_chrono;

/// 노트 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id_string().unwrap_or_default(),
            title: note.title,
            content: note.content,
            user_id: note.user_id.to_hex(),
            created_at: to_chrono(note.created_at),
            updated_at: to_chrono(note.updated_at),
        }
    }
}

/// 페이지네이션 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(current_page: u64, limit: u64, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(limit.max(1));

        Self {
            current_page,
            total_pages,
            total_count,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

/// 노트 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteResponse>,
    pub pagination: Pagination,
}
