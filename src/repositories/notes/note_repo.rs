//! # 노트 리포지토리 구현
//!
//! 모든 쿼리는 작성자(`user_id`) 조건을 포함하므로 다른 사용자의 노트에는 접근할 수 없습니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::notes::note::Note;
use crate::repositories::is_duplicate_key;
use crate::utils::time_utils::to_bson;

pub const NOTE_COLLECTION: &str = "notes";

pub const DUPLICATE_TITLE_MESSAGE: &str = "A note exists with this title";

/// 노트 목록 조회 조건
#[derive(Debug, Clone)]
pub struct NoteFilter {
    pub user_id: ObjectId,
    /// 제목 부분 일치 검색어 (이스케이프 전 원문)
    pub title: Option<String>,
    /// 생성 시각 범위 `[start, end)`
    pub created_between: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl NoteFilter {
    pub fn for_owner(user_id: ObjectId) -> Self {
        Self {
            user_id,
            title: None,
            created_between: None,
        }
    }

    /// MongoDB 쿼리 문서로 변환
    pub fn to_document(&self) -> Document {
        let mut filter = doc! { "user_id": self.user_id };

        if let Some(title) = &self.title {
            filter.insert(
                "title",
                doc! { "$regex": regex::escape(title), "$options": "i" },
            );
        }

        if let Some((start, end)) = self.created_between {
            filter.insert(
                "created_at",
                doc! { "$gte": to_bson(start), "$lt": to_bson(end) },
            );
        }

        filter
    }
}

/// 노트 부분 수정 내용
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    fn to_set_document(&self) -> Document {
        let mut set = doc! { "updated_at": mongodb::bson::DateTime::now() };
        if let Some(title) = &self.title {
            set.insert("title", title);
        }
        if let Some(content) = &self.content {
            set.insert("content", content);
        }
        set
    }
}

/// 노트 데이터 액세스 트레이트
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, note: Note) -> Result<Note, AppError>;

    /// 같은 작성자의 동일 제목 노트 조회
    async fn find_by_title(&self, owner: &ObjectId, title: &str) -> Result<Option<Note>, AppError>;

    async fn find_owned(&self, owner: &ObjectId, id: &ObjectId) -> Result<Option<Note>, AppError>;

    /// `created_at` 내림차순 페이지 조회
    async fn find_page(&self, filter: &NoteFilter, skip: u64, limit: u64) -> Result<Vec<Note>, AppError>;

    async fn count(&self, filter: &NoteFilter) -> Result<u64, AppError>;

    /// 수정 후 최신 노트 반환. 없으면 `None`
    async fn update_owned(
        &self,
        owner: &ObjectId,
        id: &ObjectId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, AppError>;

    async fn delete_owned(&self, owner: &ObjectId, id: &ObjectId) -> Result<bool, AppError>;
}

/// MongoDB 기반 노트 리포지토리
///
/// - **컬렉션명**: `notes`
/// - **인덱스**: (user_id, created_at desc), (user_id, title) unique
pub struct MongoNoteRepository {
    db: Arc<Database>,
}

impl MongoNoteRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Note> {
        self.db.get_database().collection::<Note>(NOTE_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_created_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("user_created_at_desc".to_string())
                .build())
            .build();

        let owner_title_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "title": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_title_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([owner_created_index, owner_title_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

fn map_write_error(e: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&e) {
        AppError::ConflictError(DUPLICATE_TITLE_MESSAGE.to_string())
    } else {
        AppError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl NoteRepository for MongoNoteRepository {
    async fn create(&self, mut note: Note) -> Result<Note, AppError> {
        let result = self.collection()
            .insert_one(&note)
            .await
            .map_err(map_write_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted note id is not an ObjectId".to_string())
        })?;
        note.id = Some(id);

        Ok(note)
    }

    async fn find_by_title(&self, owner: &ObjectId, title: &str) -> Result<Option<Note>, AppError> {
        self.collection()
            .find_one(doc! { "user_id": owner, "title": title })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_owned(&self, owner: &ObjectId, id: &ObjectId) -> Result<Option<Note>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id, "user_id": owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_page(&self, filter: &NoteFilter, skip: u64, limit: u64) -> Result<Vec<Note>, AppError> {
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::BadRequest("limit is out of range".to_string()))?;

        let cursor = self.collection()
            .find(filter.to_document())
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self, filter: &NoteFilter) -> Result<u64, AppError> {
        self.collection()
            .count_documents(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_owned(
        &self,
        owner: &ObjectId,
        id: &ObjectId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id, "user_id": owner },
                doc! { "$set": changes.to_set_document() },
            )
            .with_options(options)
            .await
            .map_err(map_write_error)
    }

    async fn delete_owned(&self, owner: &ObjectId, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "_id": id, "user_id": owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filter_always_scopes_to_owner() {
        let owner = ObjectId::new();
        let filter = NoteFilter::for_owner(owner).to_document();

        assert_eq!(filter.get_object_id("user_id").unwrap(), owner);
        assert!(filter.get("title").is_none());
        assert!(filter.get("created_at").is_none());
    }

    #[test]
    fn test_filter_escapes_title_and_bounds_day() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let filter = NoteFilter {
            user_id: ObjectId::new(),
            title: Some("c++".to_string()),
            created_between: Some((start, end)),
        }
        .to_document();

        let title = filter.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"c\+\+");
        assert_eq!(title.get_str("$options").unwrap(), "i");

        let created = filter.get_document("created_at").unwrap();
        assert_eq!(created.get_datetime("$gte").unwrap().timestamp_millis(), start.timestamp_millis());
        assert_eq!(created.get_datetime("$lt").unwrap().timestamp_millis(), end.timestamp_millis());
    }

    #[test]
    fn test_title_search_is_literal() {
        let pattern = |title: &str| {
            let filter = NoteFilter {
                title: Some(title.to_string()),
                ..NoteFilter::for_owner(ObjectId::new())
            }
            .to_document();
            filter.get_document("title").unwrap().get_str("$regex").unwrap().to_string()
        };

        assert_eq!(pattern("groceries"), "groceries");
        assert_eq!(pattern("c++ (notes)"), r"c\+\+ \(notes\)");
        assert_eq!(pattern("a.b*c"), r"a\.b\*c");
        assert_eq!(pattern(r"^$\"), r"\^\$\\");
        assert_eq!(pattern("메모"), "메모");
    }

    #[test]
    fn test_changes_only_set_provided_fields() {
        let set = NoteChanges {
            title: None,
            content: Some("updated".to_string()),
        }
        .to_set_document();

        assert_eq!(set.get_str("content").unwrap(), "updated");
        assert!(set.get("title").is_none());
        assert!(set.get("updated_at").is_some());
    }
}
