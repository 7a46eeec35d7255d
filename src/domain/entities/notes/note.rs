use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 노트 제목 최대 길이
pub const MAX_TITLE_LENGTH: u64 = 150;

/// 노트 엔티티
///
/// 모든 노트는 작성자(`user_id`)에 귀속되며, 조회/수정/삭제는 작성자 범위 안에서만 이루어집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    /// 작성자 ID
    pub user_id: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Note {
    /// 새 노트 생성. 제목은 앞뒤 공백을 제거합니다.
    pub fn new(user_id: ObjectId, title: &str, content: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title: title.trim().to_string(),
            content,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_trims_title() {
        let owner = ObjectId::new();
        let note = Note::new(owner, "  Groceries  ", "milk".to_string());

        assert_eq!(note.title, "Groceries");
        assert_eq!(note.user_id, owner);
        assert!(note.id_string().is_none());
    }
}
