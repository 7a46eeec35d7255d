//! 테스트용 인메모리 리포지토리

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::entities::notes::note::Note;
use crate::domain::entities::users::user::User;
use crate::repositories::notes::note_repo::{
    NoteChanges, NoteFilter, NoteRepository, DUPLICATE_TITLE_MESSAGE,
};
use crate::repositories::users::user_repo::{
    UserRepository, DUPLICATE_EMAIL_MESSAGE, DUPLICATE_USERNAME_MESSAGE,
};
use crate::utils::time_utils::to_chrono;

#[derive(Default)]
pub(crate) struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub(crate) fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError(DUPLICATE_USERNAME_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
}

impl InMemoryNoteRepository {
    /// 시각을 직접 지정해 저장
    pub(crate) fn insert_raw(&self, mut note: Note) -> Note {
        note.id = Some(ObjectId::new());
        self.notes.lock().unwrap().push(note.clone());
        note
    }

    fn matches(filter: &NoteFilter, note: &Note) -> bool {
        if note.user_id != filter.user_id {
            return false;
        }
        if let Some(title) = &filter.title {
            if !note.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }
        if let Some((start, end)) = filter.created_between {
            let created = to_chrono(note.created_at);
            if created < start || created >= end {
                return false;
            }
        }
        true
    }

    fn is_owned(note: &Note, owner: &ObjectId, id: &ObjectId) -> bool {
        note.user_id == *owner && note.id.as_ref() == Some(id)
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, mut note: Note) -> Result<Note, AppError> {
        let mut notes = self.notes.lock().unwrap();
        if notes.iter().any(|n| n.user_id == note.user_id && n.title == note.title) {
            return Err(AppError::ConflictError(DUPLICATE_TITLE_MESSAGE.to_string()));
        }

        note.id = Some(ObjectId::new());
        notes.push(note.clone());
        Ok(note)
    }

    async fn find_by_title(&self, owner: &ObjectId, title: &str) -> Result<Option<Note>, AppError> {
        let notes = self.notes.lock().unwrap();
        Ok(notes
            .iter()
            .find(|n| n.user_id == *owner && n.title == title)
            .cloned())
    }

    async fn find_owned(&self, owner: &ObjectId, id: &ObjectId) -> Result<Option<Note>, AppError> {
        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().find(|n| Self::is_owned(n, owner, id)).cloned())
    }

    async fn find_page(&self, filter: &NoteFilter, skip: u64, limit: u64) -> Result<Vec<Note>, AppError> {
        let notes = self.notes.lock().unwrap();
        let mut matched: Vec<Note> = notes
            .iter()
            .filter(|n| Self::matches(filter, n))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &NoteFilter) -> Result<u64, AppError> {
        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().filter(|n| Self::matches(filter, n)).count() as u64)
    }

    async fn update_owned(
        &self,
        owner: &ObjectId,
        id: &ObjectId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, AppError> {
        let mut notes = self.notes.lock().unwrap();
        let Some(note) = notes.iter_mut().find(|n| Self::is_owned(n, owner, id)) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            note.title = title;
        }
        if let Some(content) = changes.content {
            note.content = content;
        }
        note.updated_at = mongodb::bson::DateTime::now();

        Ok(Some(note.clone()))
    }

    async fn delete_owned(&self, owner: &ObjectId, id: &ObjectId) -> Result<bool, AppError> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| !Self::is_owned(n, owner, id));
        Ok(notes.len() < before)
    }
}
