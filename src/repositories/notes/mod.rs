//! 노트 데이터 액세스 계층

pub mod note_repo;

pub use note_repo::{MongoNoteRepository, NoteChanges, NoteFilter, NoteRepository};
