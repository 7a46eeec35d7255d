//! 노트 서비스 모듈

pub mod note_service;

pub use note_service::NoteService;
