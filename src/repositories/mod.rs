//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 트레이트와 MongoDB 구현체로 나뉩니다.
//! 서비스는 `Arc<dyn Trait>`으로 리포지토리를 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::notes::{MongoNoteRepository, NoteRepository};
//!
//! let note_repo: Arc<dyn NoteRepository> = Arc::new(MongoNoteRepository::new(db.clone()));
//! ```

use mongodb::error::{ErrorKind, WriteFailure};

pub mod notes;
pub mod users;

#[cfg(test)]
pub(crate) mod memory;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반 여부
///
/// `insert_one`은 쓰기 에러로, `find_one_and_update`는 명령 에러로 보고됩니다.
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
