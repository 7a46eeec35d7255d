pub mod request;
pub mod response;

pub use request::{CreateNoteRequest, NoteListQuery, UpdateNoteRequest};
pub use response::{NoteListResponse, NoteResponse, Pagination};
