//! # Note HTTP Handlers
//!
//! 인증된 사용자의 노트 CRUD 엔드포인트입니다.
//! 모든 핸들러는 [`AuthenticatedIdentity`]의 사용자 ID 범위 안에서만 동작합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/notes/all-notes` | 목록 (검색, 날짜, 페이지) | 200 OK |
//! | `GET` | `/notes/single-note/{id}` | 단건 조회 | 200 OK |
//! | `POST` | `/notes/add` | 생성 | 201 Created |
//! | `PATCH` | `/notes/edit-note/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/notes/delete-note/{id}` | 삭제 | 200 OK |

use actix_web::{delete, get, http::StatusCode, patch, post, web, HttpResponse};
use validator::Validate;

use crate::core::AppError;
use crate::domain::auth::AuthenticatedIdentity;
use crate::domain::dto::notes::request::{CreateNoteRequest, NoteListQuery, UpdateNoteRequest};
use crate::domain::dto::ApiResponse;
use crate::services::notes::NoteService;

#[get("/all-notes")]
pub async fn get_all_notes(
    identity: AuthenticatedIdentity,
    note_service: web::Data<NoteService>,
    query: web::Query<NoteListQuery>,
) -> Result<HttpResponse, AppError> {
    let response = note_service
        .get_all_notes(&identity.user_id, query.into_inner())
        .await?;

    Ok(ApiResponse::ok("All Notes Retrieved Successfully", response))
}

#[get("/single-note/{note_id}")]
pub async fn view_note(
    identity: AuthenticatedIdentity,
    note_service: web::Data<NoteService>,
    note_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let note = note_service.view_note(&identity.user_id, &note_id).await?;

    Ok(ApiResponse::ok("Note Retrieved Successfully", note))
}

#[post("/add")]
pub async fn add_note(
    identity: AuthenticatedIdentity,
    note_service: web::Data<NoteService>,
    payload: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let note = note_service
        .add_note(&identity.user_id, payload.into_inner())
        .await?;

    Ok(ApiResponse::created("Note Added Successfully", note))
}

#[patch("/edit-note/{note_id}")]
pub async fn edit_note(
    identity: AuthenticatedIdentity,
    note_service: web::Data<NoteService>,
    note_id: web::Path<String>,
    payload: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let note = note_service
        .edit_note(&identity.user_id, &note_id, payload.into_inner())
        .await?;

    Ok(ApiResponse::ok("Note edited Successfully", note))
}

#[delete("/delete-note/{note_id}")]
pub async fn delete_note(
    identity: AuthenticatedIdentity,
    note_service: web::Data<NoteService>,
    note_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    note_service.delete_note(&identity.user_id, &note_id).await?;

    Ok(ApiResponse::<()>::message_only(StatusCode::OK, "Note deleted Successfully"))
}
