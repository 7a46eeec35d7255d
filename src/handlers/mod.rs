//! # HTTP Handlers
//!
//! 요청을 받아 DTO 검증 후 서비스에 위임하고, 결과를 공통 응답 포맷으로 감쌉니다.
//! 서비스 인스턴스는 `web::Data`로 주입받습니다.
//!
//! ```rust,ignore
//! #[post("/add")]
//! pub async fn add_note(
//!     identity: AuthenticatedIdentity,
//!     note_service: web::Data<NoteService>,
//!     payload: web::Json<CreateNoteRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let note = note_service.add_note(&identity.user_id, payload.into_inner()).await?;
//!     Ok(ApiResponse::created("Note Added Successfully", note))
//! }
//! ```
//!
//! 에러는 모두 [`AppError`](crate::core::AppError)로 반환되어
//! `ResponseError` 구현이 상태 코드와 응답 본문을 만듭니다.

pub mod auth;
pub mod notes;
pub mod users;
