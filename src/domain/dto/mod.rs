//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 타입을 정의합니다.
//! 요청 DTO는 `validator` crate로 검증되고, 응답 DTO는 엔티티에서 `From`으로 변환됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── api_response.rs     # 성공 응답 공통 포맷
//! ├── users/
//! │   ├── request/        # 회원가입, 로그인, 토큰 갱신
//! │   └── response/       # UserResponse, AuthResponse
//! └── notes/
//!     ├── request.rs      # 노트 생성/수정, 목록 쿼리
//!     └── response.rs     # NoteResponse, Pagination
//! ```
//!
//! ## 검증 흐름
//!
//! ```rust,ignore
//! #[post("/add")]
//! async fn add_note(payload: web::Json<CreateNoteRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```
//!
//! 민감한 정보(비밀번호 해시 등)는 응답 DTO에 포함하지 않습니다.

pub mod api_response;
pub mod notes;
pub mod users;

pub use api_response::ApiResponse;
pub use notes::*;
pub use users::*;
