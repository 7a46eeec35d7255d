//! 성공 응답 공통 포맷
//!
//! ```json
//! { "status": "SUCCESS", "code": 200, "message": "Login successful", "data": { ... } }
//! ```
//!
//! 실패 응답은 [`crate::core::AppError`]가 생성합니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: "SUCCESS",
            code: status_code.as_u16(),
            message: message.into(),
            data,
        }
    }

    /// 200 OK 응답
    pub fn ok(message: impl Into<String>, data: T) -> HttpResponse {
        Self::new(StatusCode::OK, message, Some(data)).into_response()
    }

    /// 201 Created 응답
    pub fn created(message: impl Into<String>, data: T) -> HttpResponse {
        Self::new(StatusCode::CREATED, message, Some(data)).into_response()
    }

    fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        HttpResponse::build(status).json(self)
    }
}

impl ApiResponse<()> {
    /// 데이터 없는 응답
    pub fn message_only(status_code: StatusCode, message: impl Into<String>) -> HttpResponse {
        ApiResponse::<()>::new(status_code, message, None).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::new(
            StatusCode::CREATED,
            "Note Added Successfully",
            Some(serde_json::json!({ "id": "1" })),
        ))
        .unwrap();

        assert_eq!(value["status"], "SUCCESS");
        assert_eq!(value["code"], 201);
        assert_eq!(value["message"], "Note Added Successfully");
        assert_eq!(value["data"]["id"], "1");
    }

    #[test]
    fn test_message_only_omits_data() {
        let value =
            serde_json::to_value(ApiResponse::<()>::new(StatusCode::OK, "Deleted", None)).unwrap();
        assert!(value.get("data").is_none());

        let response = ApiResponse::<()>::message_only(StatusCode::OK, "Deleted");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
