use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;
use chrono::Utc;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: String,
    pub status_code: u16,
    pub timestamp: String,
    pub message: Option<String>,
}

fn meta(status: StatusCode, message: Option<String>) -> ResponseMeta {
    ResponseMeta {
        status: if status.is_success() { "success" } else { "error" }.to_string(),
        status_code: status.as_u16(),
        timestamp: Utc::now().to_rfc3339(),
        message,
    }
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: Some(data),
            meta: meta(StatusCode::OK, None),
        }),
    )
}

pub fn error<T: Serialize>(status: StatusCode, message: String) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            data: None,
            meta: meta(status, Some(message)),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_has_no_data() {
        let (status, Json(body)) = error::<()>(StatusCode::BAD_GATEWAY, "HTTP error! status: 500".into());
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.data.is_none());
        assert_eq!(body.meta.status, "error");
        assert_eq!(body.meta.status_code, 502);
        assert_eq!(body.meta.message.as_deref(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn success_envelope_wraps_data() {
        let (status, Json(body)) = success("ok");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data, Some("ok"));
        assert_eq!(body.meta.status, "success");
        assert!(body.meta.message.is_none());
    }
}
