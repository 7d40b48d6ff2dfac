use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::{JsonPayloadError, QueryPayloadError},
};
use serde_json::json;

/// Turns body and query extraction failures into JSON 400 responses.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        let status = match err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        JsonError {
            message: format!("JSON payload error: {}", err),
            status,
        }
    }
}

impl From<QueryPayloadError> for JsonError {
    fn from(err: QueryPayloadError) -> Self {
        JsonError {
            message: format!("Query string error: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}
