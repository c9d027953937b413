use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use title_core::ErrorBody;
use title_llm::LLMError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: topic")]
    MissingTopic,

    #[error("Invalid field: {field}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Title generation failed")]
    Provider(#[from] LLMError),

    #[error("Title generation timed out")]
    ProviderTimeout(Duration),
}

impl AppError {
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::MissingTopic | AppError::Unauthorized => None,
            AppError::InvalidField { reason, .. } => Some(reason.clone()),
            AppError::InvalidBody(reason) => Some(reason.clone()),
            AppError::Provider(err) => Some(err.to_string()),
            AppError::ProviderTimeout(after) => Some(format!(
                "No response from the model within {}s",
                after.as_secs_f32()
            )),
        }
    }

    pub fn body(&self) -> ErrorBody {
        let body = ErrorBody::new(self.to_string());
        match self.details() {
            Some(details) => body.with_details(details),
            None => body,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingTopic => StatusCode::BAD_REQUEST,
            AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
            AppError::ProviderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
