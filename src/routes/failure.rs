use crate::core::{EncoderError, FieldError, PredictError};
use crate::services::views::ViewError;
use actix_web::{error, http::StatusCode, HttpResponse};
use std::fmt;
use thiserror::Error;

/// What went wrong while handling a single request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    InvalidField(#[from] FieldError),

    #[error("{0}")]
    Prediction(#[from] PredictError),

    #[error("{0}")]
    Decode(#[from] EncoderError),

    #[error("{0}")]
    Render(#[from] ViewError),
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidField(_) => StatusCode::BAD_REQUEST,
            RequestError::Prediction(_) | RequestError::Decode(_) | RequestError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Request flows that can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Landing,
    Recommender,
    Personality,
    Results,
}

impl Flow {
    fn name(self) -> &'static str {
        match self {
            Flow::Landing => "landing",
            Flow::Recommender => "recommender",
            Flow::Personality => "personality",
            Flow::Results => "results",
        }
    }
}

/// Handler-level failure, answered with a plain-text description
#[derive(Debug)]
pub struct Failure {
    pub flow: Flow,
    pub error: RequestError,
}

impl Failure {
    pub fn new(flow: Flow, error: impl Into<RequestError>) -> Self {
        Self {
            flow,
            error: error.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in {}: {}", self.flow.name(), self.error)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl error::ResponseError for Failure {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
