// Route exports
pub mod failure;
pub mod pages;

use actix_web::{error, web, HttpRequest, HttpResponse};

pub use failure::{Failure, Flow, RequestError};
pub use pages::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .configure(pages::configure);
}

fn plain_text_bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

/// Handle undecodable form submissions
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    let response = plain_text_bad_request(format!("Invalid form submission: {}", err));
    error::InternalError::from_response(err, response).into()
}

/// Handle undecodable query strings
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let response = plain_text_bad_request(format!("Invalid query: {}", err));
    error::InternalError::from_response(err, response).into()
}
