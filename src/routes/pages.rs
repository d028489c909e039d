use actix_web::{http::header, web, HttpResponse};
use crate::core::{holland::quiz_sections, FeatureRow, HollandScores};
use crate::models::{HealthResponse, ResultsQuery};
use crate::routes::failure::{Failure, Flow, RequestError};
use crate::services::AppContext;
use std::collections::HashMap;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<AppContext>,
}

impl AppState {
    pub fn new(context: AppContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }
}

type Form = web::Form<HashMap<String, String>>;

/// Configure all page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/recommender.html", web::get().to(recommender_form))
        .route("/recommender.html", web::post().to(recommend))
        .route("/personality.html", web::get().to(personality_form))
        .route("/personality.html", web::post().to(score_personality))
        .route("/results", web::get().to(results))
        .route("/health", web::get().to(health_check));
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn redirect_to_results(label: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((
            header::LOCATION,
            format!("/results?result={}", urlencoding::encode(label)),
        ))
        .finish()
}

/// GET /
async fn index(state: web::Data<AppState>) -> Result<HttpResponse, Failure> {
    let body = state
        .context
        .views
        .index()
        .map_err(|e| Failure::new(Flow::Landing, e))?;
    Ok(html(body))
}

/// GET /recommender.html
async fn recommender_form(state: web::Data<AppState>) -> Result<HttpResponse, Failure> {
    let ctx = &state.context;
    let body = ctx
        .views
        .recommender(ctx.feature_names())
        .map_err(|e| Failure::new(Flow::Recommender, e))?;
    Ok(html(body))
}

/// POST /recommender.html
///
/// Builds a feature row from the submitted fields, asks the model for a
/// class code and redirects to the decoded career.
async fn recommend(state: web::Data<AppState>, form: Form) -> Result<HttpResponse, Failure> {
    let ctx = &state.context;
    let fail = |e: RequestError| {
        let failure = Failure::new(Flow::Recommender, e);
        tracing::warn!("{}", failure);
        failure
    };

    let row = FeatureRow::from_form(ctx.feature_names(), &form).map_err(|e| fail(e.into()))?;
    let code = ctx.predictor.predict_one(&row).map_err(|e| fail(e.into()))?;
    let label = ctx.label_encoder().decode(code).map_err(|e| fail(e.into()))?;

    tracing::info!("Recommended '{}' (class {})", label, code);

    Ok(redirect_to_results(label))
}

/// GET /personality.html
async fn personality_form(state: web::Data<AppState>) -> Result<HttpResponse, Failure> {
    let body = state
        .context
        .views
        .personality(&quiz_sections())
        .map_err(|e| Failure::new(Flow::Personality, e))?;
    Ok(html(body))
}

/// POST /personality.html
///
/// Sums the answers per RIASEC category and redirects to the dominant one.
async fn score_personality(form: Form) -> Result<HttpResponse, Failure> {
    let scores = HollandScores::from_form(&form).map_err(|e| {
        let failure = Failure::new(Flow::Personality, e);
        tracing::warn!("{}", failure);
        failure
    })?;

    let dominant = scores.dominant();
    tracing::info!("Dominant personality type: {} ({:?})", dominant, scores);

    Ok(redirect_to_results(dominant.symbol()))
}

/// GET /results?result={label}
///
/// Pairs are taken raw so a repeated `result` key still renders a page.
async fn results(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, Failure> {
    let ctx = &state.context;
    let query = ResultsQuery::from_pairs(query.into_inner());
    let label = query.label();
    let description = ctx.descriptions.describe(label);

    let body = ctx
        .views
        .results(label, description)
        .map_err(|e| Failure::new(Flow::Results, e))?;
    Ok(html(body))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let ctx = &state.context;
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        features: ctx.feature_names().len(),
        classes: ctx.label_encoder().len(),
    })
}
