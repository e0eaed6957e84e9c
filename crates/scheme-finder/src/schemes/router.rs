use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::catalog::{ProfileArchive, SchemeCatalog};
use super::domain::{ProfileSubmission, SchemeId};
use super::ranking::filter_by_category;
use super::service::{SchemeFinderService, SchemeServiceError};

/// Router builder exposing the catalog, recommendation, and form download endpoints.
pub fn scheme_router<C, A>(service: Arc<SchemeFinderService<C, A>>) -> Router
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    Router::new()
        .route("/api/schemes", get(list_handler::<C, A>))
        .route("/api/schemes/recommend", post(recommend_handler::<C, A>))
        .route("/api/schemes/:scheme_id", get(detail_handler::<C, A>))
        .route("/api/schemes/:scheme_id/form", get(form_handler::<C, A>))
        .route("/api/scheme-categories", get(categories_handler::<C, A>))
        .with_state(service)
}

/// Presentation-side narrowing of a ranked list. `all` or an absent category keeps everything.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendFilter {
    #[serde(default)]
    pub category: Option<String>,
}

pub(crate) async fn list_handler<C, A>(
    State(service): State<Arc<SchemeFinderService<C, A>>>,
) -> Response
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    match service.schemes() {
        Ok(schemes) => (StatusCode::OK, Json(schemes)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detail_handler<C, A>(
    State(service): State<Arc<SchemeFinderService<C, A>>>,
    Path(scheme_id): Path<String>,
) -> Response
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    let id = match parse_scheme_id(&scheme_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.scheme(id) {
        Ok(scheme) => (StatusCode::OK, Json(scheme)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recommend_handler<C, A>(
    State(service): State<Arc<SchemeFinderService<C, A>>>,
    Query(filter): Query<RecommendFilter>,
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> Response
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return message(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match service.recommend(submission) {
        Ok(ranked) => {
            let ranked = filter_by_category(ranked, filter.category.as_deref());
            (StatusCode::OK, Json(ranked)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn form_handler<C, A>(
    State(service): State<Arc<SchemeFinderService<C, A>>>,
    Path(scheme_id): Path<String>,
) -> Response
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    let id = match parse_scheme_id(&scheme_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let form = match service.application_form(id) {
        Ok(form) => form,
        Err(err) => return error_response(err),
    };

    let body = match tokio::fs::read(&form.path).await {
        Ok(body) => body,
        Err(err) => {
            error!(
                scheme_id = id.0,
                path = %form.path.display(),
                error = %err,
                "failed to read application form"
            );
            return message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to download application form",
            );
        }
    };

    let content_type = mime_guess::from_path(&form.path)
        .first_raw()
        .unwrap_or("application/pdf");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", form.file_name),
            ),
        ],
        body,
    )
        .into_response()
}

pub(crate) async fn categories_handler<C, A>(
    State(service): State<Arc<SchemeFinderService<C, A>>>,
) -> Response
where
    C: SchemeCatalog + 'static,
    A: ProfileArchive + 'static,
{
    match service.categories() {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(err) => error_response(err),
    }
}

fn parse_scheme_id(raw: &str) -> Result<SchemeId, Response> {
    raw.trim()
        .parse::<i64>()
        .map(SchemeId)
        .map_err(|_| message(StatusCode::BAD_REQUEST, "Invalid scheme ID"))
}

fn error_response(err: SchemeServiceError) -> Response {
    let status = match &err {
        SchemeServiceError::Intake(_) => StatusCode::BAD_REQUEST,
        SchemeServiceError::SchemeNotFound(_)
        | SchemeServiceError::FormUnavailable(_)
        | SchemeServiceError::FormMissing(_) => StatusCode::NOT_FOUND,
        SchemeServiceError::Catalog(_) => {
            error!(error = %err, "scheme catalog request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    message(status, err.to_string())
}

fn message(status: StatusCode, text: impl Into<String>) -> Response {
    let payload = json!({ "message": text.into() });
    (status, Json(payload)).into_response()
}
