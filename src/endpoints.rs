//! Endpoint handlers: the form page and the submission pipeline behind
//! `/api/form`.

use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Request, State},
    http::{Method, Response, StatusCode, header::CONTENT_TYPE},
    response::Html,
};
use chrono::Utc;

use crate::{model::status_response::StatusResponse, parse, state::AppState};

/// Serves the embedded form page
pub async fn form_page() -> Html<&'static str> {
    Html(include_str!("../static/form.html"))
}

/// Handles a form submission end to end: parse the multipart body, validate
/// it against the schema, persist it, answer with a JSON status.
///
/// The route is registered for every method so that non-POST requests can be
/// turned away with a 404 before any body handling. Each stage maps to
/// exactly one response: a parse error and a schema miss are both a 400 with
/// the same body, a store error is the only 500, and every request gets
/// exactly one answer.
pub async fn handle_form(State(state): State<AppState>, request: Request) -> Response<Body> {
    if request.method() != Method::POST {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body("method not found".into())
            .unwrap();
    }

    let received_at = Utc::now();

    // The handler owns multipart decoding; nothing upstream has touched the body
    let multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::warn!("Rejected submission: {e}");
            return invalid_submission();
        }
    };

    let form_data = match parse::parse_form(multipart, &state.upload_dir).await {
        Ok(form_data) => form_data,
        Err(e) => {
            tracing::warn!("Could not parse submission: {e}");
            return invalid_submission();
        }
    };

    if !state.schema.validate(&form_data) {
        return invalid_submission();
    }

    match state.store.persist(&form_data, received_at).await {
        Ok(()) => json_response(StatusCode::OK, &StatusResponse::submitted()),
        Err(e) => {
            tracing::error!("Could not persist submission: {e}");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &StatusResponse::failed(),
            )
        }
    }
}

/// Shared 400 for both parse errors and schema misses. The client is not
/// told which of the two happened.
fn invalid_submission() -> Response<Body> {
    json_response(StatusCode::BAD_REQUEST, &StatusResponse::invalid())
}

fn json_response(status: StatusCode, status_response: &StatusResponse) -> Response<Body> {
    let body_json = serde_json::to_string(status_response).unwrap();

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(body_json.into())
        .unwrap()
}
