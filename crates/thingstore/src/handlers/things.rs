//! Thing CRUD handlers.
//!
//! Each handler performs exactly one repository call. Only Read maps a
//! missing record to a client-facing error; conditional write failures in
//! the other handlers propagate as [`AppError`].

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use thingstore_core::thing::{
    id_from_key, ids_match, key_from_id, new_key, parse_thing_data, CreatedResponse,
    ErrorResponse, RequestIdResponse, ThingRecord,
};

use crate::{context::RequestContext, handlers::AppError, state::AppState};

// ============================================================================
// Create Thing
// ============================================================================

/// Create a new Thing (POST /things).
///
/// Any `id` in the body is replaced by the freshly generated one.
#[tracing::instrument(name = "create_thing", skip_all, fields(request_id = %ctx.request_id))]
pub async fn create_thing(
    State(state): State<AppState>,
    ctx: RequestContext,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "Received create request");

    let mut data = parse_thing_data(&body)?;
    let key = new_key();
    let id = id_from_key(&key);
    data.id = Some(id.clone());

    state
        .thing_repo
        .create_thing(&ThingRecord::new(key, data))
        .await?;

    tracing::info!(thing_id = %id, "Created new thing");
    tracing::debug!(status = %StatusCode::CREATED, "Sending response");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// ============================================================================
// Get Thing
// ============================================================================

/// Get a single Thing by id (GET /things/{id}).
#[tracing::instrument(name = "get_thing", skip_all, fields(request_id = %ctx.request_id))]
pub async fn get_thing(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    tracing::debug!(thing_id = %id, "Received get request");

    let key = key_from_id(&id);
    let response = match state.thing_repo.get_thing(&key).await? {
        Some(data) => (StatusCode::OK, Json(data)).into_response(),
        None => {
            tracing::debug!(thing_id = %id, "Thing not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::thing_not_found()),
            )
                .into_response()
        }
    };

    tracing::debug!(status = %response.status(), "Sending response");
    Ok(response)
}

// ============================================================================
// Upsert Thing
// ============================================================================

/// Replace an existing Thing (PUT /things/{id}).
///
/// The body id must equal the path id. On mismatch the store is left
/// untouched and the response is still a 201 carrying a `BadRequest` body.
#[tracing::instrument(name = "upsert_thing", skip_all, fields(request_id = %ctx.request_id))]
pub async fn upsert_thing(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    tracing::debug!(
        thing_id = %id,
        body = %String::from_utf8_lossy(&body),
        "Received upsert request"
    );

    let key = key_from_id(&id);
    let data = parse_thing_data(&body)?;

    if !ids_match(&id, &data) {
        tracing::warn!(
            thing_id = %id,
            payload_id = ?data.id,
            "Request id does not match payload id"
        );
        tracing::debug!(status = %StatusCode::CREATED, "Sending response");
        return Ok((StatusCode::CREATED, Json(ErrorResponse::id_mismatch())).into_response());
    }

    state.thing_repo.replace_thing(&key, &data).await?;

    tracing::info!(thing_id = %id, "Replaced thing");
    tracing::debug!(status = %StatusCode::CREATED, "Sending response");

    Ok((
        StatusCode::CREATED,
        Json(RequestIdResponse {
            request_id: ctx.request_id.to_string(),
        }),
    )
        .into_response())
}

// ============================================================================
// Delete Thing
// ============================================================================

/// Delete an existing Thing (DELETE /things/{id}).
#[tracing::instrument(name = "delete_thing", skip_all, fields(request_id = %ctx.request_id))]
pub async fn delete_thing(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Json<RequestIdResponse>, AppError> {
    tracing::debug!(thing_id = %id, "Received delete request");

    let key = key_from_id(&id);
    state.thing_repo.delete_thing(&key).await?;

    tracing::info!(thing_id = %id, "Deleted thing");
    tracing::debug!(status = %StatusCode::OK, "Sending response");

    Ok(Json(RequestIdResponse {
        request_id: ctx.request_id.to_string(),
    }))
}
