use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::GenerateShortNotesRequest};

/// Renders an AI answer into a single revision-notes image.
#[post("/generate-short-notes")]
pub async fn generate_short_notes(
    state: web::Data<AppState>,
    request: web::Json<GenerateShortNotesRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let notes = state
        .notes_service
        .generate(&request.answer, request.subject.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(notes))
}
