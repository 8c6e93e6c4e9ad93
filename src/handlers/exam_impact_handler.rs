use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::ExamImpactRequest};

/// Profile-filtered exam news. Validation happens before any gateway call;
/// the normalized result is returned as-is.
#[post("/exam-impact")]
pub async fn exam_impact(
    state: web::Data<AppState>,
    request: web::Json<ExamImpactRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = request.into_inner().into_profile()?;
    let result = state.impact_service.fetch_updates(&profile).await?;
    Ok(HttpResponse::Ok().json(result))
}
