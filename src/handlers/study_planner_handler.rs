use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::PlannerInput};

/// Day-by-day study schedule generation.
#[post("/study-planner")]
pub async fn study_planner(
    state: web::Data<AppState>,
    request: web::Json<PlannerInput>,
) -> Result<HttpResponse, AppError> {
    let input = request.into_inner();
    input.validate()?;

    let plan = state.planner_service.generate_plan(&input).await?;
    Ok(HttpResponse::Ok().json(plan))
}
