use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::PageQuery};

#[get("/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.category_service.list_categories().await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/categories/{category_id}/questions")]
pub async fn list_category_questions(
    state: web::Data<AppState>,
    category_id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .list_by_category(category_id.into_inner(), query.page)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
