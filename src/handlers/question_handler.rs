use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, PageQuery, SearchQuestionsRequest},
};

#[get("/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.list_page(query.page).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    question_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .delete(question_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/questions/search")]
pub async fn search_questions(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
    request: web::Json<SearchQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .search(request.into_inner(), query.page)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
