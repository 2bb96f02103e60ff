use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::PlayQuizRequest};

#[post("/quizzes")]
pub async fn play_quiz(
    state: web::Data<AppState>,
    request: web::Json<PlayQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.play(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
