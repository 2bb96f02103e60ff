use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_permission, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateDrinkRequest, UpdateDrinkRequest},
};

#[get("/drinks")]
pub async fn list_drinks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.drink_service.list().await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/drinks-detail")]
pub async fn list_drinks_detail(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, "get:drinks-detail")?;

    let response = state.drink_service.list_detail().await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/drinks")]
pub async fn create_drink(
    state: web::Data<AppState>,
    request: web::Json<CreateDrinkRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, "post:drinks")?;

    let response = state.drink_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[patch("/drinks/{drink_id}")]
pub async fn update_drink(
    state: web::Data<AppState>,
    drink_id: web::Path<i64>,
    request: web::Json<UpdateDrinkRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, "patch:drinks")?;

    let response = state
        .drink_service
        .update(drink_id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/drinks/{drink_id}")]
pub async fn delete_drink(
    state: web::Data<AppState>,
    drink_id: web::Path<i64>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_permission(&auth.0, "delete:drinks")?;

    let response = state.drink_service.delete(drink_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
