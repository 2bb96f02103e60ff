use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Drink, NewDrink},
    models::dto::request::{CreateDrinkRequest, UpdateDrinkRequest},
    models::dto::response::{
        DeletedResponse, DrinkDetailDto, DrinkDetailResponse, DrinkListResponse, DrinkSummaryDto,
    },
    repositories::DrinkRepository,
};

pub struct DrinkService {
    drinks: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(drinks: Arc<dyn DrinkRepository>) -> Self {
        Self { drinks }
    }

    /// Public menu: summary projection. An empty menu is not-found, matching
    /// the legacy service.
    pub async fn list(&self) -> AppResult<DrinkListResponse> {
        let drinks = self.drinks.find_all().await?;

        if drinks.is_empty() {
            return Err(AppError::NotFound("no drinks exist".to_string()));
        }

        Ok(DrinkListResponse {
            success: true,
            drinks: drinks.iter().map(DrinkSummaryDto::from).collect(),
        })
    }

    pub async fn list_detail(&self) -> AppResult<DrinkDetailResponse> {
        let drinks = self.drinks.find_all().await?;

        if drinks.is_empty() {
            return Err(AppError::NotFound("no drinks exist".to_string()));
        }

        Ok(DrinkDetailResponse {
            success: true,
            drinks: drinks.iter().map(DrinkDetailDto::from).collect(),
        })
    }

    pub async fn create(&self, request: CreateDrinkRequest) -> AppResult<DrinkDetailResponse> {
        request.validate()?;

        let CreateDrinkRequest { title, recipe } = request;
        let recipe = Drink::serialize_recipe(&recipe.into_parts())?;
        let created = self.drinks.insert(NewDrink { title, recipe }).await?;

        Ok(DrinkDetailResponse {
            success: true,
            drinks: vec![DrinkDetailDto::from(&created)],
        })
    }

    /// Partial update. Absence checks run against the stored row first, so
    /// a missing drink stays not-found even when the patch body is empty.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateDrinkRequest,
    ) -> AppResult<DrinkDetailResponse> {
        request.validate()?;

        let mut drink = self
            .drinks
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Drink with id '{}' not found", id)))?;

        if request.is_empty() {
            return Err(AppError::Unprocessable(
                "update must supply a title or a recipe".to_string(),
            ));
        }

        if let Some(title) = request.title {
            drink.title = title;
        }
        if let Some(recipe) = request.recipe {
            drink.recipe = Drink::serialize_recipe(&recipe.into_parts())?;
        }

        let updated = self.drinks.update(drink).await?;

        Ok(DrinkDetailResponse {
            success: true,
            drinks: vec![DrinkDetailDto::from(&updated)],
        })
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeletedResponse> {
        self.drinks.delete(id).await?;

        Ok(DeletedResponse {
            success: true,
            deleted: id,
        })
    }
}
