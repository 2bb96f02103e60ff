use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::{CategoryDto, CategoryListResponse},
    repositories::CategoryRepository,
};

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list_categories(&self) -> AppResult<CategoryListResponse> {
        let categories = self.categories.find_all().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound("no categories exist".to_string()));
        }

        Ok(CategoryListResponse {
            success: true,
            categories: categories.iter().map(CategoryDto::from).collect(),
        })
    }
}
