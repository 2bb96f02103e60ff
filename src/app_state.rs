use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CategoryRepository, DrinkRepository, MongoCategoryRepository, MongoDrinkRepository,
        MongoQuestionRepository, QuestionRepository,
    },
    services::{CategoryService, DrinkService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub drink_service: Arc<DrinkService>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let question_repository = MongoQuestionRepository::new(&db);
        question_repository.ensure_indexes().await?;
        let category_repository = MongoCategoryRepository::new(&db);
        category_repository.ensure_indexes().await?;
        let drink_repository = MongoDrinkRepository::new(&db);
        drink_repository.ensure_indexes().await?;

        Ok(Self::from_repositories(
            db,
            Arc::new(question_repository),
            Arc::new(category_repository),
            Arc::new(drink_repository),
        ))
    }

    /// Wires services over any repository set; tests inject in-memory ones.
    pub fn from_repositories(
        db: Database,
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        drinks: Arc<dyn DrinkRepository>,
    ) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            question_service: Arc::new(QuestionService::new(questions.clone(), categories)),
            quiz_service: Arc::new(QuizService::new(questions)),
            drink_service: Arc::new(DrinkService::new(drinks)),
            db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
