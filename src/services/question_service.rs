use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::{CreateQuestionRequest, SearchQuestionsRequest},
    models::dto::response::{
        CategoryDto, DeletedResponse, QuestionCreatedResponse, QuestionDto, QuestionListResponse,
        QuestionSearchResponse,
    },
    pagination::{paginate, QUESTIONS_PER_PAGE},
    repositories::{CategoryRepository, QuestionRepository},
};

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// One page of all questions with the category index attached. An empty
    /// page is a not-found condition on this listing.
    pub async fn list_page(&self, page: i64) -> AppResult<QuestionListResponse> {
        let questions = self.questions.find_all().await?;
        let page_items = paginate(&questions, page, QUESTIONS_PER_PAGE);

        if page_items.is_empty() {
            return Err(AppError::NotFound(format!("no questions on page {}", page)));
        }

        let categories = self.categories.find_all().await?;

        Ok(QuestionListResponse {
            success: true,
            questions: page_items.iter().map(QuestionDto::from).collect(),
            total_questions: questions.len(),
            categories: categories.iter().map(CategoryDto::from).collect(),
            current_category: None,
        })
    }

    pub async fn create(
        &self,
        request: CreateQuestionRequest,
    ) -> AppResult<QuestionCreatedResponse> {
        request.validate()?;

        let created = self.questions.insert(request.into()).await?;

        Ok(QuestionCreatedResponse {
            success: true,
            created: created.id,
        })
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeletedResponse> {
        self.questions.delete(id).await?;

        Ok(DeletedResponse {
            success: true,
            deleted: id,
        })
    }

    /// Substring search. Unlike the primary listing, an empty result is a
    /// success here; only a missing term is an error.
    pub async fn search(
        &self,
        request: SearchQuestionsRequest,
        page: i64,
    ) -> AppResult<QuestionSearchResponse> {
        let term = request
            .search_term
            .ok_or_else(|| AppError::NotFound("search term missing from request".to_string()))?;

        let matches = self.questions.search(&term).await?;
        let page_items = paginate(&matches, page, QUESTIONS_PER_PAGE);

        Ok(QuestionSearchResponse {
            success: true,
            questions: page_items.iter().map(QuestionDto::from).collect(),
            total_questions: matches.len(),
            current_category: None,
        })
    }

    /// Questions of one category. A category with no questions at all is
    /// not-found; an empty late page of a non-empty pool is a legitimate
    /// zero-result.
    pub async fn list_by_category(
        &self,
        category_id: i64,
        page: i64,
    ) -> AppResult<QuestionListResponse> {
        let questions = self.questions.find_by_category(category_id).await?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "no questions in category {}",
                category_id
            )));
        }

        let page_items = paginate(&questions, page, QUESTIONS_PER_PAGE);
        let categories = self.categories.find_all().await?;

        Ok(QuestionListResponse {
            success: true,
            questions: page_items.iter().map(QuestionDto::from).collect(),
            total_questions: questions.len(),
            categories: categories.iter().map(CategoryDto::from).collect(),
            current_category: Some(category_id),
        })
    }
}
