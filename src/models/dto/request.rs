use serde::Deserialize;
use validator::Validate;

use crate::models::domain::drink::RecipePart;
use crate::models::domain::NewQuestion;

/// `?page=N` query string shared by the listing and search endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,

    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i32,

    /// Id of the category the question belongs to.
    pub category: i64,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: request.question,
            answer: request.answer,
            difficulty: request.difficulty,
            category_id: request.category,
        }
    }
}

/// Body of `POST /questions/search`. The term stays optional so a missing
/// key surfaces as "not found" (the published client relies on it), not as
/// a malformed request.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuizCategoryRef {
    /// `0` selects from any category.
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayQuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategoryRef,
}

impl PlayQuizRequest {
    /// Translates the wire sentinel into an optional filter.
    pub fn category_filter(&self) -> Option<i64> {
        match self.quiz_category.id {
            0 => None,
            id => Some(id),
        }
    }
}

/// A recipe on the wire: a single entry or a list of entries. The store
/// always holds a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<RecipePart>),
    One(RecipePart),
}

impl RecipeInput {
    pub fn into_parts(self) -> Vec<RecipePart> {
        match self {
            RecipeInput::Many(parts) => parts,
            RecipeInput::One(part) => vec![part],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    pub recipe: RecipeInput,
}

/// Partial update; at least one field must be supplied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    pub recipe: Option<RecipeInput>,
}

impl UpdateDrinkRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}
