use serde::Serialize;

use crate::models::domain::{Category, Drink, Question, RecipePart};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    #[serde(rename = "type")] // legacy clients read this key
    pub label: String,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        CategoryDto {
            id: category.id,
            label: category.label.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            id: question.id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            difficulty: question.difficulty,
            category: question.category_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub categories: Vec<CategoryDto>,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionSearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i64,
}

/// Shared by question and drink deletion.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

/// `question` is `null` once the eligible pool is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizRoundResponse {
    pub success: bool,
    pub question: Option<QuestionDto>,
}

/// Summary projection of a recipe entry: ingredient names withheld from the
/// public menu view.
#[derive(Debug, Clone, Serialize)]
pub struct RecipePartSummaryDto {
    pub color: String,
    pub parts: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrinkSummaryDto {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<RecipePartSummaryDto>,
}

impl From<&Drink> for DrinkSummaryDto {
    fn from(drink: &Drink) -> Self {
        let recipe = drink
            .recipe_parts()
            .into_iter()
            .map(|part| RecipePartSummaryDto {
                color: part.color,
                parts: part.parts,
            })
            .collect();

        DrinkSummaryDto {
            id: drink.id,
            title: drink.title.clone(),
            recipe,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DrinkDetailDto {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

impl From<&Drink> for DrinkDetailDto {
    fn from(drink: &Drink) -> Self {
        DrinkDetailDto {
            id: drink.id,
            title: drink.title.clone(),
            recipe: drink.recipe_parts(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrinkListResponse {
    pub success: bool,
    pub drinks: Vec<DrinkSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct DrinkDetailResponse {
    pub success: bool,
    pub drinks: Vec<DrinkDetailDto>,
}
