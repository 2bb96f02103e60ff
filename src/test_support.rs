//! In-memory repositories, seed data, and token minting shared by the unit
//! tests and the HTTP test suites (via the `test-support` feature).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::SecretString;
use tokio::sync::RwLock;

use crate::{
    app_state::AppState,
    auth::{Audience, Claims, TokenVerifier},
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Category, Drink, NewDrink, NewQuestion, Question, RecipePart},
    repositories::{CategoryRepository, DrinkRepository, QuestionRepository},
};

pub const TEST_SECRET: &str = "unit-test-secret";
pub const TEST_AUDIENCE: &str = "drinks-api";
pub const TEST_ISSUER: &str = "https://test-tenant.example.auth0.com/";

pub fn test_verifier() -> TokenVerifier {
    TokenVerifier::from_secret(&SecretString::from(TEST_SECRET.to_string()), TEST_AUDIENCE, TEST_ISSUER)
}

/// Token the test verifier accepts, valid for an hour.
pub fn mint_token(permissions: Option<&[&str]>) -> String {
    mint_token_with_expiry(permissions, 3600)
}

/// Token two hours past expiry, which clears the default validation leeway.
pub fn mint_expired_token() -> String {
    mint_token_with_expiry(None, -7200)
}

pub fn mint_token_with_expiry(permissions: Option<&[&str]>, expires_in_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: Some(TEST_ISSUER.to_string()),
        sub: Some("auth0|tester".to_string()),
        aud: Some(Audience::Single(TEST_AUDIENCE.to_string())),
        exp: (now + expires_in_secs) as usize,
        iat: Some(now as usize),
        permissions: permissions.map(|list| list.iter().map(|p| p.to_string()).collect()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("static test claims encode")
}

pub struct InMemoryQuestionRepository {
    rows: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(rows: Vec<Question>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|question| question.id);
        Ok(rows)
    }

    async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|question| question.category_id == category_id)
            .collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        // Substring containment matches the store's regex behaviour for
        // terms without metacharacters, which is all the suites use.
        let needle = term.to_lowercase();
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|question| question.question.to_lowercase().contains(&needle))
            .collect())
    }

    async fn insert(&self, question: NewQuestion) -> AppResult<Question> {
        let mut rows = self.rows.write().await;
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        let question = question.into_question(next_id);
        rows.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|question| question.id != id);

        if rows.len() == before {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}

pub struct InMemoryCategoryRepository {
    rows: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn seeded(rows: Vec<Category>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|category| category.id);
        Ok(rows)
    }
}

pub struct InMemoryDrinkRepository {
    rows: RwLock<Vec<Drink>>,
}

impl InMemoryDrinkRepository {
    pub fn seeded(rows: Vec<Drink>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn find_all(&self) -> AppResult<Vec<Drink>> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|drink| drink.id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|drink| drink.id == id).cloned())
    }

    async fn insert(&self, drink: NewDrink) -> AppResult<Drink> {
        let mut rows = self.rows.write().await;
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        let drink = drink.into_drink(next_id);
        rows.push(drink.clone());
        Ok(drink)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        let mut rows = self.rows.write().await;
        let slot = rows.iter_mut().find(|row| row.id == drink.id).ok_or_else(|| {
            AppError::NotFound(format!("Drink with id '{}' not found", drink.id))
        })?;
        *slot = drink.clone();
        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|drink| drink.id != id);

        if rows.len() == before {
            return Err(AppError::NotFound(format!(
                "Drink with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}

pub fn sample_categories() -> Vec<Category> {
    let labels = [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ];
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| Category {
            id: index as i64 + 1,
            label: label.to_string(),
        })
        .collect()
}

/// Twelve questions across the six categories, ids 1 through 12. The first
/// list page holds ten of them and the second page the remaining two.
pub fn sample_questions() -> Vec<Question> {
    let rows: [(&str, &str, i32, i64); 12] = [
        ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
        ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
        ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
        ("Which Dutch graphic artist was known for impossible constructions?", "Escher", 1, 2),
        ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
        ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
        ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
        ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
        ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (question, answer, difficulty, category_id))| Question {
            id: index as i64 + 1,
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty: *difficulty,
            category_id: *category_id,
        })
        .collect()
}

pub fn sample_drinks() -> Vec<Drink> {
    vec![
        drink(
            1,
            "water",
            &[part("blue", "water", 1)],
        ),
        drink(
            2,
            "mocha",
            &[part("brown", "coffee", 2), part("white", "milk", 1)],
        ),
    ]
}

pub fn part(color: &str, name: &str, parts: i64) -> RecipePart {
    RecipePart {
        color: color.to_string(),
        name: name.to_string(),
        parts,
    }
}

fn drink(id: i64, title: &str, recipe: &[RecipePart]) -> Drink {
    Drink {
        id,
        title: title.to_string(),
        recipe: serde_json::to_string(recipe).expect("static fixture recipe encodes"),
    }
}

/// State over in-memory repositories seeded with the given rows.
pub fn state_with(
    questions: Vec<Question>,
    categories: Vec<Category>,
    drinks: Vec<Drink>,
) -> AppState {
    AppState::from_repositories(
        Database::detached(),
        Arc::new(InMemoryQuestionRepository::seeded(questions)),
        Arc::new(InMemoryCategoryRepository::seeded(categories)),
        Arc::new(InMemoryDrinkRepository::seeded(drinks)),
    )
}

pub fn seeded_state() -> AppState {
    state_with(sample_questions(), sample_categories(), sample_drinks())
}

pub fn empty_state() -> AppState {
    state_with(Vec::new(), Vec::new(), Vec::new())
}
