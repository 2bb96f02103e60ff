use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::{
    errors::AppResult,
    models::domain::Question,
    models::dto::request::PlayQuizRequest,
    models::dto::response::{QuestionDto, QuizRoundResponse},
    repositories::QuestionRepository,
};

/// Pool entries still eligible for a round: the category must match the
/// filter (when one is set) and the id must not have been served already.
pub fn eligible_questions<'a>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    category: Option<i64>,
) -> Vec<&'a Question> {
    pool.iter()
        .filter(|question| category.map_or(true, |id| question.category_id == id))
        .filter(|question| !previous.contains(&question.id))
        .collect()
}

pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// One quiz round: a uniformly random eligible question, or `null` once
    /// the pool is exhausted.
    pub async fn play(&self, request: PlayQuizRequest) -> AppResult<QuizRoundResponse> {
        let pool = self.questions.find_all().await?;
        let previous: HashSet<i64> = request.previous_questions.iter().copied().collect();
        let eligible = eligible_questions(&pool, &previous, request.category_filter());

        let question = eligible
            .choose(&mut rand::thread_rng())
            .map(|question| QuestionDto::from(*question));

        Ok(QuizRoundResponse {
            success: true,
            question,
        })
    }
}
