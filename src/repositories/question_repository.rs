use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneOptions, FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuestion, Question},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id; page slicing happens in the service layer.
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Question>>;
    /// Case-insensitive substring match over the question text.
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;
    async fn insert(&self, question: NewQuestion) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        Ok(())
    }

    // Ids are small integers assigned at insert time; concurrent inserts are
    // out of scope for this deployment and the unique index backstops it.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneOptions::builder().sort(doc! { "id": -1 }).build();
        let newest = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;

        Ok(newest.map(|question| question.id + 1).unwrap_or(1))
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self
            .collection
            .find(doc! { "category_id": category_id })
            .with_options(options)
            .await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        // The term is passed through as a pattern, as the legacy API did.
        let filter = doc! { "question": { "$regex": term, "$options": "i" } };
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.collection.find(filter).with_options(options).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn insert(&self, question: NewQuestion) -> AppResult<Question> {
        let question = question.into_question(self.next_id().await?);
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
