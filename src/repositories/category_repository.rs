use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Category};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id. The collection is reference data and
    /// has no write path.
    async fn find_all(&self) -> AppResult<Vec<Category>>;
}

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("categories");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
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
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let categories: Vec<Category> = cursor.try_collect().await?;
        Ok(categories)
    }
}
