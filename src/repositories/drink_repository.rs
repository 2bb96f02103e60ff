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
    models::domain::{Drink, NewDrink},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Drink>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>>;
    async fn insert(&self, drink: NewDrink) -> AppResult<Drink>;
    /// Full-row replacement keyed on the drink's id.
    async fn update(&self, drink: Drink) -> AppResult<Drink>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoDrinkRepository {
    collection: Collection<Drink>,
}

impl MongoDrinkRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("drinks");
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

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneOptions::builder().sort(doc! { "id": -1 }).build();
        let newest = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;

        Ok(newest.map(|drink| drink.id + 1).unwrap_or(1))
    }
}

#[async_trait]
impl DrinkRepository for MongoDrinkRepository {
    async fn find_all(&self) -> AppResult<Vec<Drink>> {
        let options = FindOptions::builder().sort(doc! { "id": 1 }).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let drinks: Vec<Drink> = cursor.try_collect().await?;
        Ok(drinks)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>> {
        let drink = self.collection.find_one(doc! { "id": id }).await?;
        Ok(drink)
    }

    async fn insert(&self, drink: NewDrink) -> AppResult<Drink> {
        let drink = drink.into_drink(self.next_id().await?);
        self.collection.insert_one(&drink).await?;
        Ok(drink)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        let result = self
            .collection
            .replace_one(doc! { "id": drink.id }, &drink)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Drink with id '{}' not found",
                drink.id
            )));
        }

        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Drink with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
