use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Drink {
    pub id: i64, // Assigned by the store on insert
    pub title: String,
    pub recipe: String, // JSON-serialized Vec<RecipePart>
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipePart {
    pub color: String,
    pub name: String,
    pub parts: i64,
}

/// Insert record for a drink; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewDrink {
    pub title: String,
    pub recipe: String,
}

impl NewDrink {
    pub fn into_drink(self, id: i64) -> Drink {
        Drink {
            id,
            title: self.title,
            recipe: self.recipe,
        }
    }
}

impl Drink {
    /// Parses the stored recipe text. Rows only ever hold text produced by
    /// [`Drink::serialize_recipe`], so unreadable text is treated as an
    /// empty recipe rather than a request failure.
    pub fn recipe_parts(&self) -> Vec<RecipePart> {
        serde_json::from_str(&self.recipe).unwrap_or_default()
    }

    pub fn serialize_recipe(parts: &[RecipePart]) -> AppResult<String> {
        Ok(serde_json::to_string(parts)?)
    }
}
