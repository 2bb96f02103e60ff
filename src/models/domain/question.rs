use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64, // Assigned by the store on insert
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category_id: i64,
}

/// Insert record for a question; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category_id: i64,
}

impl NewQuestion {
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category_id: self.category_id,
        }
    }
}
