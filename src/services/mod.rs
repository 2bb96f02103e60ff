pub mod category_service;
pub mod drink_service;
pub mod question_service;
pub mod quiz_service;

pub use category_service::CategoryService;
pub use drink_service::DrinkService;
pub use question_service::QuestionService;
pub use quiz_service::{eligible_questions, QuizService};
