use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub mod category_handler;
pub mod drink_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

pub use category_handler::{list_categories, list_category_questions};
pub use drink_handler::{
    create_drink, delete_drink, list_drinks, list_drinks_detail, update_drink,
};
pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{create_question, delete_question, list_questions, search_questions};
pub use quiz_handler::play_quiz;

/// Registers every route on the app; shared by the server bootstrap and the
/// HTTP tests so both run the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_categories)
        .service(list_category_questions)
        .service(list_questions)
        .service(create_question)
        .service(delete_question)
        .service(search_questions)
        .service(play_quiz)
        .service(list_drinks)
        .service(list_drinks_detail)
        .service(create_drink)
        .service(update_drink)
        .service(delete_drink)
        .service(health_check)
        .service(health_check_ready);
}

/// Maps body-parsing failures onto the API error shapes. An absent body is a
/// bad request, a body that does not deserialize is unprocessable.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let app_error = match &err {
            JsonPayloadError::Deserialize(detail) if detail.is_eof() => {
                AppError::BadRequest("request body is missing".to_string())
            }
            JsonPayloadError::Deserialize(detail) => {
                AppError::Unprocessable(format!("malformed request body: {}", detail))
            }
            other => AppError::BadRequest(other.to_string()),
        };
        app_error.into()
    })
}
