pub mod category;
pub mod drink;
pub mod question;

pub use category::Category;
pub use drink::{Drink, NewDrink, RecipePart};
pub use question::{NewQuestion, Question};
