mod date;
mod error;
mod ingredient;
mod lookup;
mod mealplan;
mod ordered;
mod pantry;
mod recipe;
mod repository;
mod rounding;
mod user;

pub use date::*;
pub use error::*;
pub use ingredient::*;
pub use lookup::*;
pub use mealplan::*;
pub use ordered::*;
pub use pantry::*;
pub use recipe::*;
pub use repository::*;
pub use rounding::*;
pub use user::*;

/// Identifier for a newly created record.
pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}
