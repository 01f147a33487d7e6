//! Categories that movies are filed under.

mod create;
mod delete;
mod domain;
mod edit;
mod list;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryFormData, CategoryId, CategoryName};
pub use edit::update_category_endpoint;
pub use list::{get_categories_endpoint, get_category_endpoint};
