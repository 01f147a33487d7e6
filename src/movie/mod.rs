//! Movies and the denormalized category names they carry.

mod create;
mod delete;
mod domain;
mod edit;
mod list;
mod search;

pub use create::create_movie_endpoint;
pub use delete::delete_movie_endpoint;
pub use domain::{
    Movie, MovieCategories, MovieDetails, MovieFormData, MovieId, RELEASE_DATE_FORMAT,
};
pub use edit::update_movie_endpoint;
pub use list::{get_movie_endpoint, get_movies_endpoint};
pub use search::search_movies_endpoint;
