//! Movie listing and lookup endpoints.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    CatalogService, Error, Outcome,
    extract::ApiPath,
    movie::{Movie, MovieId},
};

/// List every movie.
pub async fn get_movies_endpoint(
    State(catalog): State<CatalogService>,
) -> Result<Outcome<Vec<Movie>>, Error> {
    catalog
        .list_movies()
        .inspect_err(|error| tracing::error!("Failed to retrieve movies: {error}"))
}

/// Get a single movie by ID.
pub async fn get_movie_endpoint(
    ApiPath(movie_id): ApiPath<MovieId>,
    State(catalog): State<CatalogService>,
) -> Response {
    match catalog.get_movie(movie_id) {
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve movie {movie_id}: {error}");
            error.into_response()
        }
    }
}
