//! Movie creation endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    CatalogService, Outcome, endpoints, extract::ApiJson, movie::MovieFormData,
    response::created_response,
};

/// Handle movie creation. Responds with the new movie and its location.
pub async fn create_movie_endpoint(
    State(catalog): State<CatalogService>,
    ApiJson(new_movie): ApiJson<MovieFormData>,
) -> Response {
    match catalog.create_movie(new_movie) {
        Ok(Outcome::Created(movie)) => {
            tracing::info!("Created movie {} \"{}\"", movie.id, movie.title);
            created_response(endpoints::MOVIE, movie.id, movie)
        }
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a movie: {error}");
            error.into_response()
        }
    }
}
