//! Movie deletion endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{CatalogService, Outcome, extract::ApiPath, movie::MovieId};

/// Handle movie deletion.
pub async fn delete_movie_endpoint(
    ApiPath(movie_id): ApiPath<MovieId>,
    State(catalog): State<CatalogService>,
) -> Response {
    match catalog.delete_movie(movie_id) {
        Ok(Outcome::Ok) => {
            tracing::info!("Deleted movie {movie_id}");
            Outcome::<()>::Ok.into_response()
        }
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting movie {movie_id}: {error}"
            );
            error.into_response()
        }
    }
}
