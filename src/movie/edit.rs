//! Movie update endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    CatalogService, Outcome,
    extract::{ApiJson, ApiPath},
    movie::{MovieFormData, MovieId},
};

/// Handle a movie update. The stored movie is replaced, not merged.
pub async fn update_movie_endpoint(
    ApiPath(movie_id): ApiPath<MovieId>,
    State(catalog): State<CatalogService>,
    ApiJson(form_data): ApiJson<MovieFormData>,
) -> Response {
    match catalog.update_movie(movie_id, form_data) {
        Ok(Outcome::Ok) => {
            tracing::info!("Updated movie {movie_id}");
            Outcome::<()>::Ok.into_response()
        }
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating movie {movie_id}: {error}"
            );
            error.into_response()
        }
    }
}
