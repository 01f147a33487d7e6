//! Search movies by the name of a category they are filed under.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{CatalogService, extract::ApiQuery};

/// The query string for a category search, e.g. `?categoryName=Horror`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub category_name: String,
}

/// List the movies with a category named exactly `categoryName`.
///
/// Responds with 404 if no movie matches.
pub async fn search_movies_endpoint(
    State(catalog): State<CatalogService>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Response {
    match catalog.find_movies_by_category_name(&query.category_name) {
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!(
                "Failed to search movies by category \"{}\": {error}",
                query.category_name
            );
            error.into_response()
        }
    }
}
