//! Category listing and lookup endpoints.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    CatalogService, Error, Outcome,
    category::{Category, CategoryId},
    extract::ApiPath,
};

/// List every category.
pub async fn get_categories_endpoint(
    State(catalog): State<CatalogService>,
) -> Result<Outcome<Vec<Category>>, Error> {
    catalog
        .list_categories()
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))
}

/// Get a single category by ID.
pub async fn get_category_endpoint(
    ApiPath(category_id): ApiPath<CategoryId>,
    State(catalog): State<CatalogService>,
) -> Response {
    match catalog.get_category(category_id) {
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve category {category_id}: {error}");
            error.into_response()
        }
    }
}
