//! Category deletion endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{CatalogService, Outcome, category::CategoryId, extract::ApiPath};

/// Handle category deletion. The category is also removed from every movie.
pub async fn delete_category_endpoint(
    ApiPath(category_id): ApiPath<CategoryId>,
    State(catalog): State<CatalogService>,
) -> Response {
    match catalog.delete_category(category_id) {
        Ok(Outcome::Ok) => {
            tracing::info!("Deleted category {category_id}");
            Outcome::<()>::Ok.into_response()
        }
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting category {category_id}: {error}"
            );
            error.into_response()
        }
    }
}
