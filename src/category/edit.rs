//! Category update endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    CatalogService, Outcome,
    category::{CategoryFormData, CategoryId},
    extract::{ApiJson, ApiPath},
};

/// Handle a category rename. Every movie in the category picks up the new name.
pub async fn update_category_endpoint(
    ApiPath(category_id): ApiPath<CategoryId>,
    State(catalog): State<CatalogService>,
    ApiJson(form_data): ApiJson<CategoryFormData>,
) -> Response {
    match catalog.update_category(category_id, form_data) {
        Ok(Outcome::Ok) => {
            tracing::info!("Renamed category {category_id}");
            Outcome::<()>::Ok.into_response()
        }
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating category {category_id}: {error}"
            );
            error.into_response()
        }
    }
}
