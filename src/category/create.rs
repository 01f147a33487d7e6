//! Category creation endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    CatalogService, Outcome, category::CategoryFormData, endpoints, extract::ApiJson,
    response::created_response,
};

/// Handle category creation. Responds with the new category and its location.
pub async fn create_category_endpoint(
    State(catalog): State<CatalogService>,
    ApiJson(new_category): ApiJson<CategoryFormData>,
) -> Response {
    match catalog.create_category(new_category) {
        Ok(Outcome::Created(category)) => {
            tracing::info!("Created category {} \"{}\"", category.id, category.name);
            created_response(endpoints::CATEGORY, category.id, category)
        }
        Ok(outcome) => outcome.into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a category: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod create_category_endpoint_tests {
    use axum::{extract::State, http::StatusCode};

    use crate::{
        CatalogService,
        category::{Category, CategoryFormData, CategoryName, create_category_endpoint},
        extract::ApiJson, response::ErrorBody,
        test_utils::{assert_content_type, get_header, parse_json},
    };

    #[tokio::test]
    async fn create_category_endpoint_succeeds() {
        let catalog = CatalogService::default();

        let response = create_category_endpoint(
            State(catalog.clone()),
            ApiJson(CategoryFormData {
                name: "Western".to_owned(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            get_header(&response, "location"),
            "/api/movies/categories/1"
        );
        assert_content_type(&response, "application/json");
        let category: Category = parse_json(response).await;
        assert_eq!(
            category,
            Category {
                id: 1,
                name: CategoryName::new_unchecked("Western")
            }
        );
        assert_eq!(catalog.store().list_categories().unwrap(), vec![category]);
    }

    #[tokio::test]
    async fn create_category_endpoint_rejects_empty_name() {
        let catalog = CatalogService::default();

        let response = create_category_endpoint(
            State(catalog.clone()),
            ApiJson(CategoryFormData {
                name: "   ".to_owned(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = parse_json(response).await;
        assert_eq!(body.error, "Category name cannot be empty");
        assert!(catalog.store().list_categories().unwrap().is_empty());
    }
}
