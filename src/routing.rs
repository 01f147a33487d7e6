//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
        get_category_endpoint, update_category_endpoint,
    },
    endpoints,
    movie::{
        create_movie_endpoint, delete_movie_endpoint, get_movie_endpoint, get_movies_endpoint,
        search_movies_endpoint, update_movie_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let movie_routes = Router::new()
        .route(
            endpoints::MOVIES,
            get(get_movies_endpoint).post(create_movie_endpoint),
        )
        .route(endpoints::MOVIES_SEARCH, get(search_movies_endpoint))
        .route(
            endpoints::MOVIE,
            get(get_movie_endpoint)
                .put(update_movie_endpoint)
                .delete(delete_movie_endpoint),
        );

    let category_routes = Router::new()
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint)
                .put(update_category_endpoint)
                .delete(delete_category_endpoint),
        );

    movie_routes
        .merge(category_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState, CatalogStore, Category, Movie, build_router, endpoints,
        endpoints::format_endpoint, response::ErrorBody, seed_sample_catalog,
    };

    fn get_test_server(seeded: bool) -> TestServer {
        let store = CatalogStore::new();
        if seeded {
            seed_sample_catalog(&store).expect("Could not seed sample catalog");
        }
        let app = build_router(AppState::new(store));

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn create_then_get_movie_round_trips() {
        let server = get_test_server(false);

        let response = server
            .post(endpoints::MOVIES)
            .json(&json!({
                "title": "X",
                "director": "Y",
                "releaseDate": "2020-01-01",
                "categories": {"1": "Action"}
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        response.assert_header("location", "/api/movies/1");
        let created = response.json::<Movie>();

        let response = server.get(&format_endpoint(endpoints::MOVIE, 1)).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 1,
            "title": "X",
            "director": "Y",
            "releaseDate": "2020-01-01",
            "categories": {"1": "Action"}
        }));
        assert_eq!(response.json::<Movie>(), created);
    }

    #[tokio::test]
    async fn create_movie_with_missing_fields_returns_bad_request() {
        let server = get_test_server(false);

        let response = server
            .post(endpoints::MOVIES)
            .json(&json!({"director": "Y"}))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<ErrorBody>().error,
            "Movie title cannot be empty"
        );
    }

    #[tokio::test]
    async fn search_uses_category_name_query() {
        let server = get_test_server(true);

        let response = server
            .get(endpoints::MOVIES_SEARCH)
            .add_query_param("categoryName", "Romance")
            .await;

        response.assert_status_ok();
        let titles: Vec<_> = response
            .json::<Vec<Movie>>()
            .into_iter()
            .map(|movie| movie.title)
            .collect();
        assert_eq!(titles, vec!["The Shawshank Redemption", "Forrest Gump"]);
    }

    #[tokio::test]
    async fn search_without_matches_returns_not_found() {
        let server = get_test_server(true);

        server
            .get(endpoints::MOVIES_SEARCH)
            .add_query_param("categoryName", "Musical")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn renaming_category_updates_movies() {
        let server = get_test_server(true);

        server
            .put(&format_endpoint(endpoints::CATEGORY, 5))
            .json(&json!({"categoryName": "Science Fiction"}))
            .await
            .assert_status_ok();

        let category = server
            .get(&format_endpoint(endpoints::CATEGORY, 5))
            .await
            .json::<Category>();
        assert_eq!(category.name.as_ref(), "Science Fiction");

        let renamed = server
            .get(endpoints::MOVIES_SEARCH)
            .add_query_param("categoryName", "Science Fiction")
            .await
            .json::<Vec<Movie>>();
        let ids: Vec<_> = renamed.iter().map(|movie| movie.id).collect();
        assert_eq!(ids, vec![2, 6, 7]);

        server
            .get(endpoints::MOVIES_SEARCH)
            .add_query_param("categoryName", "Sci-Fi")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn deleting_category_removes_it_from_movies() {
        let server = get_test_server(true);

        server
            .delete(&format_endpoint(endpoints::CATEGORY, 7))
            .await
            .assert_status_ok();

        server
            .get(&format_endpoint(endpoints::CATEGORY, 7))
            .await
            .assert_status_not_found();
        let movies = server.get(endpoints::MOVIES).await.json::<Vec<Movie>>();
        assert_eq!(movies.len(), 8);
        assert!(
            movies
                .iter()
                .all(|movie| !movie.categories.contains_key(&7))
        );
    }

    #[tokio::test]
    async fn category_routes_are_not_shadowed_by_movie_ids() {
        let server = get_test_server(true);

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Category>>().len(), 8);
    }

    #[tokio::test]
    async fn create_category_returns_location() {
        let server = get_test_server(true);

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"categoryName": "Western"}))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        response.assert_header("location", "/api/movies/categories/9");
    }

    #[tokio::test]
    async fn update_and_delete_missing_movie_return_not_found() {
        let server = get_test_server(false);

        server
            .put(&format_endpoint(endpoints::MOVIE, 42))
            .json(&json!({
                "title": "X",
                "director": "Y",
                "releaseDate": "2020-01-01",
                "categories": {}
            }))
            .await
            .assert_status_not_found();
        server
            .delete(&format_endpoint(endpoints::MOVIE, 42))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn malformed_movie_body_returns_json_bad_request() {
        let server = get_test_server(false);

        let response = server
            .post(endpoints::MOVIES)
            .json(&json!({
                "title": "X",
                "director": "Y",
                "releaseDate": 20200101,
                "categories": {"1": "Action"}
            }))
            .await;

        response.assert_status_bad_request();
        assert!(!response.json::<ErrorBody>().error.is_empty());
        server
            .get(endpoints::MOVIES)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn category_body_that_is_not_json_returns_json_bad_request() {
        let server = get_test_server(false);

        let response = server
            .post(endpoints::CATEGORIES)
            .bytes("not json".into())
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        assert!(!response.json::<ErrorBody>().error.is_empty());
    }

    #[tokio::test]
    async fn non_integer_ids_return_json_not_found() {
        let server = get_test_server(true);

        for path in ["/api/movies/abc", "/api/movies/categories/abc"] {
            let response = server.get(path).await;

            response.assert_status_not_found();
            assert_eq!(
                response.json::<ErrorBody>().error,
                "the requested resource could not be found"
            );
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_json_not_found() {
        let server = get_test_server(false);

        let response = server.get("/api/directors").await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<ErrorBody>().error,
            "no route matches the requested path"
        );
    }
}
