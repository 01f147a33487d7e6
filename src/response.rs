//! Maps catalog [Outcome]s onto JSON HTTP responses.

use axum::{
    Json,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{Outcome, endpoints::format_endpoint};

/// The JSON body sent with every error status.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// A JSON response with `status` and `{"error": message}` as the body.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

impl<T> IntoResponse for Outcome<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self {
            Outcome::Created(entity) => (StatusCode::CREATED, Json(entity)).into_response(),
            Outcome::Found(entity) => (StatusCode::OK, Json(entity)).into_response(),
            Outcome::Ok => StatusCode::OK.into_response(),
            Outcome::NotFound => error_response(
                StatusCode::NOT_FOUND,
                "the requested resource could not be found",
            ),
            Outcome::ValidationError(reason) => error_response(StatusCode::BAD_REQUEST, &reason),
        }
    }
}

/// A 201 Created response for `entity` with a `Location` header built from
/// `endpoint` and `id`.
pub fn created_response<T>(endpoint: &str, id: i64, entity: T) -> Response
where
    T: Serialize,
{
    (
        StatusCode::CREATED,
        [(LOCATION, format_endpoint(endpoint, id))],
        Json(entity),
    )
        .into_response()
}

#[cfg(test)]
mod outcome_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Outcome,
        response::{ErrorBody, created_response},
        test_utils::{get_header, parse_json},
    };

    #[tokio::test]
    async fn outcomes_map_to_status_codes() {
        let cases = [
            (Outcome::Created(1), StatusCode::CREATED),
            (Outcome::Found(1), StatusCode::OK),
            (Outcome::Ok, StatusCode::OK),
            (Outcome::NotFound, StatusCode::NOT_FOUND),
            (
                Outcome::ValidationError("nope".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (outcome, want_status) in cases {
            let response = outcome.into_response();

            assert_eq!(response.status(), want_status);
        }
    }

    #[tokio::test]
    async fn validation_error_has_reason_in_body() {
        let response = Outcome::<()>::ValidationError("bad title".to_owned()).into_response();

        let body: ErrorBody = parse_json(response).await;

        assert_eq!(
            body,
            ErrorBody {
                error: "bad title".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn created_response_sets_location() {
        let response = created_response("/api/things/{thing_id}", 7, "thing");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(get_header(&response, "location"), "/api/things/7");
        let body: String = parse_json(response).await;
        assert_eq!(body, "thing");
    }
}
