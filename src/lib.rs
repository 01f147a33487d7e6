//! Movie Catalog is a small web service for keeping track of movies and the
//! categories they belong to.
//!
//! This library provides an in-memory [CatalogStore] that keeps the category
//! names cached inside each movie consistent with the categories themselves,
//! a [CatalogService] facade that validates requests and reports
//! [Outcome]s, and a JSON REST API built on top of both.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod endpoints;
mod extract;
mod logging;
mod movie;
mod not_found;
mod response;
mod routing;
mod sample_catalog;
mod service;
mod store;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryFormData, CategoryId, CategoryName};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use movie::{Movie, MovieCategories, MovieDetails, MovieFormData, MovieId};
pub use routing::build_router;
pub use sample_catalog::seed_sample_catalog;
pub use service::{CatalogService, Outcome};
pub use store::CatalogStore;

use crate::response::error_response;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty (or whitespace only) string was used as a movie title.
    #[error("Movie title cannot be empty")]
    EmptyTitle,

    /// An empty (or whitespace only) string was used as a movie director.
    #[error("Movie director cannot be empty")]
    EmptyDirector,

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A new movie was submitted without any categories.
    #[error("A movie must have at least one category")]
    NoCategories,

    /// The release date could not be parsed as a `YYYY-MM-DD` date.
    ///
    /// Callers should pass in the date string that caused the error.
    #[error("\"{0}\" is not a valid release date, expected a date like 2020-01-31")]
    InvalidReleaseDate(String),

    /// The request body or query string could not be read as the expected type.
    ///
    /// Holds the reason the request was rejected.
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a movie that does not exist
    #[error("tried to update a movie that is not in the catalog")]
    UpdateMissingMovie,

    /// Tried to delete a movie that does not exist
    #[error("tried to delete a movie that is not in the catalog")]
    DeleteMissingMovie,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the catalog")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the catalog")]
    DeleteMissingCategory,

    /// A request or response body could not be read for logging.
    #[error("could not read the HTTP body")]
    UnreadableBody,

    /// Could not acquire the catalog lock.
    ///
    /// This only happens if a thread panicked while holding the lock, so the
    /// catalog may be in an inconsistent state.
    #[error("could not acquire the catalog lock")]
    StoreLockError,
}

impl Error {
    /// Whether the error means the entity an operation referred to does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound
                | Error::UpdateMissingMovie
                | Error::DeleteMissingMovie
                | Error::UpdateMissingCategory
                | Error::DeleteMissingCategory
        )
    }

    /// Whether the error was caused by malformed or missing input from the client.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyTitle
                | Error::EmptyDirector
                | Error::EmptyCategoryName
                | Error::NoCategories
                | Error::InvalidReleaseDate(_)
                | Error::BadRequest(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            error if error.is_not_found() => {
                error_response(StatusCode::NOT_FOUND, &error.to_string())
            }
            error if error.is_validation() => {
                error_response(StatusCode::BAD_REQUEST, &error.to_string())
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details.",
                )
            }
        }
    }
}
