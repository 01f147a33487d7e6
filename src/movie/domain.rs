//! Core movie domain types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::category::{CategoryId, CategoryName};

/// Catalog identifier for a movie.
pub type MovieId = i64;

/// The categories a movie is filed under, keyed by category ID.
///
/// The names are copies of the category names at the time they were last
/// synchronised. The catalog store rewrites them whenever a category is
/// renamed and drops entries whenever a category is deleted.
pub type MovieCategories = BTreeMap<CategoryId, CategoryName>;

/// The format used for release dates on the wire, e.g. "2008-07-18".
pub const RELEASE_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

time::serde::format_description!(
    release_date_format,
    Date,
    "[year]-[month repr:numerical padding:zero]-[day padding:zero]"
);

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// The ID assigned by the catalog.
    pub id: MovieId,
    /// The movie's title.
    pub title: String,
    /// Who directed the movie.
    pub director: String,
    /// The day the movie was first released.
    #[serde(with = "release_date_format")]
    pub release_date: Date,
    /// The categories the movie is filed under.
    pub categories: MovieCategories,
}

impl Movie {
    /// Combine an ID with validated movie details.
    pub fn new(id: MovieId, details: MovieDetails) -> Self {
        Self {
            id,
            title: details.title,
            director: details.director,
            release_date: details.release_date,
            categories: details.categories,
        }
    }
}

/// Everything about a movie except its ID.
///
/// Used both to create movies and to replace an existing movie wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    /// The movie's title, never empty.
    pub title: String,
    /// Who directed the movie, never empty.
    pub director: String,
    /// The day the movie was first released.
    pub release_date: Date,
    /// The categories the movie is filed under.
    pub categories: MovieCategories,
}

/// Request body for movie creation and editing.
///
/// Fields are kept as raw strings so that missing or malformed values are
/// reported as validation errors by the catalog service instead of being
/// rejected by the JSON extractor.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieFormData {
    /// The title.
    pub title: String,
    /// The director.
    pub director: String,
    /// The release date as `YYYY-MM-DD`.
    pub release_date: String,
    /// Category names keyed by category ID.
    pub categories: BTreeMap<CategoryId, String>,
}
