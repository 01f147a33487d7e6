//! The catalog the server starts with unless told to start empty.

use time::{Date, macros::date};

use crate::{
    CatalogStore, Error,
    category::{Category, CategoryName},
    movie::{MovieCategories, MovieDetails},
};

const CATEGORY_NAMES: [&str; 8] = [
    "Action",
    "Comedy",
    "Drama",
    "Adventure",
    "Sci-Fi",
    "Romance",
    "Thriller",
    "Horror",
];

/// Title, director, release date and the (1-based) positions in
/// [CATEGORY_NAMES] of each sample movie's categories.
const MOVIES: [(&str, &str, Date, &[usize]); 8] = [
    (
        "The Dark Knight",
        "Christopher Nolan",
        date!(2008 - 07 - 18),
        &[1, 4, 7],
    ),
    ("Inception", "Christopher Nolan", date!(2010 - 07 - 16), &[1, 5, 7]),
    (
        "The Shawshank Redemption",
        "Frank Darabont",
        date!(1994 - 09 - 23),
        &[3, 6],
    ),
    ("Pulp Fiction", "Quentin Tarantino", date!(1994 - 10 - 14), &[2, 7]),
    ("Forrest Gump", "Robert Zemeckis", date!(1994 - 07 - 06), &[6]),
    ("Avatar", "James Cameron", date!(2009 - 12 - 18), &[4, 5]),
    (
        "The Silence of the Lambs",
        "Jonathan Demme",
        date!(1991 - 02 - 14),
        &[5, 7, 8],
    ),
    ("The Exorcist", "William Friedkin", date!(1973 - 12 - 26), &[8]),
];

/// Add the sample categories and movies to `store`.
///
/// Everything goes through the store's create operations, so on an empty
/// store the categories and movies get the IDs 1 to 8.
pub fn seed_sample_catalog(store: &CatalogStore) -> Result<(), Error> {
    let categories = CATEGORY_NAMES
        .iter()
        .map(|name| store.create_category(CategoryName::new_unchecked(name)))
        .collect::<Result<Vec<Category>, Error>>()?;

    for (title, director, release_date, category_positions) in MOVIES {
        let movie_categories: MovieCategories = category_positions
            .iter()
            .map(|position| &categories[position - 1])
            .map(|category| (category.id, category.name.clone()))
            .collect();

        store.create_movie(MovieDetails {
            title: title.to_owned(),
            director: director.to_owned(),
            release_date,
            categories: movie_categories,
        })?;
    }

    tracing::info!(
        "Seeded the catalog with {} categories and {} movies",
        CATEGORY_NAMES.len(),
        MOVIES.len()
    );

    Ok(())
}
