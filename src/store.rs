//! The in-memory catalog of movies and categories.
//!
//! Movies cache the names of their categories. Every category mutation goes
//! through [CatalogStore] so that the cached names are rewritten (on rename)
//! or dropped (on delete) under the same write guard as the category itself.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
    movie::{Movie, MovieDetails, MovieId},
};

/// Both collections, guarded together so cascades are atomic.
#[derive(Debug, Default)]
struct Catalog {
    movies: BTreeMap<MovieId, Movie>,
    categories: BTreeMap<CategoryId, Category>,
    /// The highest movie ID ever assigned, so deleted IDs are never handed out again.
    last_movie_id: MovieId,
    /// The highest category ID ever assigned.
    last_category_id: CategoryId,
}

/// Creates, retrieves, updates and deletes movies and categories.
///
/// Cloning the store is cheap and clones share the same catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, Error> {
        self.catalog
            .read()
            .inspect_err(|error| tracing::error!("could not acquire catalog read lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, Error> {
        self.catalog
            .write()
            .inspect_err(|error| tracing::error!("could not acquire catalog write lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }

    /// Create a movie and return it with its generated ID.
    ///
    /// The category IDs in `details.categories` are not checked against the
    /// categories in the catalog.
    pub fn create_movie(&self, details: MovieDetails) -> Result<Movie, Error> {
        let mut catalog = self.write()?;

        let id = next_id(&catalog.movies, catalog.last_movie_id);
        let movie = Movie::new(id, details);

        catalog.last_movie_id = id;
        catalog.movies.insert(id, movie.clone());
        tracing::debug!("created movie {id}");

        Ok(movie)
    }

    /// Create a category and return it with its generated ID.
    pub fn create_category(&self, name: CategoryName) -> Result<Category, Error> {
        let mut catalog = self.write()?;

        let id = next_id(&catalog.categories, catalog.last_category_id);
        let category = Category { id, name };

        catalog.last_category_id = id;
        catalog.categories.insert(id, category.clone());
        tracing::debug!("created category {id}");

        Ok(category)
    }

    /// Retrieve a single movie by ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no movie with `movie_id`.
    pub fn get_movie(&self, movie_id: MovieId) -> Result<Movie, Error> {
        self.read()?
            .movies
            .get(&movie_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Retrieve a single category by ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    pub fn get_category(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.read()?
            .categories
            .get(&category_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Retrieve all movies ordered by ID.
    pub fn list_movies(&self) -> Result<Vec<Movie>, Error> {
        Ok(self.read()?.movies.values().cloned().collect())
    }

    /// Retrieve all categories ordered by ID.
    pub fn list_categories(&self) -> Result<Vec<Category>, Error> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    /// Retrieve the movies that list a category called exactly `name`.
    ///
    /// This matches against the names cached in each movie, not the
    /// categories in the catalog. Returns an empty list if nothing matches.
    pub fn find_movies_by_category_name(&self, name: &str) -> Result<Vec<Movie>, Error> {
        Ok(self
            .read()?
            .movies
            .values()
            .filter(|movie| {
                movie
                    .categories
                    .values()
                    .any(|category_name| category_name.as_ref() == name)
            })
            .cloned()
            .collect())
    }

    /// Replace every field of a movie except its ID.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingMovie] if there is no movie with `movie_id`.
    pub fn update_movie(&self, movie_id: MovieId, details: MovieDetails) -> Result<(), Error> {
        let mut catalog = self.write()?;

        let movie = catalog
            .movies
            .get_mut(&movie_id)
            .ok_or(Error::UpdateMissingMovie)?;
        *movie = Movie::new(movie_id, details);
        tracing::debug!("updated movie {movie_id}");

        Ok(())
    }

    /// Rename a category and every cached copy of its name.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingCategory] if there is no category with `category_id`.
    pub fn update_category(
        &self,
        category_id: CategoryId,
        new_name: CategoryName,
    ) -> Result<(), Error> {
        let mut guard = self.write()?;
        let catalog = &mut *guard;

        let category = catalog
            .categories
            .get_mut(&category_id)
            .ok_or(Error::UpdateMissingCategory)?;
        category.name = new_name.clone();

        let mut renamed_count = 0;
        for movie in catalog.movies.values_mut() {
            if let Some(cached_name) = movie.categories.get_mut(&category_id) {
                *cached_name = new_name.clone();
                renamed_count += 1;
            }
        }

        tracing::debug!(
            "renamed category {category_id} to \"{new_name}\" in {renamed_count} movie(s)"
        );

        Ok(())
    }

    /// Delete a movie by ID.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingMovie] if there is no movie with `movie_id`.
    pub fn delete_movie(&self, movie_id: MovieId) -> Result<(), Error> {
        self.write()?
            .movies
            .remove(&movie_id)
            .ok_or(Error::DeleteMissingMovie)?;
        tracing::debug!("deleted movie {movie_id}");

        Ok(())
    }

    /// Delete a category and remove it from every movie that lists it.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingCategory] if there is no category with `category_id`.
    pub fn delete_category(&self, category_id: CategoryId) -> Result<(), Error> {
        let mut catalog = self.write()?;

        catalog
            .categories
            .remove(&category_id)
            .ok_or(Error::DeleteMissingCategory)?;

        let removed_count = catalog
            .movies
            .values_mut()
            .filter_map(|movie| movie.categories.remove(&category_id))
            .count();

        tracing::debug!("deleted category {category_id} from {removed_count} movie(s)");

        Ok(())
    }
}

/// One past the largest ID the collection has ever held, or 1 for a collection
/// that has always been empty.
fn next_id<T>(collection: &BTreeMap<i64, T>, last_assigned: i64) -> i64 {
    let current_max = collection.last_key_value().map_or(0, |(id, _)| *id);

    current_max.max(last_assigned) + 1
}
