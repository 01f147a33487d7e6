//! The catalog service validates requests before handing them to the
//! [CatalogStore] and reports the result as an [Outcome].
//!
//! Missing entities and invalid input are expected results and are returned
//! as outcomes. Only internal failures (e.g., a poisoned lock) are returned as
//! [Error]s.

use time::Date;

use crate::{
    Error,
    category::{Category, CategoryFormData, CategoryId, CategoryName},
    movie::{Movie, MovieCategories, MovieDetails, MovieFormData, MovieId, RELEASE_DATE_FORMAT},
    store::CatalogStore,
};

/// The transport-neutral result of a catalog operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// A new entity was added to the catalog.
    Created(T),
    /// The requested entity (or entities) exist.
    Found(T),
    /// The mutation was applied.
    Ok,
    /// The entity the operation referred to does not exist.
    NotFound,
    /// The request was malformed. Holds a message for the client.
    ValidationError(String),
}

impl<T> Outcome<T> {
    /// Turn a store result into an outcome, using `on_success` to wrap a successful value.
    ///
    /// # Errors
    /// Returns the original error if it is neither a not found error nor a validation error.
    fn from_result<U>(
        result: Result<U, Error>,
        on_success: impl FnOnce(U) -> Outcome<T>,
    ) -> Result<Outcome<T>, Error> {
        match result {
            Ok(value) => Ok(on_success(value)),
            Err(error) if error.is_not_found() => Ok(Outcome::NotFound),
            Err(error) if error.is_validation() => Ok(Outcome::ValidationError(error.to_string())),
            Err(error) => Err(error),
        }
    }
}

/// Facade over the [CatalogStore] for the HTTP routes.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    store: CatalogStore,
}

impl CatalogService {
    /// Create a service backed by `store`.
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Validate `form` and add a new movie to the catalog.
    ///
    /// A new movie must list at least one category.
    pub fn create_movie(&self, form: MovieFormData) -> Result<Outcome<Movie>, Error> {
        let result = parse_movie_details(form)
            .and_then(|details| {
                if details.categories.is_empty() {
                    Err(Error::NoCategories)
                } else {
                    Ok(details)
                }
            })
            .and_then(|details| self.store.create_movie(details));

        Outcome::from_result(result, Outcome::Created)
    }

    /// Get the movie with `movie_id`.
    pub fn get_movie(&self, movie_id: MovieId) -> Result<Outcome<Movie>, Error> {
        Outcome::from_result(self.store.get_movie(movie_id), Outcome::Found)
    }

    /// Get every movie in the catalog.
    pub fn list_movies(&self) -> Result<Outcome<Vec<Movie>>, Error> {
        Outcome::from_result(self.store.list_movies(), Outcome::Found)
    }

    /// Get the movies that list a category named exactly `category_name`.
    ///
    /// An empty result is reported as [Outcome::NotFound].
    pub fn find_movies_by_category_name(
        &self,
        category_name: &str,
    ) -> Result<Outcome<Vec<Movie>>, Error> {
        if category_name.trim().is_empty() {
            return Ok(Outcome::ValidationError(
                Error::EmptyCategoryName.to_string(),
            ));
        }

        Outcome::from_result(
            self.store.find_movies_by_category_name(category_name),
            |movies| {
                if movies.is_empty() {
                    Outcome::NotFound
                } else {
                    Outcome::Found(movies)
                }
            },
        )
    }

    /// Validate `form` and replace the movie with `movie_id`.
    ///
    /// Unlike [CatalogService::create_movie], the category list may be empty.
    pub fn update_movie(
        &self,
        movie_id: MovieId,
        form: MovieFormData,
    ) -> Result<Outcome<()>, Error> {
        let result = parse_movie_details(form)
            .and_then(|details| self.store.update_movie(movie_id, details));

        Outcome::from_result(result, |_| Outcome::Ok)
    }

    /// Delete the movie with `movie_id`.
    pub fn delete_movie(&self, movie_id: MovieId) -> Result<Outcome<()>, Error> {
        Outcome::from_result(self.store.delete_movie(movie_id), |_| Outcome::Ok)
    }

    /// Validate `form` and add a new category to the catalog.
    pub fn create_category(&self, form: CategoryFormData) -> Result<Outcome<Category>, Error> {
        let result =
            CategoryName::new(&form.name).and_then(|name| self.store.create_category(name));

        Outcome::from_result(result, Outcome::Created)
    }

    /// Get the category with `category_id`.
    pub fn get_category(&self, category_id: CategoryId) -> Result<Outcome<Category>, Error> {
        Outcome::from_result(self.store.get_category(category_id), Outcome::Found)
    }

    /// Get every category in the catalog.
    pub fn list_categories(&self) -> Result<Outcome<Vec<Category>>, Error> {
        Outcome::from_result(self.store.list_categories(), Outcome::Found)
    }

    /// Validate `form` and rename the category with `category_id` everywhere.
    pub fn update_category(
        &self,
        category_id: CategoryId,
        form: CategoryFormData,
    ) -> Result<Outcome<()>, Error> {
        let result = CategoryName::new(&form.name)
            .and_then(|name| self.store.update_category(category_id, name));

        Outcome::from_result(result, |_| Outcome::Ok)
    }

    /// Delete the category with `category_id` and remove it from every movie.
    pub fn delete_category(&self, category_id: CategoryId) -> Result<Outcome<()>, Error> {
        Outcome::from_result(self.store.delete_category(category_id), |_| Outcome::Ok)
    }
}

fn parse_movie_details(form: MovieFormData) -> Result<MovieDetails, Error> {
    let title = required_text(&form.title, Error::EmptyTitle)?;
    let director = required_text(&form.director, Error::EmptyDirector)?;
    let release_date = parse_release_date(&form.release_date)?;
    let categories = form
        .categories
        .iter()
        .map(|(id, name)| CategoryName::new(name).map(|name| (*id, name)))
        .collect::<Result<MovieCategories, Error>>()?;

    Ok(MovieDetails {
        title,
        director,
        release_date,
        categories,
    })
}

fn required_text(text: &str, error: Error) -> Result<String, Error> {
    let text = text.trim();

    if text.is_empty() {
        Err(error)
    } else {
        Ok(text.to_owned())
    }
}

fn parse_release_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), RELEASE_DATE_FORMAT)
        .map_err(|_| Error::InvalidReleaseDate(text.to_owned()))
}
