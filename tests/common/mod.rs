#![allow(dead_code)]

//! Shared test fixtures: in-memory repositories and state wiring.
//!
//! The fakes implement the domain repository traits over mutex-guarded
//! vectors so handler tests exercise the real router, middleware, and
//! services without a database.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use movie_rental::application::services::{
    AuthService, CustomerService, GenreService, MovieService, RentalService, ReturnService,
};
use movie_rental::domain::entities::{
    Customer, Genre, Movie, NewCustomer, NewGenre, NewMovie, NewRental, Rental, RentalCustomer,
    RentalMovie, UpdateMovie,
};
use movie_rental::domain::repositories::{
    CustomerRepository, GenreRepository, MovieRepository, RentalRepository,
};
use movie_rental::domain::settlement::Settlement;
use movie_rental::error::AppError;
use movie_rental::state::AppState;

pub const TEST_PRIVATE_KEY: &str = "test-signing-secret";

#[derive(Default)]
pub struct InMemoryGenreRepository {
    genres: Mutex<Vec<Genre>>,
    next_id: AtomicI64,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self {
            genres: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, name: &str) -> Genre {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let genre = Genre::new(id, name.to_string());
        self.genres.lock().unwrap().push(genre.clone());
        genre
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn create(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        let mut genres = self.genres.lock().unwrap();
        if genres.iter().any(|g| g.name == new_genre.name) {
            return Err(AppError::conflict(
                "Genre already exists",
                json!({ "name": new_genre.name }),
            ));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let genre = Genre::new(id, new_genre.name);
        genres.push(genre.clone());
        Ok(genre)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        Ok(self.genres.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Genre>, AppError> {
        let mut genres = self.genres.lock().unwrap().clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn update(&self, id: i64, name: String) -> Result<Option<Genre>, AppError> {
        let mut genres = self.genres.lock().unwrap();
        match genres.iter_mut().find(|g| g.id == id) {
            Some(genre) => {
                genre.name = name;
                Ok(Some(genre.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let mut genres = self.genres.lock().unwrap();
        match genres.iter().position(|g| g.id == id) {
            Some(pos) => Ok(Some(genres.remove(pos))),
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Mutex<Vec<Movie>>,
    genres: Mutex<Vec<Genre>>,
    next_id: AtomicI64,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self {
            movies: Mutex::new(Vec::new()),
            genres: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Registers a genre for join lookups in `create` and `update`.
    pub fn register_genre(&self, genre: Genre) {
        self.genres.lock().unwrap().push(genre);
    }

    pub fn seed(&self, title: &str, genre: Genre, rate: f64, stock: i32) -> Movie {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let movie = Movie::new(id, title.to_string(), genre, rate, stock);
        self.movies.lock().unwrap().push(movie.clone());
        movie
    }

    pub fn stock_of(&self, id: i64) -> Option<i32> {
        self.movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.number_in_stock)
    }

    fn genre(&self, genre_id: i64) -> Option<Genre> {
        self.genres
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == genre_id)
            .cloned()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError> {
        let genre = self.genre(new_movie.genre_id).ok_or_else(|| {
            AppError::internal("genre row missing", json!({ "genre_id": new_movie.genre_id }))
        })?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let movie = Movie::new(
            id,
            new_movie.title,
            genre,
            new_movie.daily_rental_rate,
            new_movie.number_in_stock,
        );
        self.movies.lock().unwrap().push(movie.clone());
        Ok(movie)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        Ok(self.movies.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let mut movies = self.movies.lock().unwrap().clone();
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(movies)
    }

    async fn update(&self, id: i64, update: UpdateMovie) -> Result<Option<Movie>, AppError> {
        let genre = self.genre(update.genre_id).ok_or_else(|| {
            AppError::internal("genre row missing", json!({ "genre_id": update.genre_id }))
        })?;
        let mut movies = self.movies.lock().unwrap();
        match movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                movie.title = update.title;
                movie.genre = genre;
                movie.daily_rental_rate = update.daily_rental_rate;
                movie.number_in_stock = update.number_in_stock;
                Ok(Some(movie.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let mut movies = self.movies.lock().unwrap();
        match movies.iter().position(|m| m.id == id) {
            Some(pos) => Ok(Some(movies.remove(pos))),
            None => Ok(None),
        }
    }

    async fn adjust_stock(&self, id: i64, delta: i32) -> Result<bool, AppError> {
        let mut movies = self.movies.lock().unwrap();
        match movies.iter_mut().find(|m| m.id == id) {
            Some(movie) if movie.number_in_stock + delta >= 0 => {
                movie.number_in_stock += delta;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.movies.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
    next_id: AtomicI64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, name: &str, phone: &str, is_gold: bool) -> Customer {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let customer = Customer::new(id, name.to_string(), phone.to_string(), is_gold);
        self.customers.lock().unwrap().push(customer.clone());
        customer
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let customer = Customer::new(
            id,
            new_customer.name,
            new_customer.phone,
            new_customer.is_gold,
        );
        self.customers.lock().unwrap().push(customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let mut customers = self.customers.lock().unwrap().clone();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    async fn update(&self, id: i64, update: NewCustomer) -> Result<Option<Customer>, AppError> {
        let mut customers = self.customers.lock().unwrap();
        match customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.name = update.name;
                customer.phone = update.phone;
                customer.is_gold = update.is_gold;
                Ok(Some(customer.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let mut customers = self.customers.lock().unwrap();
        match customers.iter().position(|c| c.id == id) {
            Some(pos) => Ok(Some(customers.remove(pos))),
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct InMemoryRentalRepository {
    rentals: Mutex<Vec<Rental>>,
    next_id: AtomicI64,
}

impl InMemoryRentalRepository {
    pub fn new() -> Self {
        Self {
            rentals: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds an open rental checked out `days_out` days ago.
    pub fn seed_open(&self, customer: &Customer, movie: &Movie, days_out: i64) -> Rental {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let rental = Rental {
            id,
            customer: RentalCustomer {
                id: customer.id,
                name: customer.name.clone(),
                phone: customer.phone.clone(),
            },
            movie: RentalMovie {
                id: movie.id,
                title: movie.title.clone(),
                daily_rental_rate: movie.daily_rental_rate,
            },
            date_out: Utc::now() - Duration::days(days_out),
            date_returned: None,
            rental_fee: None,
        };
        self.rentals.lock().unwrap().push(rental.clone());
        rental
    }

    /// Seeds a rental that has already been settled.
    pub fn seed_settled(&self, customer: &Customer, movie: &Movie, fee: f64) -> Rental {
        let rental = self.seed_open(customer, movie, 7);
        let mut rentals = self.rentals.lock().unwrap();
        let stored = rentals.iter_mut().find(|r| r.id == rental.id).unwrap();
        stored.date_returned = Some(Utc::now());
        stored.rental_fee = Some(fee);
        stored.clone()
    }

    pub fn get(&self, id: i64) -> Option<Rental> {
        self.rentals.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl RentalRepository for InMemoryRentalRepository {
    async fn create(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let rental = Rental {
            id,
            customer: new_rental.customer,
            movie: new_rental.movie,
            date_out: new_rental.date_out,
            date_returned: None,
            rental_fee: None,
        };
        self.rentals.lock().unwrap().push(rental.clone());
        Ok(rental)
    }

    async fn find_by_customer_and_movie(
        &self,
        customer_id: i64,
        movie_id: i64,
    ) -> Result<Option<Rental>, AppError> {
        let rentals = self.rentals.lock().unwrap();
        Ok(rentals
            .iter()
            .filter(|r| r.customer.id == customer_id && r.movie.id == movie_id)
            .max_by_key(|r| r.date_out)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Rental>, AppError> {
        let mut rentals = self.rentals.lock().unwrap().clone();
        rentals.sort_by(|a, b| b.date_out.cmp(&a.date_out));
        Ok(rentals)
    }

    async fn settle(&self, rental_id: i64, settlement: Settlement) -> Result<Rental, AppError> {
        let mut rentals = self.rentals.lock().unwrap();
        let rental = rentals
            .iter_mut()
            .find(|r| r.id == rental_id && r.date_returned.is_none());
        match rental {
            Some(rental) => {
                rental.date_returned = Some(settlement.date_returned);
                rental.rental_fee = Some(settlement.rental_fee);
                Ok(rental.clone())
            }
            None => Err(AppError::already_processed(
                "Return already processed",
                json!({ "rental_id": rental_id }),
            )),
        }
    }
}

/// Handles to the fake repositories backing a test state, for seeding and
/// post-request assertions.
pub struct TestRepos {
    pub genres: Arc<InMemoryGenreRepository>,
    pub movies: Arc<InMemoryMovieRepository>,
    pub customers: Arc<InMemoryCustomerRepository>,
    pub rentals: Arc<InMemoryRentalRepository>,
}

pub fn create_test_state() -> (AppState, TestRepos) {
    let genres = Arc::new(InMemoryGenreRepository::new());
    let movies = Arc::new(InMemoryMovieRepository::new());
    let customers = Arc::new(InMemoryCustomerRepository::new());
    let rentals = Arc::new(InMemoryRentalRepository::new());

    let state = AppState {
        genre_service: Arc::new(GenreService::new(genres.clone())),
        movie_service: Arc::new(MovieService::new(movies.clone(), genres.clone())),
        customer_service: Arc::new(CustomerService::new(customers.clone())),
        rental_service: Arc::new(RentalService::new(
            rentals.clone(),
            movies.clone(),
            customers.clone(),
        )),
        return_service: Arc::new(ReturnService::new(rentals.clone(), movies.clone())),
        auth_service: Arc::new(AuthService::new(TEST_PRIVATE_KEY, 24)),
    };

    let repos = TestRepos {
        genres,
        movies,
        customers,
        rentals,
    };

    (state, repos)
}

/// Mints a valid non-admin token for the test signing key.
pub fn auth_token() -> String {
    AuthService::new(TEST_PRIVATE_KEY, 24).sign(1, false).unwrap()
}

/// Mints a valid admin token for the test signing key.
pub fn admin_token() -> String {
    AuthService::new(TEST_PRIVATE_KEY, 24).sign(1, true).unwrap()
}

/// Asserts a timestamp is within ten seconds of now.
pub fn assert_recent(ts: DateTime<Utc>) {
    let diff = (Utc::now() - ts).num_seconds().abs();
    assert!(diff < 10, "timestamp not recent: {ts}");
}
