//! Rental checkout service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewRental, Rental, RentalCustomer, RentalMovie};
use crate::domain::repositories::{CustomerRepository, MovieRepository, RentalRepository};
use crate::error::AppError;

/// Service for checking out movies.
///
/// Checkout snapshots the customer and movie onto the rental row and
/// decrements the movie's stock. The two writes are sequenced without a
/// transaction; if the decrement fails after the rental is created, the
/// discrepancy is logged and left for reconciliation.
pub struct RentalService {
    rentals: Arc<dyn RentalRepository>,
    movies: Arc<dyn MovieRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl RentalService {
    /// Creates a new rental service.
    pub fn new(
        rentals: Arc<dyn RentalRepository>,
        movies: Arc<dyn MovieRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            rentals,
            movies,
            customers,
        }
    }

    /// Lists all rentals, most recent first.
    pub async fn list(&self) -> Result<Vec<Rental>, AppError> {
        self.rentals.list().await
    }

    /// Checks out a movie for a customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the customer or movie does not
    /// exist, or if the movie is out of stock.
    pub async fn checkout(&self, customer_id: i64, movie_id: i64) -> Result<Rental, AppError> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request("Invalid customer", json!({ "customer_id": customer_id }))
            })?;

        let movie = self.movies.find_by_id(movie_id).await?.ok_or_else(|| {
            AppError::bad_request("Invalid movie", json!({ "movie_id": movie_id }))
        })?;

        if !movie.in_stock() {
            return Err(AppError::bad_request(
                "Movie not in stock",
                json!({ "movie_id": movie_id }),
            ));
        }

        let rental = self
            .rentals
            .create(NewRental {
                customer: RentalCustomer {
                    id: customer.id,
                    name: customer.name,
                    phone: customer.phone,
                },
                movie: RentalMovie {
                    id: movie.id,
                    title: movie.title,
                    daily_rental_rate: movie.daily_rental_rate,
                },
                date_out: Utc::now(),
            })
            .await?;

        let adjusted = self.movies.adjust_stock(movie_id, -1).await?;
        if !adjusted {
            tracing::warn!(
                movie_id,
                rental_id = rental.id,
                "stock decrement lost a race after checkout"
            );
        }

        Ok(rental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Customer, Genre, Movie};
    use crate::domain::repositories::{
        MockCustomerRepository, MockMovieRepository, MockRentalRepository,
    };

    fn test_customer() -> Customer {
        Customer::new(10, "12345".to_string(), "12345".to_string(), false)
    }

    fn test_movie(stock: i32) -> Movie {
        Movie::new(
            20,
            "12345".to_string(),
            Genre::new(1, "12345".to_string()),
            2.0,
            stock,
        )
    }

    fn rental_from_new(new_rental: NewRental) -> Rental {
        Rental {
            id: 1,
            customer: new_rental.customer,
            movie: new_rental.movie,
            date_out: new_rental.date_out,
            date_returned: None,
            rental_fee: None,
        }
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let mut mock_rentals = MockRentalRepository::new();
        let mut mock_movies = MockMovieRepository::new();
        let mut mock_customers = MockCustomerRepository::new();

        mock_customers
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_customer())));
        mock_movies
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_movie(5))));
        mock_rentals
            .expect_create()
            .times(1)
            .returning(|new_rental| Ok(rental_from_new(new_rental)));
        mock_movies
            .expect_adjust_stock()
            .withf(|id, delta| *id == 20 && *delta == -1)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = RentalService::new(
            Arc::new(mock_rentals),
            Arc::new(mock_movies),
            Arc::new(mock_customers),
        );

        let rental = service.checkout(10, 20).await.unwrap();

        assert_eq!(rental.customer.id, 10);
        assert_eq!(rental.movie.id, 20);
        assert!(rental.is_open());
    }

    #[tokio::test]
    async fn test_checkout_unknown_customer() {
        let mock_rentals = MockRentalRepository::new();
        let mock_movies = MockMovieRepository::new();
        let mut mock_customers = MockCustomerRepository::new();

        mock_customers.expect_find_by_id().returning(|_| Ok(None));

        let service = RentalService::new(
            Arc::new(mock_rentals),
            Arc::new(mock_movies),
            Arc::new(mock_customers),
        );

        let result = service.checkout(99, 20).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_checkout_out_of_stock() {
        let mut mock_rentals = MockRentalRepository::new();
        let mut mock_movies = MockMovieRepository::new();
        let mut mock_customers = MockCustomerRepository::new();

        mock_customers
            .expect_find_by_id()
            .returning(|_| Ok(Some(test_customer())));
        mock_movies
            .expect_find_by_id()
            .returning(|_| Ok(Some(test_movie(0))));
        mock_rentals.expect_create().times(0);
        mock_movies.expect_adjust_stock().times(0);

        let service = RentalService::new(
            Arc::new(mock_rentals),
            Arc::new(mock_movies),
            Arc::new(mock_customers),
        );

        let result = service.checkout(10, 20).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
