//! Movie entity with rental pricing and stock tracking.

use crate::domain::entities::Genre;

/// A movie available for rental.
///
/// `number_in_stock` counts physical copies currently on the shelf. It is
/// decremented at checkout and incremented by exactly 1 per successful
/// return.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: Genre,
    pub daily_rental_rate: f64,
    pub number_in_stock: i32,
}

impl Movie {
    /// Creates a new Movie instance.
    pub fn new(
        id: i64,
        title: String,
        genre: Genre,
        daily_rental_rate: f64,
        number_in_stock: i32,
    ) -> Self {
        Self {
            id,
            title,
            genre,
            daily_rental_rate,
            number_in_stock,
        }
    }

    /// Returns true if at least one copy is available for checkout.
    pub fn in_stock(&self) -> bool {
        self.number_in_stock > 0
    }
}

/// Input data for creating a movie.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre_id: i64,
    pub daily_rental_rate: f64,
    pub number_in_stock: i32,
}

/// Full replacement of a movie's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateMovie {
    pub title: String,
    pub genre_id: i64,
    pub daily_rental_rate: f64,
    pub number_in_stock: i32,
}
