//! Rental entity tracking a checked-out movie until it is returned.

use chrono::{DateTime, Utc};

/// Customer fields snapshotted onto a rental at checkout.
#[derive(Debug, Clone)]
pub struct RentalCustomer {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// Movie fields snapshotted onto a rental at checkout.
///
/// The daily rate is frozen here so later price changes do not affect the
/// fee of rentals already out.
#[derive(Debug, Clone)]
pub struct RentalMovie {
    pub id: i64,
    pub title: String,
    pub daily_rental_rate: f64,
}

/// A movie rental.
///
/// `date_returned` and `rental_fee` are both unset while the rental is open
/// and are set exactly once, together, when the return is settled.
#[derive(Debug, Clone)]
pub struct Rental {
    pub id: i64,
    pub customer: RentalCustomer,
    pub movie: RentalMovie,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<f64>,
}

impl Rental {
    /// Returns true if the rental has not been returned yet.
    pub fn is_open(&self) -> bool {
        self.date_returned.is_none()
    }
}

/// Input data for creating a rental at checkout.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub customer: RentalCustomer,
    pub movie: RentalMovie,
    pub date_out: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_rental() -> Rental {
        Rental {
            id: 1,
            customer: RentalCustomer {
                id: 10,
                name: "12345".to_string(),
                phone: "12345".to_string(),
            },
            movie: RentalMovie {
                id: 20,
                title: "12345".to_string(),
                daily_rental_rate: 2.0,
            },
            date_out: Utc::now(),
            date_returned: None,
            rental_fee: None,
        }
    }

    #[test]
    fn test_rental_is_open() {
        let rental = open_rental();
        assert!(rental.is_open());
    }

    #[test]
    fn test_rental_closed_after_return() {
        let mut rental = open_rental();
        rental.date_returned = Some(Utc::now());
        rental.rental_fee = Some(14.0);

        assert!(!rental.is_open());
    }
}
