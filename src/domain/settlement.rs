//! Return settlement computation.
//!
//! Closing an open rental is a pure calculation: given the rental and the
//! current time, produce the return timestamp and the fee. Persistence of
//! the result and the stock increment are orchestrated by
//! [`crate::application::services::ReturnService`].
//!
//! # Billing Policy
//!
//! The fee bills whole elapsed days only, rounded down: a rental returned
//! within the first 24 hours is free, and a rental out for exactly 7 days
//! bills 7 days. Clock skew that puts `now` before `date_out` clamps to
//! zero days rather than producing a negative fee.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::Rental;
use crate::error::AppError;

/// Outcome of settling a return: the fields to write onto the rental.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub date_returned: DateTime<Utc>,
    pub rental_fee: f64,
}

/// Computes the settlement for returning `rental` at time `now`.
///
/// # Errors
///
/// Returns [`AppError::AlreadyProcessed`] if the rental was already
/// returned.
pub fn settle(rental: &Rental, now: DateTime<Utc>) -> Result<Settlement, AppError> {
    if !rental.is_open() {
        return Err(AppError::already_processed(
            "Return already processed",
            json!({ "rental_id": rental.id }),
        ));
    }

    let days = billable_days(rental.date_out, now);
    let rental_fee = days as f64 * rental.movie.daily_rental_rate;

    Ok(Settlement {
        date_returned: now,
        rental_fee,
    })
}

/// Whole elapsed days between checkout and return, rounded down, never
/// negative.
fn billable_days(date_out: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - date_out).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RentalCustomer, RentalMovie};
    use chrono::Duration;

    fn rental_out_since(date_out: DateTime<Utc>, rate: f64) -> Rental {
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
                daily_rental_rate: rate,
            },
            date_out,
            date_returned: None,
            rental_fee: None,
        }
    }

    #[test]
    fn test_fee_is_days_times_rate() {
        let now = Utc::now();
        let rental = rental_out_since(now - Duration::days(7), 2.0);

        let settlement = settle(&rental, now).unwrap();

        assert_eq!(settlement.rental_fee, 14.0);
        assert_eq!(settlement.date_returned, now);
    }

    #[test]
    fn test_partial_day_is_not_billed() {
        let now = Utc::now();
        let rental = rental_out_since(now - Duration::hours(30), 3.0);

        let settlement = settle(&rental, now).unwrap();

        // 30 hours is one whole day plus a partial day.
        assert_eq!(settlement.rental_fee, 3.0);
    }

    #[test]
    fn test_same_day_return_is_free() {
        let now = Utc::now();
        let rental = rental_out_since(now - Duration::hours(5), 2.0);

        let settlement = settle(&rental, now).unwrap();

        assert_eq!(settlement.rental_fee, 0.0);
    }

    #[test]
    fn test_clock_skew_clamps_to_zero() {
        let now = Utc::now();
        let rental = rental_out_since(now + Duration::hours(1), 2.0);

        let settlement = settle(&rental, now).unwrap();

        assert_eq!(settlement.rental_fee, 0.0);
    }

    #[test]
    fn test_already_processed_rejected() {
        let now = Utc::now();
        let mut rental = rental_out_since(now - Duration::days(2), 2.0);
        rental.date_returned = Some(now - Duration::days(1));
        rental.rental_fee = Some(2.0);

        let result = settle(&rental, now);

        assert!(matches!(
            result.unwrap_err(),
            AppError::AlreadyProcessed { .. }
        ));
    }

    #[test]
    fn test_zero_rate_yields_zero_fee() {
        let now = Utc::now();
        let rental = rental_out_since(now - Duration::days(10), 0.0);

        let settlement = settle(&rental, now).unwrap();

        assert_eq!(settlement.rental_fee, 0.0);
    }
}
