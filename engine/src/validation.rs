//! Checks the form layer runs before submitting a record.

use model::entities::{Fine, Rental, Vehicle};

use crate::error::ValidationError;
use crate::plate;

pub fn validate_vehicle(vehicle: &Vehicle) -> Result<(), ValidationError> {
    let result = plate::validate_plate(&vehicle.plate);
    if !result.is_valid {
        return Err(ValidationError::Plate(result.message));
    }
    Ok(())
}

pub fn validate_rental(rental: &Rental) -> Result<(), ValidationError> {
    // Open-ended rentals (no end date yet) are fine.
    if let Some(end) = rental.end_date {
        if end < rental.start_date {
            return Err(ValidationError::EndBeforeStart {
                start: rental.start_date,
                end,
            });
        }
    }
    Ok(())
}

pub fn validate_fine(fine: &Fine) -> Result<(), ValidationError> {
    if fine.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if fine.amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(fine.amount));
    }
    Ok(())
}
