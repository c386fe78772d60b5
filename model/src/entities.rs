use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub license_number: String,
    pub license_category: String,
    pub license_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: i64,
    pub brand_id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub model_id: i64,
    pub year: i32,
    pub kind: String,
    pub plate: String,
    pub daily_cost: f64,
    pub status: VehicleStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Active,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub id: i64,
    pub client_id: i64,
    pub vehicle_id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_cost: Option<f64>,
    pub status: RentalStatus,
}

impl Rental {
    /// Only active rentals can be finalized.
    pub fn can_finalize(&self) -> bool {
        self.status == RentalStatus::Active
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Finished,
    Expired,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub client_id: i64,
    pub vehicle_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Only confirmed reservations can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fine {
    pub id: i64,
    pub rental_id: i64,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rental(status: RentalStatus) -> Rental {
        Rental {
            id: 1,
            client_id: 1,
            vehicle_id: 1,
            employee_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
            total_cost: None,
            status,
        }
    }

    #[test]
    fn only_active_rentals_can_finalize() {
        assert!(rental(RentalStatus::Active).can_finalize());
        assert!(!rental(RentalStatus::Finished).can_finalize());
        assert!(!rental(RentalStatus::Cancelled).can_finalize());
    }

    #[test]
    fn only_confirmed_reservations_can_cancel() {
        let mut reservation = Reservation {
            id: 1,
            client_id: 1,
            vehicle_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            status: ReservationStatus::Confirmed,
        };
        assert!(reservation.can_cancel());
        for status in [
            ReservationStatus::Finished,
            ReservationStatus::Expired,
            ReservationStatus::Cancelled,
        ] {
            reservation.status = status;
            assert!(!reservation.can_cancel());
        }
    }

    #[test]
    fn vehicle_status_serializes_as_upper_snake() {
        let json = serde_json::to_string(&VehicleStatus::Available).unwrap();
        assert_eq!(json, "\"AVAILABLE\"");
    }
}
