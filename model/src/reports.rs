//! Row types for the two dashboard reports: monthly revenue and
//! most-rented vehicles. Produced by the backend report endpoints and
//! rendered as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRentalCount {
    pub vehicle_id: i64,
    pub plate: String,
    pub total_rentals: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_rows_deserialize_from_backend_payloads() {
        let revenue: MonthlyRevenue =
            serde_json::from_str(r#"{"year":2024,"month":3,"total":1250000.5}"#).unwrap();
        assert_eq!((revenue.year, revenue.month), (2024, 3));
        assert_eq!(revenue.total, 1250000.5);

        let row: VehicleRentalCount =
            serde_json::from_str(r#"{"vehicle_id":7,"plate":"AB123CD","total_rentals":12}"#)
                .unwrap();
        assert_eq!(row.plate, "AB123CD");
        assert_eq!(row.total_rentals, 12);
    }
}
