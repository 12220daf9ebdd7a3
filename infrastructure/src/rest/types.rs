//! Booking REST payload types
//!
//! Field names follow the server's JSON: camelCase for booking resources,
//! snake_case for the daily stats payload.

use serde::{Deserialize, Serialize};

/// A booking as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub pet_name: Option<String>,
    pub service_type: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    pub staff: String,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Fields for creating or updating a booking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub pet_name: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub staff: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub base_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Aggregates for one day of bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub total_bookings: u32,
    pub confirmed_bookings: u32,
    pub pending_bookings: u32,
    pub completed_bookings: u32,
    pub total_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_deserializes_from_server_json() {
        let json = r#"{
            "id": 7,
            "customerName": "Kim",
            "customerPhone": "010-1234-5678",
            "petName": "Choco",
            "serviceType": "Grooming",
            "date": "2025-01-13",
            "time": "14:00",
            "duration": 60,
            "price": 45000.0,
            "staff": "Lee",
            "status": "confirmed"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, 7);
        assert_eq!(booking.customer_name, "Kim");
        assert_eq!(booking.pet_name.as_deref(), Some("Choco"));
        assert!(booking.notes.is_none());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = BookingDraft {
            customer_name: "Kim".into(),
            customer_phone: "010".into(),
            pet_name: "Choco".into(),
            service_type: "Bath".into(),
            date: "2025-01-14".into(),
            time: "10:00".into(),
            staff: "Lee".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["customerName"], "Kim");
        assert_eq!(value["serviceType"], "Bath");
        // Unset optionals stay off the wire
        assert!(value.get("customerEmail").is_none());
    }

    #[test]
    fn test_daily_stats_snake_case() {
        let json = r#"{
            "date": "2025-01-13",
            "total_bookings": 5,
            "confirmed_bookings": 3,
            "pending_bookings": 1,
            "completed_bookings": 1,
            "total_revenue": 120000.0
        }"#;
        let stats: DailyStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_bookings, 5);
        assert_eq!(stats.total_revenue, 120000.0);
    }
}
