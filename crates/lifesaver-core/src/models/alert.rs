//! SOS alert models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored SOS location alert. Alerts are append/list only; no update or
/// delete is exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SosAlert {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Moment the alert was raised
    pub timestamp: DateTime<Utc>,
    /// Always "active"; no lifecycle transitions are exposed
    pub status: String,
}

/// Client-supplied fields for raising an alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SosAlertCreate {
    pub latitude: f64,
    pub longitude: f64,
}

impl SosAlert {
    /// Build a stored alert from client input, stamping id and timestamp.
    pub fn new(input: SosAlertCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            latitude: input.latitude,
            longitude: input.longitude,
            timestamp: Utc::now(),
            status: "active".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alert() {
        let alert = SosAlert::new(SosAlertCreate {
            latitude: 40.7128,
            longitude: -74.0060,
        });
        assert_eq!(alert.id.len(), 36); // UUID format
        assert_eq!(alert.status, "active");
        assert_eq!(alert.latitude, 40.7128);
        assert_eq!(alert.longitude, -74.0060);
    }

    #[test]
    fn test_coordinates_stay_numeric_in_json() {
        let alert = SosAlert::new(SosAlertCreate {
            latitude: -33.8688,
            longitude: 151.2093,
        });
        let json = serde_json::to_value(&alert).unwrap();
        assert!(json["latitude"].is_f64());
        assert!(json["timestamp"].is_string());
    }
}
