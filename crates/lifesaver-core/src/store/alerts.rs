//! SOS alert store operations.

use super::{Collection, Store, StoreResult};
use crate::models::SosAlert;

impl Store {
    /// Insert a new SOS alert.
    pub fn insert_sos_alert(&self, alert: &SosAlert) -> StoreResult<()> {
        self.insert(Collection::SosAlerts, &alert.id, alert)
    }

    /// List alerts newest-first, up to the collection cap.
    pub fn list_sos_alerts(&self) -> StoreResult<Vec<SosAlert>> {
        self.list(Collection::SosAlerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SosAlertCreate;
    use chrono::{Duration, TimeZone, Utc};

    fn setup_store() -> Store {
        Store::open_in_memory().unwrap()
    }

    fn alert_at(offset_secs: i64) -> SosAlert {
        let mut alert = SosAlert::new(SosAlertCreate {
            latitude: 40.7128,
            longitude: -74.0060,
        });
        alert.timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
            + Duration::seconds(offset_secs);
        alert
    }

    #[test]
    fn test_insert_and_list() {
        let store = setup_store();
        let alert = alert_at(0);
        store.insert_sos_alert(&alert).unwrap();

        let all = store.list_sos_alerts().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], alert);
    }

    #[test]
    fn test_list_newest_first() {
        let store = setup_store();
        // Insert out of chronological order
        for offset in [30, 10, 20] {
            store.insert_sos_alert(&alert_at(offset)).unwrap();
        }

        let all = store.list_sos_alerts().unwrap();
        let timestamps: Vec<_> = all.iter().map(|a| a.timestamp).collect();
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(timestamps, sorted);
        assert_eq!(all[0].timestamp, alert_at(30).timestamp);
    }

    #[test]
    fn test_list_caps_at_newest_hundred() {
        let store = setup_store();
        for offset in 0..105 {
            store.insert_sos_alert(&alert_at(offset)).unwrap();
        }

        let all = store.list_sos_alerts().unwrap();
        assert_eq!(all.len(), 100);
        // The five oldest fall off
        assert_eq!(all[0].timestamp, alert_at(104).timestamp);
        assert_eq!(all[99].timestamp, alert_at(5).timestamp);
    }
}
