//! Station and schedule records as served by the upstream feed.

use serde::Deserialize;

/// A station on the line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
}

/// Raw departure lists for one station.
///
/// Each schedule field is a comma-separated "HH:MM" list for one
/// [`Direction`](super::Direction). Parsing happens later so that a
/// malformed list only fails the request that asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub station_id: String,
    #[serde(rename = "scheduleLebakBulus")]
    pub lebak_bulus_times: String,
    #[serde(rename = "scheduleBundaranHI")]
    pub bundaran_hi_times: String,
}

impl ScheduleRecord {
    /// Find the record for a station.
    ///
    /// Matching is exact and case-sensitive. An empty `station_id` is
    /// matched like any other value.
    pub fn find<'a>(records: &'a [ScheduleRecord], station_id: &str) -> Option<&'a ScheduleRecord> {
        records.iter().find(|r| r.station_id == station_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ScheduleRecord {
        ScheduleRecord {
            station_id: id.to_string(),
            lebak_bulus_times: String::new(),
            bundaran_hi_times: String::new(),
        }
    }

    #[test]
    fn deserialize_schedule_record() {
        let json = r#"{
            "stationId": "ST01",
            "scheduleLebakBulus": "05:00, 23:50",
            "scheduleBundaranHI": "23:55",
            "extra": 1
        }"#;

        let r: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.station_id, "ST01");
        assert_eq!(r.lebak_bulus_times, "05:00, 23:50");
        assert_eq!(r.bundaran_hi_times, "23:55");
    }

    #[test]
    fn deserialize_station_ignores_unknown_fields() {
        let s: Station =
            serde_json::from_str(r#"{"id": "ST01", "name": "Lebak Bulus", "stationId": "ST01"}"#)
                .unwrap();
        assert_eq!(s.id, "ST01");
        assert_eq!(s.name, "Lebak Bulus");
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let records = vec![record("ST01"), record("st02")];

        assert!(ScheduleRecord::find(&records, "ST01").is_some());
        assert!(ScheduleRecord::find(&records, "ST02").is_none());
        assert!(ScheduleRecord::find(&records, "ST0").is_none());
    }

    #[test]
    fn find_empty_id_without_empty_record() {
        let records = vec![record("ST01")];
        assert!(ScheduleRecord::find(&records, "").is_none());
    }

    #[test]
    fn find_empty_id_with_empty_record() {
        let records = vec![record("ST01"), record("")];
        let found = ScheduleRecord::find(&records, "").unwrap();
        assert_eq!(found.station_id, "");
    }

    #[test]
    fn find_returns_first_match() {
        let mut second = record("ST01");
        second.lebak_bulus_times = "06:00".to_string();
        let records = vec![record("ST01"), second];

        let found = ScheduleRecord::find(&records, "ST01").unwrap();
        assert_eq!(found.lebak_bulus_times, "");
    }
}
