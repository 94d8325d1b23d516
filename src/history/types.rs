// Core data structure for the persisted race history

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

/// One committed timing session.
///
/// A race is created exactly once, when the stopwatch transitions from
/// running to stopped with nonzero elapsed time, and never mutated afterward.
/// `lap_times_ms` holds cumulative checkpoints (not per-lap durations); the
/// final entry equals `total_time_ms`, and `total_time_ms` equals the span
/// between `start_time` and `end_time` within sampling resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Race {
    /// Unique identifier, assigned at commit time and never reused
    pub id: String,
    /// Wall-clock instant timing began
    #[serde(with = "timestamp_millis")]
    pub start_time: SystemTime,
    /// Wall-clock instant timing stopped
    #[serde(with = "timestamp_millis")]
    pub end_time: SystemTime,
    /// Elapsed duration in milliseconds
    pub total_time_ms: u64,
    /// Cumulative elapsed time at each recorded lap, non-decreasing
    pub lap_times_ms: Vec<u64>,
    /// Display label for the rider, non-empty
    pub rider_name: String,
}

impl Race {
    /// Create a committed race with a freshly assigned unique id.
    pub fn new(
        start_time: SystemTime,
        end_time: SystemTime,
        total_time_ms: u64,
        lap_times_ms: Vec<u64>,
        rider_name: String,
    ) -> Self {
        Self {
            id: next_race_id(end_time),
            start_time,
            end_time,
            total_time_ms,
            lap_times_ms,
            rider_name,
        }
    }
}

static RACE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Race ids combine the commit timestamp with a process-monotonic counter so
/// that races committed within the same millisecond still get distinct ids.
fn next_race_id(end_time: SystemTime) -> String {
    let millis = end_time
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let sequence = RACE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", millis, sequence)
}

/// Timestamps travel on the wire as decimal milliseconds-since-epoch strings,
/// which round-trips millisecond-accurate durations exactly.
mod timestamp_millis {
    use super::*;
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = time
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        serializer.serialize_str(&millis.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let millis: u64 = raw
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid millisecond timestamp: {raw}")))?;
        Ok(SystemTime::UNIX_EPOCH + Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn instant(millis: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(millis)
    }

    #[test]
    fn test_race_ids_are_unique_within_a_millisecond() {
        let end = instant(1_700_000_000_000);
        let ids: HashSet<String> = (0..100)
            .map(|_| Race::new(instant(0), end, 5_000, vec![5_000], "Rider".to_string()).id)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_race_serde_round_trip_preserves_millisecond_precision() {
        let race = Race::new(
            instant(1_700_000_000_123),
            instant(1_700_000_005_123),
            5_000,
            vec![1_500, 4_200, 5_000],
            "Lotte Kopecky".to_string(),
        );

        let json = serde_json::to_string(&race).unwrap();
        let reloaded: Race = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded, race);
        assert_eq!(
            reloaded
                .end_time
                .duration_since(reloaded.start_time)
                .unwrap()
                .as_millis(),
            5_000
        );
    }

    #[test]
    fn test_timestamps_serialize_as_strings() {
        let race = Race::new(
            instant(1_700_000_000_123),
            instant(1_700_000_005_123),
            5_000,
            vec![5_000],
            "Rider".to_string(),
        );
        let value: serde_json::Value = serde_json::to_value(&race).unwrap();
        assert_eq!(value["start_time"], "1700000000123");
        assert_eq!(value["end_time"], "1700000005123");
    }

    #[test]
    fn test_invalid_timestamp_string_is_rejected() {
        let json = r#"{
            "id": "1-0",
            "start_time": "not-a-timestamp",
            "end_time": "1700000005123",
            "total_time_ms": 5000,
            "lap_times_ms": [5000],
            "rider_name": "Rider"
        }"#;
        assert!(serde_json::from_str::<Race>(json).is_err());
    }
}
