// Timestamps on the JSON 1.1 protocol are epoch seconds with an optional
// fractional part. Millisecond precision is kept.

use chrono::{DateTime, Utc};

pub fn to_epoch_seconds(value: &DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1000.0
}

pub fn from_epoch_seconds(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((value * 1000.0).round() as i64)
}

pub mod epoch_seconds_option {
    use super::{from_epoch_seconds, to_epoch_seconds};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_f64(to_epoch_seconds(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            Some(raw) => from_epoch_seconds(raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp {raw} is out of range"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_seconds_keep_millis() {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_250).unwrap();
        assert_eq!(to_epoch_seconds(&ts), 1_700_000_000.25);
        assert_eq!(from_epoch_seconds(1_700_000_000.25), Some(ts));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(from_epoch_seconds(f64::NAN), None);
        assert_eq!(from_epoch_seconds(f64::INFINITY), None);
    }
}
