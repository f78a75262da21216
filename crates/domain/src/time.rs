//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for ticket in/out times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Elapsed time between two timestamps in fractional hours.
///
/// Millisecond precision; negative when `to` precedes `from`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_between(from: Timestamp, to: Timestamp) -> f64 {
    (to - from).num_milliseconds() as f64 / (60.0 * 60.0 * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_measure_fractional_hours() {
        let from = now();
        let to = from + Duration::minutes(45);
        assert!((hours_between(from, to) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn should_return_negative_hours_when_reversed() {
        let from = now();
        let to = from - Duration::minutes(60);
        assert!((hours_between(from, to) + 1.0).abs() < f64::EPSILON);
    }
}
