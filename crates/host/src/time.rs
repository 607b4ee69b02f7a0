//! Date arithmetic.

use chrono::{DateTime, Duration, Utc};

/// The current instant shifted by a signed number of whole days.
#[must_use]
pub fn date_with_delta_days(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}
