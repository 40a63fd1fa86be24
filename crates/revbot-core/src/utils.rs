use time::{Duration, OffsetDateTime};

/// Current UTC time, truncated to the microsecond precision of the store.
pub(crate) fn now_utc() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}
