use chrono::{NaiveDate, TimeZone, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current UTC calendar date
    fn today(&self) -> NaiveDate {
        Utc.timestamp_millis_opt(self.get_timestamp_millis())
            .single()
            .map(|now| now.date_naive())
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// System where time is frozen at a given timestamp
pub struct StaticTimeSys {
    pub timestamp_millis: i64,
}

impl StaticTimeSys {
    /// Frozen at midnight UTC of the given date
    pub fn at_date(date: NaiveDate) -> Self {
        let timestamp_millis = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self { timestamp_millis }
    }
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }
}
