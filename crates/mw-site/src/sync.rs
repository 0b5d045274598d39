//! "Last sync" footer stamp

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Footer stamp for `now`, `DD/MM/YYYY HH:MM:SS`
#[must_use]
pub fn last_sync(now: &NaiveDateTime) -> String {
    now.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Footer stamp for a zoned instant, in that zone's wall-clock time
#[must_use]
pub fn last_sync_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    last_sync(&now.naive_local())
}

/// Footer stamp for the current local time
#[must_use]
pub fn last_sync_now() -> String {
    last_sync_at(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn formats_with_zero_padding() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 5)
            .and_then(|d| d.and_hms_opt(4, 3, 8))
            .unwrap();

        assert_eq!(last_sync(&now), "05/06/2025 04:03:08");
    }

    #[test]
    fn zoned_instant_uses_wall_clock() {
        let paris = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = paris.with_ymd_and_hms(2025, 6, 25, 14, 32, 8).unwrap();

        assert_eq!(last_sync_at(&now), "25/06/2025 14:32:08");
    }

    #[test]
    fn current_time_has_fixed_width() {
        assert_eq!(last_sync_now().len(), "25/06/2025 14:32:08".len());
    }
}
