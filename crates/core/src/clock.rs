//! Server-local wall clock formatting

use chrono::{DateTime, Local};

/// Date format used for task scoping.
pub const TASK_DATE_FORMAT: &str = "%Y-%m-%d";

const CLOCK_TIME_FORMAT: &str = "%H:%M:%S";
const CLOCK_DATE_FORMAT: &str = "%d/%m/%Y";

/// Today's date in server local time, as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format(TASK_DATE_FORMAT).to_string()
}

/// Time of day as `HH:MM:SS`.
pub fn clock_time(now: &DateTime<Local>) -> String {
    now.format(CLOCK_TIME_FORMAT).to_string()
}

/// Calendar date as `DD/MM/YYYY`.
pub fn clock_date(now: &DateTime<Local>) -> String {
    now.format(CLOCK_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    #[test]
    fn test_clock_formats() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .single()
            .unwrap();
        assert_eq!(clock_time(&now), "09:05:02");
        assert_eq!(clock_date(&now), "07/03/2024");
    }

    #[test]
    fn test_today_is_iso_date() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, TASK_DATE_FORMAT).is_ok());
    }
}
