use chrono::{Datelike, NaiveDate};

use super::error::DashboardError;

/// Inclusive date window of the global sales charts.
/// `start > end` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start_date: &str, end_date: &str) -> Result<Self, DashboardError> {
        let start = parse_filter_date(start_date).ok_or_else(|| DashboardError::InvalidDate {
            field: "start_date",
            value: start_date.to_string(),
        })?;
        let end = parse_filter_date(end_date).ok_or_else(|| DashboardError::InvalidDate {
            field: "end_date",
            value: end_date.to_string(),
        })?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Parse a date picker value. Date pickers may send a time part
/// ("2011-01-05T00:00:00"), only the date is used.
pub fn parse_filter_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Accepted spellings of `tran_date` in source files
const SOURCE_DATE_FORMATS: [&str; 3] = ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"];

pub fn parse_source_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    SOURCE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| parse_filter_date(value))
}

/// Last day of the month containing `date` (monthly bucket label)
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_filter_date_ignores_time() {
        assert_eq!(parse_filter_date("2011-01-05"), Some(d(2011, 1, 5)));
        assert_eq!(parse_filter_date("2011-01-05T00:00:00"), Some(d(2011, 1, 5)));
        assert_eq!(parse_filter_date("2011-01-05 12:30:00"), Some(d(2011, 1, 5)));
        assert_eq!(parse_filter_date("05-01-2011"), None);
        assert_eq!(parse_filter_date(""), None);
    }

    #[test]
    fn test_parse_source_date_formats() {
        assert_eq!(parse_source_date("28-02-2014"), Some(d(2014, 2, 28)));
        assert_eq!(parse_source_date("28/02/2014"), Some(d(2014, 2, 28)));
        assert_eq!(parse_source_date("2014-02-28"), Some(d(2014, 2, 28)));
        assert_eq!(parse_source_date("2014/28/02"), None);
    }

    #[test]
    fn test_month_end() {
        assert_eq!(month_end(d(2011, 1, 5)), d(2011, 1, 31));
        assert_eq!(month_end(d(2012, 2, 10)), d(2012, 2, 29));
        assert_eq!(month_end(d(2011, 2, 10)), d(2011, 2, 28));
        assert_eq!(month_end(d(2011, 12, 31)), d(2011, 12, 31));
    }

    #[test]
    fn test_date_range_parse_errors_name_the_field() {
        let err = DateRange::parse("2011-01-01", "garbage").unwrap_err();
        assert_eq!(
            err,
            DashboardError::InvalidDate {
                field: "end_date",
                value: "garbage".to_string()
            }
        );
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let range = DateRange::parse("2011-01-01", "2011-02-28").unwrap();
        assert!(range.contains(d(2011, 1, 1)));
        assert!(range.contains(d(2011, 2, 28)));
        assert!(!range.contains(d(2011, 3, 1)));
    }
}
