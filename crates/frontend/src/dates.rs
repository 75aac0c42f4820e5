use chrono::NaiveDate;

/// Date format used in routes and API queries.
pub const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), ISO_DATE).ok()
}

/// `2024-05-06` -> `Monday, May 6, 2024`. Unparsable input is shown as-is.
pub fn long_date(date: &str) -> String {
    match parse_day(date) {
        Some(d) => d.format("%A, %B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}
