use chrono::NaiveDate;

/// Day-first formats accepted in the raw `Time` column.
const DAY_FIRST_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Parse a date giving the day before the month (`15/5/2021`).
/// ISO `YYYY-MM-DD` is accepted as well since it cannot be ambiguous.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DAY_FIRST_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_date(s))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
