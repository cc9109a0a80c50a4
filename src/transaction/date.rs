use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YYYYMMDD: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    static ref YYYYMMDD_T_HHMM: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}$").unwrap();
    static ref YYYYMMDD_T_HHMMSS: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(\.\d+)?$").unwrap();
    static ref YYYYMMDD_T_HHMMSS_ZONE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$").unwrap();
    static ref DAY_FIRST: Regex = Regex::new(r"^(\d{1,2}[/.]\d{1,2}[/.]\d{4})(,?\s+(\d{1,2}:\d{2}(:\d{2})?))?$").unwrap();
    static ref DDMMMYYYY: Regex = Regex::new(r"^\d{1,2} [a-zA-Z]{3} \d{4}$").unwrap();
}

/// Parse a transaction date. Supported formats:
///
/// * `2019-01-31`
/// * `2019-01-31T10:30`, `2019-01-31T10:30:00` or `2019-01-31T10:30:00.250`, `T` may be a space
/// * `2019-01-31T10:30:00+02:00` (wall-clock time in the given offset)
/// * `31/01/2019`, `1/2/2019`, `31.01.2019`, optionally followed by a time as in
///   `31.01.2019, 10:30:00` or `31/01/2019 10:30`
/// * `31 Jan 2019`
///
/// Slash and dot dates are day first. Returns `None` for anything else, including impossible
/// dates such as `2019-02-30`.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if YYYYMMDD.is_match(s) {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)
    } else if YYYYMMDD_T_HHMM.is_match(s) {
        NaiveDateTime::parse_from_str(&s.replace(' ', "T"), "%Y-%m-%dT%H:%M").ok()
    } else if YYYYMMDD_T_HHMMSS.is_match(s) {
        NaiveDateTime::parse_from_str(&s.replace(' ', "T"), "%Y-%m-%dT%H:%M:%S%.f").ok()
    } else if YYYYMMDD_T_HHMMSS_ZONE.is_match(s) {
        DateTime::parse_from_rfc3339(s).ok().map(|d| d.naive_local())
    } else if let Some(captures) = DAY_FIRST.captures(s) {
        let date = NaiveDate::parse_from_str(&captures[1].replace('.', "/"), "%d/%m/%Y").ok()?;
        let time = match captures.get(3) {
            Some(time) => parse_time(time.as_str())?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        Some(date.and_time(time))
    } else if DDMMMYYYY.is_match(s) {
        NaiveDate::parse_from_str(s, "%d %b %Y").ok()?.and_hms_opt(0, 0, 0)
    } else {
        None
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let format = if s.matches(':').count() == 2 { "%H:%M:%S" } else { "%H:%M" };
    NaiveTime::parse_from_str(s, format).ok()
}
