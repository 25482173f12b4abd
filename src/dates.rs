// 📅 Date Parser - Heterogeneous date text → comparable calendar value
//
// The upstream service sends purchase order dates as D/M/Y slash text
// ("25/12/2024"), but older payloads carry ISO dates or full timestamps.
// Everything funnels through parse_date, which never fails - unparseable
// input is simply None, and downstream stages treat None as "no data to
// compare".

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Parse a date string into a calendar value.
///
/// Rules, in order:
/// 1. Empty/blank input → None
/// 2. Three-part slash text is day/month/year. Out-of-range parts are NOT
///    rejected: day 32 or month 13 rolls forward into the next month/year,
///    matching the calendar normalization of the legacy report frontend.
///    Compatibility behavior - keep it.
/// 3. Anything else goes through generic parsing (ISO date, ISO/RFC3339
///    timestamp); failure → None. Slash-delimited text never reaches this
///    step - the D/M/Y branch subsumes every three-part slash form.
///
/// Never panics, never errors.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() == 3 {
        if let (Ok(day), Ok(month), Ok(year)) = (
            parts[0].trim().parse::<i64>(),
            parts[1].trim().parse::<i64>(),
            parts[2].trim().parse::<i32>(),
        ) {
            return from_dmy_normalized(year, month, day);
        }
    }

    parse_generic(trimmed)
}

/// Convenience wrapper for optional input (absent field on a record).
pub fn parse_date_opt(text: Option<&str>) -> Option<NaiveDate> {
    text.and_then(parse_date)
}

/// Build a date from day/month/year parts with rollover normalization.
///
/// Months past December roll into following years; the day offset is then
/// applied from the 1st, so day 32 lands in the next month and day 0 lands
/// on the last day of the previous month. All arithmetic is checked:
/// parts too extreme to represent yield None instead of panicking.
fn from_dmy_normalized(year: i32, month: i64, day: i64) -> Option<NaiveDate> {
    let months_total = i64::from(year)
        .checked_mul(12)?
        .checked_add(month.checked_sub(1)?)?;
    let norm_year = i32::try_from(months_total.div_euclid(12)).ok()?;
    let norm_month = (months_total.rem_euclid(12) + 1) as u32;

    let first = NaiveDate::from_ymd_opt(norm_year, norm_month, 1)?;
    let offset = day.checked_sub(1)?;
    first.checked_add_signed(Duration::try_days(offset)?)
}

/// Generic parsing for non-slash formats, tried in sequence.
fn parse_generic(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }

    None
}

// ============================================================================
// TESTS
// ============================================================================
