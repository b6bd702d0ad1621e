//! Tolerant date parsing for heterogeneous order feeds.

use chrono::{DateTime, NaiveDate};

/// Parse a textual date, or `None` when unparseable.
///
/// Accepted, in priority order:
/// 1. `M/D/YYYY` anywhere in the text (so `"11/04/2025 13:51:17 EST"`
///    resolves to the date part);
/// 2. `YYYY-M-D` anywhere in the text;
/// 3. RFC 3339, then RFC 2822.
///
/// Invalid calendar values (`13/40/2024`) and empty input are `None` — a
/// "no date" signal, not an error. Downstream range filters exclude such
/// orders instead of failing the whole request.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(date) = scan_for_triple(text, b'/', false) {
        return Some(date);
    }
    if let Some(date) = scan_for_triple(text, b'-', true) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    None
}

/// Find the first separator-delimited numeric triple in the text and
/// validate it as a calendar date.
fn scan_for_triple(text: &str, sep: u8, year_first: bool) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            if let Some(date) = triple_at(bytes, i, sep, year_first) {
                return Some(date);
            }
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    None
}

fn triple_at(bytes: &[u8], start: usize, sep: u8, year_first: bool) -> Option<NaiveDate> {
    let mut pos = start;
    let first = digit_run(bytes, &mut pos)?;
    if bytes.get(pos) != Some(&sep) {
        return None;
    }
    pos += 1;
    let second = digit_run(bytes, &mut pos)?;
    if bytes.get(pos) != Some(&sep) {
        return None;
    }
    pos += 1;
    let third = digit_run(bytes, &mut pos)?;

    let (year, month, day) = if year_first {
        if first.1 != 4 || second.1 > 2 || third.1 > 2 {
            return None;
        }
        (first.0, second.0, third.0)
    } else {
        if first.1 > 2 || second.1 > 2 || third.1 != 4 {
            return None;
        }
        (third.0, first.0, second.0)
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Consume a run of digits at `*pos`, returning (value, length).
fn digit_run(bytes: &[u8], pos: &mut usize) -> Option<(u32, usize)> {
    let start = *pos;
    let mut value: u32 = 0;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        value = value.checked_mul(10)?.checked_add((bytes[*pos] - b'0') as u32)?;
        *pos += 1;
    }
    if *pos == start {
        None
    } else {
        Some((value, *pos - start))
    }
}
