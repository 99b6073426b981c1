use chrono::{NaiveDate, NaiveTime};
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::Error;
use crate::Result;

use super::detail::{classify, ParsingDetail};
use super::month::month_short_name;
use super::Parse;

/// Either leg of a field typed "Date or Time".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrTime {
    Date(NaiveDate),
    Time(NaiveTime),
}

/// A month/year value, with the optional trailing period designator from the
/// `mm/yy <period>` layout (e.g. the `Q3` in `06/23 Q3`). The month and year
/// are carried as written; two-digit years are not widened to a century.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear<'a> {
    pub month: u32,
    pub year: u32,
    pub period: &'a [u8],
}

/// Result of the combined integer/real parse. Either side may be present;
/// both absent never occurs (that case reports as a failed parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerReal<I> {
    pub integer: Option<I>,
    pub real: Option<Decimal>,
}

#[inline]
fn digits(span: &[u8]) -> Option<u32> {
    if span.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &byte in span {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(u32::from(byte - b'0'))?;
    }
    Some(value)
}

#[inline]
fn full_span_parse<T: std::str::FromStr>(span: &[u8]) -> Option<T> {
    std::str::from_utf8(span).ok()?.parse().ok()
}

#[inline]
fn failed<T>(span: &[u8], with_detail: bool) -> Parse<T> {
    Parse::Failed(if with_detail {
        classify(span)
    } else {
        ParsingDetail::Ok
    })
}

fn lossy(span: &[u8]) -> String {
    String::from_utf8_lossy(span).into_owned()
}

// yyyymmdd
#[inline]
fn date_integer_format(span: &[u8]) -> Option<(u32, u32, u32)> {
    if span.len() != 8 {
        return None;
    }
    let year = digits(&span[..4])?;
    let month = digits(&span[4..6])?;
    let day = digits(&span[6..])?;
    Some((year, month, day))
}

// mm/dd/yyyy
#[inline]
fn date_month_day_year_format(span: &[u8]) -> Option<(u32, u32, u32)> {
    if span.len() != 10 || span[2] != b'/' || span[5] != b'/' {
        return None;
    }
    let month = digits(&span[..2])?;
    let day = digits(&span[3..5])?;
    let year = digits(&span[6..])?;
    Some((year, month, day))
}

fn date_impl(span: &[u8], with_detail: bool) -> Result<Parse<NaiveDate>> {
    if let Some((year, month, day)) =
        date_integer_format(span).or_else(|| date_month_day_year_format(span))
    {
        // The layout matched, so the span cannot be a placeholder string;
        // an impossible calendar day is a hard error, not a failed parse.
        return NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Parse::Value)
            .ok_or_else(|| Error::OutOfRangeDate { text: lossy(span) });
    }
    Ok(failed(span, with_detail))
}

/// Parses `yyyymmdd` or `mm/dd/yyyy`.
///
/// Values that match a layout but name an impossible day, like `99999999`,
/// fail with [`Error::OutOfRangeDate`].
pub fn date(span: &[u8]) -> Result<Parse<NaiveDate>> {
    date_impl(span, false)
}

pub fn date_with_detail(span: &[u8]) -> Result<Parse<NaiveDate>> {
    date_impl(span, true)
}

// hh:mm:ss
#[inline]
fn time_hour_minute_second_format(span: &[u8]) -> Option<(u32, u32, u32)> {
    if span.len() != 8 || span[2] != b':' || span[5] != b':' {
        return None;
    }
    let hour = digits(&span[..2])?;
    let minute = digits(&span[3..5])?;
    let second = digits(&span[6..])?;
    Some((hour, minute, second))
}

fn time_impl(span: &[u8], with_detail: bool) -> Result<Parse<NaiveTime>> {
    if let Some((hour, minute, second)) = time_hour_minute_second_format(span) {
        return NaiveTime::from_hms_opt(hour, minute, second)
            .map(Parse::Value)
            .ok_or_else(|| Error::OutOfRangeTime { text: lossy(span) });
    }
    Ok(failed(span, with_detail))
}

/// Parses `hh:mm:ss`. Out-of-range components such as `24:00:00` fail with
/// [`Error::OutOfRangeTime`].
pub fn time(span: &[u8]) -> Result<Parse<NaiveTime>> {
    time_impl(span, false)
}

pub fn time_with_detail(span: &[u8]) -> Result<Parse<NaiveTime>> {
    time_impl(span, true)
}

fn date_or_time_impl(span: &[u8], with_detail: bool) -> Result<Parse<DateOrTime>> {
    // Date layouts first; they are the longer formats and the two cannot
    // match the same span.
    if let Parse::Value(value) = date_impl(span, false)? {
        return Ok(Parse::Value(DateOrTime::Date(value)));
    }
    if let Parse::Value(value) = time_impl(span, false)? {
        return Ok(Parse::Value(DateOrTime::Time(value)));
    }
    Ok(failed(span, with_detail))
}

/// Parses a field typed "Date or Time": any date layout, then `hh:mm:ss`.
pub fn date_or_time(span: &[u8]) -> Result<Parse<DateOrTime>> {
    date_or_time_impl(span, false)
}

pub fn date_or_time_with_detail(span: &[u8]) -> Result<Parse<DateOrTime>> {
    date_or_time_impl(span, true)
}

// mm/yy with optional period designator after at least one space
#[inline]
fn month_year_forward_slash_format(span: &[u8]) -> Option<MonthYear<'_>> {
    if span.len() < 5 || span[2] != b'/' {
        return None;
    }
    let month = digits(&span[..2])?;
    let year = digits(&span[3..5])?;
    if span.len() == 5 {
        return Some(MonthYear {
            month,
            year,
            period: &[],
        });
    }
    let rest = &span[5..];
    let first_non_space = rest.iter().position(|&byte| byte != b' ')?;
    if first_non_space == 0 {
        return None;
    }
    Some(MonthYear {
        month,
        year,
        period: &rest[first_non_space..],
    })
}

// MMM yy
#[inline]
fn month_year_short_name_format(span: &[u8]) -> Option<(u32, u32)> {
    if span.len() != 6 || span[3] != b' ' {
        return None;
    }
    let year = digits(&span[4..])?;
    let month = month_short_name(&span[..3])?;
    Some((month, year))
}

fn month_year_impl(span: &[u8], with_detail: bool) -> Parse<MonthYear<'_>> {
    // A forward slash at index 2 rules out every placeholder string, so
    // whichever way the slash layout goes, that outcome is final.
    if span.len() >= 3 && span[2] == b'/' {
        return match month_year_forward_slash_format(span) {
            Some(value) => Parse::Value(value),
            None => Parse::Failed(ParsingDetail::Ok),
        };
    }
    if span.len() >= 4 && span[3] == b' ' {
        if let Some((month, year)) = month_year_short_name_format(span) {
            return Parse::Value(MonthYear {
                month,
                year,
                period: &[],
            });
        }
        // `FLD UNKNOWN` also has a space at index 3; fall through to the
        // placeholder scan.
    }
    failed(span, with_detail)
}

/// Parses `mm/yy`, `mm/yy <period>`, or `MMM yy` (upper-case month name).
pub fn month_year(span: &[u8]) -> Parse<MonthYear<'_>> {
    month_year_impl(span, false)
}

pub fn month_year_with_detail(span: &[u8]) -> Parse<MonthYear<'_>> {
    month_year_impl(span, true)
}

fn boolean_impl(span: &[u8], with_detail: bool) -> Parse<bool> {
    if span.len() == 1 {
        match span[0] {
            b'Y' => return Parse::Value(true),
            b'N' => return Parse::Value(false),
            _ => {}
        }
    }
    failed(span, with_detail)
}

/// Parses a single `Y` or `N`.
pub fn boolean(span: &[u8]) -> Parse<bool> {
    boolean_impl(span, false)
}

pub fn boolean_with_detail(span: &[u8]) -> Parse<bool> {
    boolean_impl(span, true)
}

fn int32_impl(span: &[u8], with_detail: bool) -> Parse<i32> {
    match full_span_parse(span) {
        Some(value) => Parse::Value(value),
        None => failed(span, with_detail),
    }
}

/// Parses a decimal integer occupying the whole span. A well-formed number
/// too large for an `i32` fails the parse rather than panicking.
pub fn int32(span: &[u8]) -> Parse<i32> {
    int32_impl(span, false)
}

pub fn int32_with_detail(span: &[u8]) -> Parse<i32> {
    int32_impl(span, true)
}

fn int64_impl(span: &[u8], with_detail: bool) -> Parse<i64> {
    match full_span_parse(span) {
        Some(value) => Parse::Value(value),
        None => failed(span, with_detail),
    }
}

/// Parses a decimal integer occupying the whole span into an `i64`.
pub fn int64(span: &[u8]) -> Parse<i64> {
    int64_impl(span, false)
}

pub fn int64_with_detail(span: &[u8]) -> Parse<i64> {
    int64_impl(span, true)
}

fn big_integer_impl(span: &[u8], with_detail: bool) -> Parse<BigInt> {
    match BigInt::parse_bytes(span, 10) {
        Some(value) => Parse::Value(value),
        None => failed(span, with_detail),
    }
}

/// Parses an arbitrarily large decimal integer.
pub fn big_integer(span: &[u8]) -> Parse<BigInt> {
    big_integer_impl(span, false)
}

pub fn big_integer_with_detail(span: &[u8]) -> Parse<BigInt> {
    big_integer_impl(span, true)
}

fn real_impl(span: &[u8], with_detail: bool) -> Parse<Decimal> {
    match full_span_parse(span) {
        Some(value) => Parse::Value(value),
        None => failed(span, with_detail),
    }
}

/// Parses a decimal number occupying the whole span.
pub fn real(span: &[u8]) -> Parse<Decimal> {
    real_impl(span, false)
}

pub fn real_with_detail(span: &[u8]) -> Parse<Decimal> {
    real_impl(span, true)
}

/// Parses a price. Identical to [`real`]; Bloomberg fraction notation for
/// prices is not supported.
pub fn price(span: &[u8]) -> Parse<Decimal> {
    real_impl(span, false)
}

pub fn price_with_detail(span: &[u8]) -> Parse<Decimal> {
    real_impl(span, true)
}

fn integer_real_impl<I>(
    span: &[u8],
    with_detail: bool,
    parse_integer: impl FnOnce(&[u8]) -> Option<I>,
) -> Parse<IntegerReal<I>> {
    let real: Option<Decimal> = full_span_parse(span);
    if real.is_none() && with_detail {
        let detail = classify(span);
        // A placeholder cannot parse as an integer either, so stop here.
        if detail != ParsingDetail::Ok {
            return Parse::Failed(detail);
        }
    }
    let integer = parse_integer(span);
    if real.is_none() && integer.is_none() {
        return Parse::Failed(ParsingDetail::Ok);
    }
    Parse::Value(IntegerReal { integer, real })
}

/// Parses a field typed "Integer/Real", reporting both readings. The span
/// is scanned as a decimal and as an `i32`; either leg may be absent.
pub fn integer_real_int32(span: &[u8]) -> Parse<IntegerReal<i32>> {
    integer_real_impl(span, false, full_span_parse)
}

pub fn integer_real_int32_with_detail(span: &[u8]) -> Parse<IntegerReal<i32>> {
    integer_real_impl(span, true, full_span_parse)
}

pub fn integer_real_int64(span: &[u8]) -> Parse<IntegerReal<i64>> {
    integer_real_impl(span, false, full_span_parse)
}

pub fn integer_real_int64_with_detail(span: &[u8]) -> Parse<IntegerReal<i64>> {
    integer_real_impl(span, true, full_span_parse)
}

pub fn integer_real_big_integer(span: &[u8]) -> Parse<IntegerReal<BigInt>> {
    integer_real_impl(span, false, |span| BigInt::parse_bytes(span, 10))
}

pub fn integer_real_big_integer_with_detail(span: &[u8]) -> Parse<IntegerReal<BigInt>> {
    integer_real_impl(span, true, |span| BigInt::parse_bytes(span, 10))
}
