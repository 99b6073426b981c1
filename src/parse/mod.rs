//! Byte-level parsers for the data types Bloomberg writes into field values.
//!
//! Every parser consumes the full span or fails; none of them allocate. Each
//! comes in two flavors: the plain one reports any failure as
//! `Failed(ParsingDetail::Ok)`, the `_with_detail` one scans the failed span
//! for the well-known placeholder strings first.

mod detail;
mod month;
mod value;

pub use detail::{classify, ParsingDetail};
pub use month::month_short_name;
pub use value::{
    big_integer, big_integer_with_detail, boolean, boolean_with_detail, date, date_or_time,
    date_or_time_with_detail, date_with_detail, int32, int32_with_detail, int64,
    int64_with_detail, integer_real_big_integer, integer_real_big_integer_with_detail,
    integer_real_int32, integer_real_int32_with_detail, integer_real_int64,
    integer_real_int64_with_detail, month_year, month_year_with_detail, price,
    price_with_detail, real, real_with_detail, time, time_with_detail, DateOrTime, IntegerReal,
    MonthYear,
};

/// Outcome of a field-value parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse<T> {
    Value(T),
    /// The span was not in the requested format. The detail says whether it
    /// was one of the placeholder strings instead, or just unparseable
    /// (`ParsingDetail::Ok`).
    Failed(ParsingDetail),
}

impl<T> Parse<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Parse::Value(value) => Some(value),
            Parse::Failed(_) => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Parse::Value(_))
    }

    pub fn detail(&self) -> Option<ParsingDetail> {
        match self {
            Parse::Value(_) => None,
            Parse::Failed(detail) => Some(*detail),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parse<U> {
        match self {
            Parse::Value(value) => Parse::Value(f(value)),
            Parse::Failed(detail) => Parse::Failed(detail),
        }
    }
}
