use backoffice::parse::{
    self, DateOrTime, IntegerReal, MonthYear, Parse, ParsingDetail,
};
use backoffice::Error;
use chrono::{NaiveDate, NaiveTime};
use num_bigint::BigInt;
use rstest::rstest;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[rstest]
#[case(b"20230412", date(2023, 4, 12))]
#[case(b"19991231", date(1999, 12, 31))]
#[case(b"04/12/2023", date(2023, 4, 12))]
#[case(b"02/29/2024", date(2024, 2, 29))]
fn date_layouts(#[case] span: &[u8], #[case] expected: NaiveDate) {
    assert_eq!(parse::date(span).unwrap(), Parse::Value(expected));
}

#[rstest]
#[case(b"2023412")]
#[case(b"202304121")]
#[case(b"2023-4-12")]
#[case(b"04-12-2023")]
#[case(b"4/12/2023")]
#[case(b"04/12/23")]
#[case(b"")]
fn date_shape_mismatches_fail_softly(#[case] span: &[u8]) {
    assert_eq!(parse::date(span).unwrap(), Parse::Failed(ParsingDetail::Ok));
}

#[rstest]
#[case(b"99999999")]
#[case(b"99/99/9999")]
#[case(b"20230230")]
#[case(b"02/29/2023")]
fn out_of_range_dates_are_errors(#[case] span: &[u8]) {
    assert!(matches!(
        parse::date(span),
        Err(Error::OutOfRangeDate { .. })
    ));
}

#[rstest]
fn date_with_detail_classifies_placeholders() {
    assert_eq!(
        parse::date_with_detail(b"N.A.").unwrap(),
        Parse::Failed(ParsingDetail::DataMissing)
    );
    assert_eq!(
        parse::date(b"N.A.").unwrap(),
        Parse::Failed(ParsingDetail::Ok)
    );
}

#[rstest]
#[case(b"16:33:34", time(16, 33, 34))]
#[case(b"00:00:00", time(0, 0, 0))]
#[case(b"23:59:59", time(23, 59, 59))]
fn time_layout(#[case] span: &[u8], #[case] expected: NaiveTime) {
    assert_eq!(parse::time(span).unwrap(), Parse::Value(expected));
}

#[rstest]
#[case(b"24:00:00")]
#[case(b"99:99:99")]
fn out_of_range_times_are_errors(#[case] span: &[u8]) {
    assert!(matches!(
        parse::time(span),
        Err(Error::OutOfRangeTime { .. })
    ));
}

#[rstest]
#[case(b"1:23:45")]
#[case(b"12-34-56")]
#[case(b"12:34:5 ")]
fn time_shape_mismatches_fail_softly(#[case] span: &[u8]) {
    assert_eq!(parse::time(span).unwrap(), Parse::Failed(ParsingDetail::Ok));
}

#[rstest]
fn date_or_time_distinguishes_legs() {
    assert_eq!(
        parse::date_or_time(b"20230412").unwrap(),
        Parse::Value(DateOrTime::Date(date(2023, 4, 12)))
    );
    assert_eq!(
        parse::date_or_time(b"16:33:34").unwrap(),
        Parse::Value(DateOrTime::Time(time(16, 33, 34)))
    );
    assert_eq!(
        parse::date_or_time_with_detail(b"N.D.").unwrap(),
        Parse::Failed(ParsingDetail::NotDownloadable)
    );
}

#[rstest]
#[case(b"06/23", MonthYear { month: 6, year: 23, period: b"" })]
#[case(b"06/23 Q3", MonthYear { month: 6, year: 23, period: b"Q3" })]
#[case(b"DEC 23", MonthYear { month: 12, year: 23, period: b"" })]
#[case(b"JAN 99", MonthYear { month: 1, year: 99, period: b"" })]
fn month_year_layouts(#[case] span: &[u8], #[case] expected: MonthYear<'_>) {
    assert_eq!(parse::month_year(span), Parse::Value(expected));
}

#[rstest]
#[case(b"DEC23")]
#[case(b"DEC 2023")]
#[case(b"dec 23")]
#[case(b"XYZ 23")]
#[case(b"06/23 ")]
fn month_year_shape_mismatches_fail(#[case] span: &[u8]) {
    assert_eq!(parse::month_year(span), Parse::Failed(ParsingDetail::Ok));
}

#[rstest]
#[case(b"Y", true)]
#[case(b"N", false)]
fn boolean_values(#[case] span: &[u8], #[case] expected: bool) {
    assert_eq!(parse::boolean(span), Parse::Value(expected));
}

#[rstest]
#[case(b"y")]
#[case(b"YES")]
#[case(b"")]
fn boolean_rejects_everything_else(#[case] span: &[u8]) {
    assert_eq!(parse::boolean(span), Parse::Failed(ParsingDetail::Ok));
}

#[rstest]
fn integer_widths_fail_without_panicking() {
    assert_eq!(parse::int32(b"2147483647"), Parse::Value(i32::MAX));
    assert_eq!(parse::int32(b"-2147483648"), Parse::Value(i32::MIN));
    // One past the width fails that width and succeeds at the next one up.
    assert_eq!(
        parse::int32(b"2147483648"),
        Parse::Failed(ParsingDetail::Ok)
    );
    assert_eq!(parse::int64(b"2147483648"), Parse::Value(2147483648i64));
    assert_eq!(
        parse::int64(b"9223372036854775807"),
        Parse::Value(i64::MAX)
    );
    assert_eq!(
        parse::int64(b"-9223372036854775808"),
        Parse::Value(i64::MIN)
    );
    assert_eq!(
        parse::int64(b"9223372036854775808"),
        Parse::Failed(ParsingDetail::Ok)
    );
    assert_eq!(
        parse::big_integer(b"9223372036854775808"),
        Parse::Value(BigInt::from(9223372036854775808u64))
    );
}

#[rstest]
#[case(b"12 ")]
#[case(b" 12")]
#[case(b"1.0")]
#[case(b"")]
fn integers_must_consume_the_whole_span(#[case] span: &[u8]) {
    assert_eq!(parse::int32(span), Parse::Failed(ParsingDetail::Ok));
    assert_eq!(parse::int64(span), Parse::Failed(ParsingDetail::Ok));
    assert_eq!(parse::big_integer(span), Parse::Failed(ParsingDetail::Ok));
}

#[rstest]
fn reals_and_prices() {
    assert_eq!(
        parse::real(b"165.33"),
        Parse::Value(Decimal::new(16533, 2))
    );
    assert_eq!(parse::real(b"-0.5"), Parse::Value(Decimal::new(-5, 1)));
    assert_eq!(parse::price(b"165.33"), Parse::Value(Decimal::new(16533, 2)));
    assert_eq!(
        parse::price_with_detail(b"N.S."),
        Parse::Failed(ParsingDetail::NotSubscribed)
    );
}

#[rstest]
fn integer_real_reports_both_legs() {
    assert_eq!(
        parse::integer_real_int32(b"42"),
        Parse::Value(IntegerReal {
            integer: Some(42),
            real: Some(Decimal::new(42, 0)),
        })
    );
    assert_eq!(
        parse::integer_real_int32(b"42.5"),
        Parse::Value(IntegerReal {
            integer: None,
            real: Some(Decimal::new(425, 1)),
        })
    );
    // Too wide for i32 but still a fine decimal.
    assert_eq!(
        parse::integer_real_int32(b"2147483648"),
        Parse::Value(IntegerReal {
            integer: None,
            real: Some(Decimal::new(2147483648, 0)),
        })
    );
    assert_eq!(
        parse::integer_real_int32(b"garbage"),
        Parse::Failed(ParsingDetail::Ok)
    );
}

#[rstest]
fn integer_real_big_integer_outlives_decimal_range() {
    // Thirty-five digits: too wide for a decimal, fine for a big integer.
    let wide = b"99999999999999999999999999999999999";
    match parse::integer_real_big_integer(wide) {
        Parse::Value(IntegerReal { integer, real }) => {
            assert!(real.is_none());
            assert!(integer.is_some());
        }
        other => panic!("expected a value, got {other:?}"),
    }
}

#[rstest]
#[case(b"", ParsingDetail::NotApplicable)]
#[case(b"   ", ParsingDetail::NotApplicable)]
#[case(b"N.A.", ParsingDetail::DataMissing)]
#[case(b"N.D.", ParsingDetail::NotDownloadable)]
#[case(b"N.S.", ParsingDetail::NotSubscribed)]
#[case(b"FLD UNKNOWN", ParsingDetail::FieldUnknown)]
#[case(b"whatever", ParsingDetail::Ok)]
fn placeholder_table_applies_across_parsers(
    #[case] span: &[u8],
    #[case] expected: ParsingDetail,
) {
    assert_eq!(parse::boolean_with_detail(span), Parse::Failed(expected));
    assert_eq!(parse::int32_with_detail(span), Parse::Failed(expected));
    assert_eq!(parse::real_with_detail(span), Parse::Failed(expected));
    assert_eq!(parse::date_with_detail(span).unwrap(), Parse::Failed(expected));
    assert_eq!(parse::time_with_detail(span).unwrap(), Parse::Failed(expected));
}
