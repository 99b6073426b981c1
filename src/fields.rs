//! The per-field catalog record from Bloomberg's `fields.csv`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The Rust type a field's values decode to, derived from the catalog's XSD
/// and field-type columns. Drives which [`crate::parse`] function applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeType {
    Boolean,
    Integer,
    Real,
    Date,
    Time,
    MonthYear,
    Text,
}

/// One row of the field catalog. Property order matches the column order of
/// `fields.csv`.
///
/// Identity is the field id alone: two records with the same `field_id`
/// compare equal regardless of every other column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub field_id: SmolStr,
    pub field_mnemonic: SmolStr,
    pub description: String,
    pub data_license_category: Option<String>,
    pub category: String,
    pub definition: String,
    pub comdty: Option<bool>,
    pub equity: Option<bool>,
    pub muni: Option<bool>,
    pub pfd: Option<bool>,
    pub m_mkt: Option<bool>,
    pub govt: Option<bool>,
    pub corp: Option<bool>,
    pub index: Option<bool>,
    pub curncy: Option<bool>,
    pub mtge: Option<bool>,
    pub standard_width: i32,
    pub standard_decimal_places: i32,
    pub field_type: String,
    pub back_office: Option<bool>,
    pub extended_back_office: Option<bool>,
    pub production_date: NaiveDate,
    pub current_maximum_width: i32,
    pub bval: Option<bool>,
    pub bval_blocked: Option<bool>,
    pub get_fundamentals: Option<bool>,
    pub get_history: Option<bool>,
    pub get_company: Option<bool>,
    pub old_mnemonic: Option<String>,
    pub data_license_category2: Option<String>,
    pub psbo_opt: bool,
    pub ds_bval_metered: Option<bool>,
    pub dl_bo_opt_fundamentals: bool,
    pub dl_bo_opt_bdvd: bool,
    pub dl_bo_opt_best: bool,
    pub dl_bo_opt_credit_risk: bool,
    pub dl_bo_opt_cap_struct: bool,
    pub dl_bo_opt_credit_risk_get_company: bool,
    pub dl_bo_opt_cap_struct_get_company: bool,
    pub sapi_oms: bool,
    pub dl_bo_opt_reg_compliance: bool,
    pub dl_bo_opt_issuer_ratings: bool,
    pub xsd_type: String,
    pub xsd_min_inclusive: Option<i32>,
    pub xsd_max_inclusive: Option<i64>,
    pub xsd_min_exclusive: Option<Decimal>,
    pub xsd_max_exclusive: Option<i64>,
    pub xsd_fraction_digits: Option<i32>,
    pub xsd_min_length: Option<i32>,
    pub xsd_max_length: Option<i32>,
    pub xsd_length: Option<i32>,
    pub xsd_pattern: Option<String>,
    pub rdf_lang_range: Option<String>,
    pub named_property_iri: Option<String>,
    pub super_property_iri: Option<String>,
    pub is_abstract: bool,
    pub clean_name: String,
    pub n_port: Option<String>,
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.field_id == other.field_id
    }
}

impl Eq for Field {}

impl std::hash::Hash for Field {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.field_id.hash(state);
    }
}

impl Field {
    /// Maps the catalog's XSD type, refined by the field-type column, to a
    /// runtime type. The mapping comes from an analysis of the full catalog;
    /// the field-type refinements cover the XSD types the catalog uses
    /// inconsistently.
    pub fn runtime_type(&self) -> RuntimeType {
        match self.xsd_type.as_str() {
            "xsd:boolean" => RuntimeType::Boolean,
            // A small subsection are actual times; the rest are text.
            "xsd:NCName" => {
                if self.field_type == "Time" {
                    RuntimeType::Time
                } else {
                    RuntimeType::Text
                }
            }
            "xsd:normalizedString" => {
                if self.field_type == "Integer" {
                    RuntimeType::Integer
                } else {
                    RuntimeType::Text
                }
            }
            "xsd:time" => RuntimeType::Time,
            "xsd:integer" => {
                if self.field_type == "Real" {
                    RuntimeType::Real
                } else {
                    RuntimeType::Integer
                }
            }
            "xsd:decimal" => {
                // One lone Date field; the rest cover Price, Real, Integer,
                // Character, and Integer/Real.
                if self.field_type == "Date" {
                    RuntimeType::Date
                } else {
                    RuntimeType::Real
                }
            }
            // RELATIONSHIP_YEAR (DZ409) is the one date-typed field that
            // actually carries integers.
            "xsd:date" => {
                if self.field_id == "DZ409" {
                    RuntimeType::Integer
                } else {
                    RuntimeType::Date
                }
            }
            "xsd:token" => match self.field_type.as_str() {
                "Boolean" => RuntimeType::Boolean,
                "Integer" => RuntimeType::Integer,
                "Month/Year" => RuntimeType::MonthYear,
                "Time" => RuntimeType::Time,
                // Covers Bulk Format, Character, Date or Time, and Long
                // Character.
                _ => RuntimeType::Text,
            },
            // Unknowns, plus xsd:anySimpleType, xsd:anyURI, xsd:string,
            // xsd:NMTOKEN, xsd:dateTime, and xsd:gYear.
            _ => RuntimeType::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field(id: &str, xsd_type: &str, field_type: &str) -> Field {
        Field {
            field_id: SmolStr::from(id),
            field_mnemonic: SmolStr::from("MNEMONIC"),
            description: String::new(),
            data_license_category: None,
            category: String::new(),
            definition: String::new(),
            comdty: None,
            equity: None,
            muni: None,
            pfd: None,
            m_mkt: None,
            govt: None,
            corp: None,
            index: None,
            curncy: None,
            mtge: None,
            standard_width: 0,
            standard_decimal_places: 0,
            field_type: field_type.to_owned(),
            back_office: None,
            extended_back_office: None,
            production_date: NaiveDate::from_ymd_opt(2023, 4, 12).unwrap(),
            current_maximum_width: 0,
            bval: None,
            bval_blocked: None,
            get_fundamentals: None,
            get_history: None,
            get_company: None,
            old_mnemonic: None,
            data_license_category2: None,
            psbo_opt: false,
            ds_bval_metered: None,
            dl_bo_opt_fundamentals: false,
            dl_bo_opt_bdvd: false,
            dl_bo_opt_best: false,
            dl_bo_opt_credit_risk: false,
            dl_bo_opt_cap_struct: false,
            dl_bo_opt_credit_risk_get_company: false,
            dl_bo_opt_cap_struct_get_company: false,
            sapi_oms: false,
            dl_bo_opt_reg_compliance: false,
            dl_bo_opt_issuer_ratings: false,
            xsd_type: xsd_type.to_owned(),
            xsd_min_inclusive: None,
            xsd_max_inclusive: None,
            xsd_min_exclusive: None,
            xsd_max_exclusive: None,
            xsd_fraction_digits: None,
            xsd_min_length: None,
            xsd_max_length: None,
            xsd_length: None,
            xsd_pattern: None,
            rdf_lang_range: None,
            named_property_iri: None,
            super_property_iri: None,
            is_abstract: false,
            clean_name: String::new(),
            n_port: None,
        }
    }

    #[rstest]
    #[case("xsd:boolean", "Character", RuntimeType::Boolean)]
    #[case("xsd:NCName", "Time", RuntimeType::Time)]
    #[case("xsd:NCName", "Character", RuntimeType::Text)]
    #[case("xsd:normalizedString", "Integer", RuntimeType::Integer)]
    #[case("xsd:normalizedString", "Character", RuntimeType::Text)]
    #[case("xsd:time", "Time", RuntimeType::Time)]
    #[case("xsd:integer", "Real", RuntimeType::Real)]
    #[case("xsd:integer", "Integer", RuntimeType::Integer)]
    #[case("xsd:decimal", "Date", RuntimeType::Date)]
    #[case("xsd:decimal", "Price", RuntimeType::Real)]
    #[case("xsd:date", "Date", RuntimeType::Date)]
    #[case("xsd:token", "Boolean", RuntimeType::Boolean)]
    #[case("xsd:token", "Month/Year", RuntimeType::MonthYear)]
    #[case("xsd:token", "Date or Time", RuntimeType::Text)]
    #[case("xsd:gYear", "Integer", RuntimeType::Text)]
    fn test_runtime_type(
        #[case] xsd_type: &str,
        #[case] field_type: &str,
        #[case] expected: RuntimeType,
    ) {
        assert_eq!(field("XX000", xsd_type, field_type).runtime_type(), expected);
    }

    #[rstest]
    fn test_relationship_year_outlier() {
        assert_eq!(
            field("DZ409", "xsd:date", "Character").runtime_type(),
            RuntimeType::Integer
        );
    }

    #[rstest]
    fn test_equality_is_by_field_id() {
        let a = field("AB001", "xsd:boolean", "Character");
        let b = field("AB001", "xsd:string", "Text");
        let c = field("AB002", "xsd:boolean", "Character");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
