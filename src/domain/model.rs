use serde::{Deserialize, Serialize};

/// An arbitrarily nested list, the typed counterpart of a JSON array of arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

/// Unit suffixes appended by the compact elapsed-time formatter.
///
/// Each suffix is written directly after its number, so `" hours"` renders as
/// `"3 hours"` while the default `"h"` renders as `"3h"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElapsedSuffixes {
    #[serde(rename = "Y")]
    pub years: String,
    #[serde(rename = "M")]
    pub months: String,
    #[serde(rename = "d")]
    pub days: String,
    #[serde(rename = "h")]
    pub hours: String,
    #[serde(rename = "m")]
    pub minutes: String,
    #[serde(rename = "s")]
    pub seconds: String,
}

impl Default for ElapsedSuffixes {
    fn default() -> Self {
        Self {
            years: "Y".to_string(),
            months: "M".to_string(),
            days: "d".to_string(),
            hours: "h".to_string(),
            minutes: "m".to_string(),
            seconds: "s".to_string(),
        }
    }
}

/// Where a currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1,234.56`
    Prefix,
    /// `1.234,56 €` (separated by a no-break space)
    Suffix,
}

/// Number formatting conventions of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub symbol_position: SymbolPosition,
}

/// An ISO 4217 currency with its default symbol and minor unit digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySpec {
    pub code: &'static str,
    pub symbol: &'static str,
    pub fraction_digits: usize,
}
