use crate::domain::model::{CurrencySpec, LocaleFormat, SymbolPosition};
use crate::utils::error::{Result, UtilsError};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

pub use crate::core::date::{days_between, parse_duration_secs};

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

const NBSP: &str = "\u{a0}";

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_CURRENCY: &str = "USD";

static READABLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9.]+[BMK]?$").expect("readable number pattern is valid")
});

static LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        tag: "en-US",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
    },
    LocaleFormat {
        tag: "en-GB",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
    },
    LocaleFormat {
        tag: "ja-JP",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
    },
    LocaleFormat {
        tag: "de-DE",
        group_separator: ".",
        decimal_separator: ",",
        symbol_position: SymbolPosition::Suffix,
    },
    LocaleFormat {
        tag: "fr-FR",
        group_separator: "\u{202f}",
        decimal_separator: ",",
        symbol_position: SymbolPosition::Suffix,
    },
    LocaleFormat {
        tag: "cs-CZ",
        group_separator: NBSP,
        decimal_separator: ",",
        symbol_position: SymbolPosition::Suffix,
    },
];

static CURRENCIES: &[CurrencySpec] = &[
    CurrencySpec {
        code: "USD",
        symbol: "$",
        fraction_digits: 2,
    },
    CurrencySpec {
        code: "EUR",
        symbol: "€",
        fraction_digits: 2,
    },
    CurrencySpec {
        code: "GBP",
        symbol: "£",
        fraction_digits: 2,
    },
    CurrencySpec {
        code: "JPY",
        symbol: "¥",
        fraction_digits: 0,
    },
    CurrencySpec {
        code: "CZK",
        symbol: "CZK",
        fraction_digits: 2,
    },
];

/// Symbols that differ from the currency default in a specific locale.
static LOCAL_SYMBOLS: &[(&str, &str, &str)] = &[
    ("ja-JP", "JPY", "￥"),
    ("cs-CZ", "CZK", "Kč"),
    ("en-US", "GBP", "£"),
    ("de-DE", "USD", "$"),
    ("fr-FR", "USD", "$US"),
];

/// Uniform random integer in `[min, max]`.
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    random_int_with(min, max, &mut rand::thread_rng())
}

/// Same as [`random_int`] with a caller-supplied generator.
pub fn random_int_with<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> Result<i64> {
    if min > max {
        return Err(UtilsError::invalid_argument(
            "min",
            format!("{} is greater than max {}", min, max),
        ));
    }
    Ok(rng.gen_range(min..=max))
}

/// Shortens large numbers: `1500 -> "1.50k"`, `2500000 -> "2.50M"`, `500 -> "500"`.
pub fn format_readable(number: f64) -> String {
    if number >= MILLION {
        format!("{:.2}M", round_half_away(number / MILLION, 2))
    } else if number >= THOUSAND {
        format!("{:.2}k", round_half_away(number / THOUSAND, 2))
    } else {
        number.to_string()
    }
}

/// Inverse of [`format_readable`]; also accepts a `B` (billion) suffix.
/// Returns `None` for anything that is not a plain number with an optional
/// `K`, `M` or `B` suffix, case-insensitively.
pub fn try_parse_readable(input: &str) -> Option<f64> {
    let normalized = input.to_uppercase();
    if !READABLE_NUMBER.is_match(&normalized) {
        tracing::debug!("rejected readable number {:?}", input);
        return None;
    }

    let (digits, multiplier) = match normalized.as_bytes().last() {
        Some(b'K') => (&normalized[..normalized.len() - 1], THOUSAND),
        Some(b'M') => (&normalized[..normalized.len() - 1], MILLION),
        Some(b'B') => (&normalized[..normalized.len() - 1], BILLION),
        _ => (normalized.as_str(), 1.0),
    };
    digits.parse::<f64>().ok().map(|value| value * multiplier)
}

/// Like [`try_parse_readable`] but yields `NaN` for unparseable input.
pub fn parse_readable(input: &str) -> f64 {
    try_parse_readable(input).unwrap_or(f64::NAN)
}

/// Groups the digits of `number` as `3 3 rest` and optionally prefixes a country code.
///
/// Fewer than seven digits are returned ungrouped.
pub fn format_phone_number(number: &str, country_code: Option<&str>) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let formatted = if digits.len() >= 7 {
        format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits
    };

    match country_code {
        Some(code) if !code.is_empty() => format!("{} {}", code, formatted),
        _ => formatted,
    }
}

/// Restricts `value` to `[min, max]`. When `min > max`, `min` wins.
pub fn clamp<T: PartialOrd + Copy>(value: T, min: T, max: T) -> T {
    let upper_bounded = if value > max { max } else { value };
    if upper_bounded < min {
        min
    } else {
        upper_bounded
    }
}

/// Formats `amount` as USD for `en-US`.
pub fn to_usd(amount: f64) -> String {
    // both codes are in the built-in tables
    to_currency(amount, DEFAULT_LOCALE, DEFAULT_CURRENCY).unwrap_or_else(|_| amount.to_string())
}

/// Formats `amount` the way the locale writes prices in `currency`.
///
/// ```
/// use small_utils::core::number::to_currency;
/// assert_eq!(to_currency(1234.56, "en-US", "USD").unwrap(), "$1,234.56");
/// assert_eq!(to_currency(1234.0, "ja-JP", "JPY").unwrap(), "￥1,234");
/// ```
pub fn to_currency(amount: f64, locale: &str, currency: &str) -> Result<String> {
    let format = LOCALES
        .iter()
        .find(|l| l.tag.eq_ignore_ascii_case(locale))
        .ok_or_else(|| UtilsError::UnsupportedLocale {
            locale: locale.to_string(),
        })?;
    let spec = CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(currency))
        .ok_or_else(|| UtilsError::UnsupportedCurrency {
            currency: currency.to_string(),
        })?;
    if !amount.is_finite() {
        return Err(UtilsError::invalid_argument("amount", "must be a finite number"));
    }

    let symbol = LOCAL_SYMBOLS
        .iter()
        .find(|(tag, code, _)| *tag == format.tag && *code == spec.code)
        .map(|(_, _, symbol)| *symbol)
        .unwrap_or(spec.symbol);

    let digits = spec.fraction_digits;
    let fixed = format!("{:.*}", digits, round_half_away(amount.abs(), digits));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut number = group_digits(int_part, format.group_separator);
    if let Some(frac) = frac_part {
        number.push_str(format.decimal_separator);
        number.push_str(frac);
    }

    // "-0.00" would be misleading
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };

    Ok(match format.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, number),
        SymbolPosition::Suffix => format!("{}{}{}{}", sign, number, NBSP, symbol),
    })
}

// `format!` rounds exact ties to even; prices and magnitudes round them up
fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
