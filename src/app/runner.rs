use crate::config::cli::{CaseStyle, Command};
use crate::config::toml_config::UtilsConfig;
use crate::core::{date, number, object, string};
use crate::domain::ports::{Clock, FixedClock, SystemClock};
use crate::utils::error::{Result, UtilsError};
use chrono::{DateTime, Utc};

/// Runs one CLI command and returns what should be printed.
pub fn execute(command: &Command, config: &UtilsConfig) -> Result<String> {
    tracing::debug!("executing {:?}", command);

    let output = match command {
        Command::Readable { number: value } => number::format_readable(*value),
        Command::ParseReadable { text } => match number::try_parse_readable(text) {
            Some(value) => value.to_string(),
            None => {
                return Err(UtilsError::invalid_argument(
                    "text",
                    format!("'{}' is not a readable number", text),
                ))
            }
        },
        Command::Duration { text } => date::parse_duration_secs(text)?.to_string(),
        Command::Currency {
            amount,
            locale,
            currency,
        } => number::to_currency(
            *amount,
            locale.as_deref().unwrap_or(&config.currency.locale),
            currency.as_deref().unwrap_or(&config.currency.code),
        )?,
        Command::Phone {
            number: phone,
            country_code,
        } => number::format_phone_number(phone, country_code.as_deref()),
        Command::Ago { since, now } => date::time_ago_from(*since, reference_now(*now)),
        Command::Elapsed { since, now } => {
            date::format_elapsed_from(*since, reference_now(*now), &config.elapsed.suffixes)
        }
        Command::Case { style, text } => match style {
            CaseStyle::Kebab => string::camel_to_kebab(text),
            CaseStyle::Camel => string::kebab_to_camel(text),
            CaseStyle::First => string::capitalize_first(text),
            CaseStyle::Words => string::capitalize_words(text),
            CaseStyle::Reverse => string::reverse(text),
        },
        Command::Words { text } => string::count_words(text).to_string(),
        Command::Merge { base, overlay } => {
            let base: serde_json::Value = serde_json::from_str(base)?;
            let overlay: serde_json::Value = serde_json::from_str(overlay)?;
            serde_json::to_string(&object::deep_merge(&base, &overlay))?
        }
    };

    Ok(output)
}

fn reference_now(pinned: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let clock: Box<dyn Clock> = match pinned {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock::new()),
    };
    clock.now()
}
