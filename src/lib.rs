pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;

pub use config::UtilsConfig;
pub use domain::model::{ElapsedSuffixes, Nested};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{Result, UtilsError};

pub use crate::core::array::{
    chunk, difference, flatten, flatten_json, intersection, remove_duplicates, shuffle,
    shuffle_with, unique_elements,
};
pub use crate::core::boolean::{is_empty, is_palindrome, is_weekend, Blank};
pub use crate::core::date::{
    days_between, format_elapsed, format_elapsed_from, parse_duration_secs, time_ago,
    time_ago_from,
};
pub use crate::core::misc::{debounce, sleep, sleep_ms, Debouncer};
pub use crate::core::number::{
    clamp, format_phone_number, format_readable, parse_readable, random_int, random_int_with,
    to_currency, to_usd, try_parse_readable,
};
pub use crate::core::object::{deep_clone, deep_merge, deep_merge_maps};
pub use crate::core::string::{
    camel_to_kebab, capitalize_first, capitalize_words, count_words, kebab_to_camel, reverse,
};
