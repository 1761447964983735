use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel boundary pattern is valid"));

/// Upper-cases the first character and lower-cases the rest: `"hELLO" -> "Hello"`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character of every word, leaving the rest untouched.
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        let is_word_char = ch.is_alphanumeric() || ch == '_';
        if is_word_char && !in_word {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        in_word = is_word_char;
    }
    result
}

/// `"myVariableName" -> "my-variable-name"`
pub fn camel_to_kebab(text: &str) -> String {
    CAMEL_BOUNDARY.replace_all(text, "$1-$2").to_lowercase()
}

/// `"my-variable-name" -> "myVariableName"`. A trailing dash is kept.
pub fn kebab_to_camel(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '-' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some(&next) if !is_line_terminator(next) => {
                result.extend(next.to_uppercase());
                chars.next();
            }
            _ => result.push(ch),
        }
    }
    result
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Reverses `text` character by character.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Number of whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(capitalize_first("HELLO"), "Hello");
        assert_eq!(capitalize_first("hELLO"), "Hello");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("A"), "A");
        assert_eq!(capitalize_first("éCOLE"), "École");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("hello world"), "Hello World");
        assert_eq!(capitalize_words("javaScript is fun"), "JavaScript Is Fun");
        assert_eq!(capitalize_words("hello"), "Hello");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("o'neil-smith"), "O'Neil-Smith");
    }

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("camelCase"), "camel-case");
        assert_eq!(camel_to_kebab("myVariableName"), "my-variable-name");
        assert_eq!(camel_to_kebab("myvariablename"), "myvariablename");
        assert_eq!(camel_to_kebab(""), "");
    }

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("kebab-case"), "kebabCase");
        assert_eq!(kebab_to_camel("my-variable-name"), "myVariableName");
        assert_eq!(kebab_to_camel("myvariablename"), "myvariablename");
        assert_eq!(kebab_to_camel(""), "");
        assert_eq!(kebab_to_camel("trailing-"), "trailing-");
    }

    #[test]
    fn test_kebab_to_camel_keeps_dash_before_line_break() {
        assert_eq!(kebab_to_camel("a-\nb"), "a-\nb");
        assert_eq!(kebab_to_camel("a-\r\nb"), "a-\r\nb");
        assert_eq!(kebab_to_camel("a-\u{2028}b"), "a-\u{2028}b");
        assert_eq!(kebab_to_camel("a-\u{2029}b-c"), "a-\u{2029}bC");
    }

    #[test]
    fn test_case_conversion_round_trip() {
        assert_eq!(kebab_to_camel(&camel_to_kebab("myVariableName")), "myVariableName");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("hello world"), "dlrow olleh");
        assert_eq!(reverse("añb"), "bña");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("hello   world"), 2);
        assert_eq!(count_words("   hello world   "), 2);
        assert_eq!(count_words("     "), 0);
    }
}
