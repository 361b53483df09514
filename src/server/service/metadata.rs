//! Command metadata extraction.
//!
//! Command modules declare their metadata as leading fields of an object literal
//! (`name: "ping"`, `aliases: ["p"]`, `enabledSlash: true`, ...). This module pulls those
//! fields out with pattern matching instead of parsing the language: it never fails on
//! unexpected input, it only reports a field as absent. Only the first
//! [`SCAN_LIMIT_CHARS`] characters of a source are searched.
//!
//! The `try_*` functions report why a field is missing through [`FieldError`]; the plain
//! functions collapse every failure to `None` (or an empty list), which is what the index
//! builder and the command listing use.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

/// Number of leading characters of a source that are searched for fields.
pub const SCAN_LIMIT_CHARS: usize = 12_000;

static ALIASES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"aliases\s*:\s*\[([\s\S]*?)\]").expect("aliases pattern is valid")
});

static QUOTED_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'`]([^"'`]+)["'`]"#).expect("quoted token pattern is valid")
});

static ENABLED_SLASH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"enabledSlash\s*:\s*(true|false)").expect("enabledSlash pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// Patterns for the fields every rebuild reads, compiled once.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| string_field_regex("name").expect("name pattern is valid"));
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| string_field_regex("description").expect("description pattern is valid"));
static USAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| string_field_regex("usage").expect("usage pattern is valid"));
static CATEGORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| string_field_regex("category").expect("category pattern is valid"));
static COOLDOWN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| number_field_regex("cooldown").expect("cooldown pattern is valid"));

/// Why a field could not be extracted.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The field does not appear in the scanned window.
    #[error("field `{0}` is not declared")]
    Absent(String),

    /// The pattern built for the field name failed to compile.
    #[error("invalid pattern for field `{field}`: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The field is declared but its digits do not fit the numeric type.
    #[error("field `{field}` value `{value}` is not a valid number: {source}")]
    NotANumber {
        field: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Returns the leading window of `text` that extraction is restricted to.
///
/// The window is measured in characters, not bytes, and always ends on a char boundary.
pub fn scan_window(text: &str) -> &str {
    match text.char_indices().nth(SCAN_LIMIT_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Extracts a quoted string field such as `name: "ping"`.
///
/// The value may be quoted with `"`, `'` or `` ` `` but must open and close with the same
/// quote. Runs of whitespace, newlines included, are collapsed to single spaces and the
/// result is trimmed. The first declaration in the window wins.
pub fn try_extract_string_field(text: &str, field_name: &str) -> Result<String, FieldError> {
    let pattern = string_field_pattern(field_name)?;

    let captures = pattern
        .captures(scan_window(text))
        .ok_or_else(|| FieldError::Absent(field_name.to_string()))?;

    let value = (1..=3)
        .find_map(|group| captures.get(group))
        .map(|m| m.as_str())
        .unwrap_or_default();

    Ok(WHITESPACE_RUN.replace_all(value, " ").trim().to_string())
}

/// Extracts a quoted string field, or `None` if it cannot be found.
pub fn extract_string_field(text: &str, field_name: &str) -> Option<String> {
    try_extract_string_field(text, field_name).ok()
}

/// Extracts the `aliases: [...]` list.
///
/// Every quoted token inside the brackets is returned in order of appearance, whichever of
/// the three quote characters it uses.
///
/// # Returns
/// - `Vec<String>` - The aliases; empty when the field is absent or the list is empty
pub fn extract_aliases(text: &str) -> Vec<String> {
    let Some(list) = ALIASES_PATTERN.captures(scan_window(text)) else {
        return Vec::new();
    };

    QUOTED_TOKEN_PATTERN
        .captures_iter(&list[1])
        .map(|token| token[1].to_string())
        .collect()
}

/// Extracts the `enabledSlash: true|false` flag.
///
/// Only the literal keywords are recognized.
///
/// # Returns
/// - `Some(bool)` - The declared value
/// - `None` - The field is not declared (or not declared with a literal keyword)
pub fn extract_enabled_slash(text: &str) -> Option<bool> {
    ENABLED_SLASH_PATTERN
        .captures(scan_window(text))
        .map(|captures| &captures[1] == "true")
}

/// Extracts an unquoted non-negative integer field such as `cooldown: 5`.
pub fn try_extract_number_field(text: &str, field_name: &str) -> Result<u64, FieldError> {
    let pattern = number_field_pattern(field_name)?;

    let captures = pattern
        .captures(scan_window(text))
        .ok_or_else(|| FieldError::Absent(field_name.to_string()))?;
    let digits = &captures[1];

    digits.parse::<u64>().map_err(|source| FieldError::NotANumber {
        field: field_name.to_string(),
        value: digits.to_string(),
        source,
    })
}

/// Extracts an unquoted integer field, or `None` if it is absent or out of range.
pub fn extract_number_field(text: &str, field_name: &str) -> Option<u64> {
    try_extract_number_field(text, field_name).ok()
}

fn string_field_regex(field_name: &str) -> Result<Regex, regex::Error> {
    let field = regex::escape(field_name);
    Regex::new(&format!(
        r#"{field}\s*:\s*(?:"([\s\S]*?)"|'([\s\S]*?)'|`([\s\S]*?)`)"#
    ))
}

fn number_field_regex(field_name: &str) -> Result<Regex, regex::Error> {
    let field = regex::escape(field_name);
    Regex::new(&format!(r"{field}\s*:\s*(\d+)"))
}

/// Returns the shared pattern for a known string field, compiling one for any other name.
fn string_field_pattern(field_name: &str) -> Result<Cow<'static, Regex>, FieldError> {
    let cached: Option<&'static Regex> = match field_name {
        "name" => Some(&NAME_PATTERN),
        "description" => Some(&DESCRIPTION_PATTERN),
        "usage" => Some(&USAGE_PATTERN),
        "category" => Some(&CATEGORY_PATTERN),
        _ => None,
    };

    match cached {
        Some(pattern) => Ok(Cow::Borrowed(pattern)),
        None => string_field_regex(field_name)
            .map(Cow::Owned)
            .map_err(|source| FieldError::Pattern {
                field: field_name.to_string(),
                source,
            }),
    }
}

/// Returns the shared pattern for `cooldown`, compiling one for any other numeric field.
fn number_field_pattern(field_name: &str) -> Result<Cow<'static, Regex>, FieldError> {
    if field_name == "cooldown" {
        return Ok(Cow::Borrowed(&COOLDOWN_PATTERN));
    }

    number_field_regex(field_name)
        .map(Cow::Owned)
        .map_err(|source| FieldError::Pattern {
            field: field_name.to_string(),
            source,
        })
}

/// Every metadata field a command source can declare.
///
/// Empty string values are treated the same as missing ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub category: Option<String>,
    pub aliases: Vec<String>,
    pub enabled_slash: Option<bool>,
    pub cooldown: Option<u64>,
}

impl CommandMetadata {
    /// Runs every extractor over `text`.
    pub fn extract(text: &str) -> Self {
        let non_empty = |field: &str| extract_string_field(text, field).filter(|v| !v.is_empty());

        Self {
            name: non_empty("name"),
            description: non_empty("description"),
            usage: non_empty("usage"),
            category: non_empty("category"),
            aliases: extract_aliases(text),
            enabled_slash: extract_enabled_slash(text),
            cooldown: extract_number_field(text, "cooldown"),
        }
    }
}
