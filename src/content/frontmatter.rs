//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::error::FrontMatterError;

/// Custom deserializer that accepts any scalar and keeps it as a string.
///
/// Authoring tools write `date: 2024` or `title: 2025` just as often as
/// quoted strings, so numbers and booleans are stringified instead of
/// rejected. `null` maps to `None`.
pub(crate) fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<S>(self, deserializer: S) -> Result<Self::Value, S::Error>
        where
            S: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarString)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Front-matter data from an event file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "optional_scalar")]
    pub title: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub date: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub description: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub location: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub thumbnail: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Only a `---` first line opens a block; an optional language hint may
    /// follow it (`---yaml`, `---json`). The block ends at the next `---`
    /// line, or at the end of the file when none follows. A file without a
    /// block is not an error; it yields empty metadata and the whole input
    /// as body.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(language) = opening_language(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let (block, remaining) = split_fenced(content);
        if block.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter = match language.as_str() {
            "" | "yaml" | "yml" => serde_yaml::from_str(block)?,
            "json" => serde_json::from_str(block)?,
            _ => return Err(FrontMatterError::UnsupportedLanguage(language)),
        };
        Ok((fm, remaining))
    }
}

/// Language hint of the opening fence, or None when `content` does not open
/// a front-matter block. `----` and longer rules are not fences.
fn opening_language(content: &str) -> Option<String> {
    let first = content.split('\n').next().unwrap_or("");
    let hint = first.strip_prefix("---")?;
    if hint.starts_with('-') {
        return None;
    }
    Some(hint.trim().to_ascii_lowercase())
}

/// Split the block opened by the first line from the body after the next
/// `---` line. An unclosed block runs to the end of the input.
fn split_fenced(content: &str) -> (&str, &str) {
    let first_line_len = match content.find('\n') {
        Some(i) => i + 1,
        None => return ("", ""),
    };
    let rest = &content[first_line_len..];

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return (block, body);
        }
        offset += line.len();
    }

    (rest, "")
}
