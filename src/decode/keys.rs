//! Key normalization applied to the whole JSON tree before decoding.
//!
//! The describe command emits snake_case keys (`manifest_display_name`,
//! `target_dependencies`, `lower_bound`). Record decoders look fields up by
//! their camelCase names, so the tree is rewritten once, up front, instead of
//! renaming field by field.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How object keys are treated before record decoders see them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyDecodingStrategy {
    /// Rewrite `snake_case` keys to `camelCase` (the describe output format).
    #[default]
    #[serde(alias = "convert_from_snake_case", alias = "snake-case")]
    ConvertFromSnakeCase,
    /// Use keys exactly as they appear in the document.
    #[serde(alias = "use_default_keys", alias = "default")]
    UseDefaultKeys,
}

impl KeyDecodingStrategy {
    /// Apply this strategy to every object key in `value`, recursively.
    pub fn apply(self, value: &mut Value) {
        match self {
            KeyDecodingStrategy::ConvertFromSnakeCase => convert_keys_from_snake_case(value),
            KeyDecodingStrategy::UseDefaultKeys => {}
        }
    }
}

/// Rewrite every object key in the tree from snake_case to camelCase.
///
/// String values are left alone; only keys change.
pub fn convert_keys_from_snake_case(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            *map = entries
                .into_iter()
                .map(|(key, mut child)| {
                    convert_keys_from_snake_case(&mut child);
                    let key = match snake_to_camel_case(&key) {
                        Cow::Borrowed(_) => key,
                        Cow::Owned(converted) => converted,
                    };
                    (key, child)
                })
                .collect::<Map<String, Value>>();
        }
        Value::Array(items) => items.iter_mut().for_each(convert_keys_from_snake_case),
        _ => {}
    }
}

/// Convert one snake_case key to camelCase.
///
/// Leading and trailing underscores are kept. A key with no interior
/// underscore is returned unchanged. Otherwise the first word is lowercased
/// and every following word gets an uppercase first letter with the rest
/// lowercased: `lower_bound` becomes `lowerBound`.
pub fn snake_to_camel_case(key: &str) -> Cow<'_, str> {
    let trimmed = key.trim_matches('_');
    if !trimmed.contains('_') {
        return Cow::Borrowed(key);
    }

    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();

    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);

    let mut words = trimmed.split('_').filter(|word| !word.is_empty());
    if let Some(first) = words.next() {
        out.push_str(&first.to_lowercase());
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }

    out.push_str(&key[key.len() - trailing..]);
    Cow::Owned(out)
}
