//! Containers over the JSON tree: keyed records, tagged unions, and the
//! one-element-array payload wrapper.

use serde_json::{Map, Value};

use crate::decode::error::DecodeError;
use crate::decode::path::CodingPath;

/// A type that can be decoded from a JSON value found at a coding path.
pub trait Decode: Sized {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError>;
}

/// Decoder for one variant of a tagged union, given the value stored under
/// the variant's key and that value's path.
pub type VariantDecoder<T> = fn(&Value, &CodingPath) -> Result<T, DecodeError>;

/// Human-readable name of a JSON value's type, used in mismatch errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(value: &Value, path: &CodingPath, expected: &'static str) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.clone(),
        expected,
        found: json_type_name(value),
    }
}

impl Decode for String {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| type_mismatch(value, path, "string"))
    }
}

impl Decode for i64 {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        value
            .as_i64()
            .ok_or_else(|| type_mismatch(value, path, "integer"))
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, path: &CodingPath) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| type_mismatch(value, path, "array"))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item, &path.index(i)))
            .collect()
    }
}

/// A JSON object opened as a keyed container.
#[derive(Debug, Clone, Copy)]
pub struct Object<'a> {
    map: &'a Map<String, Value>,
    path: &'a CodingPath,
}

impl<'a> Object<'a> {
    /// Open `value` as an object, failing with a type mismatch otherwise.
    pub fn new(value: &'a Value, path: &'a CodingPath) -> Result<Self, DecodeError> {
        let map = value
            .as_object()
            .ok_or_else(|| type_mismatch(value, path, "object"))?;
        Ok(Object { map, path })
    }

    pub fn path(&self) -> &CodingPath {
        self.path
    }

    /// Whether `key` is present, even if its value is `null`.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Decode a required field.
    ///
    /// Absent keys fail with `MissingRequiredField`; `null` or a value of
    /// the wrong shape fails with `TypeMismatch`.
    pub fn required<T: Decode>(&self, key: &str) -> Result<T, DecodeError> {
        match self.map.get(key) {
            Some(value) => T::decode(value, &self.path.key(key)),
            None => Err(DecodeError::MissingRequiredField {
                path: self.path.clone(),
                field: key.to_string(),
            }),
        }
    }

    /// Decode a required field that may appear under one of several keys.
    ///
    /// Keys are tried in order; a missing field is reported under the first.
    pub fn required_any<T: Decode>(&self, keys: &[&str]) -> Result<T, DecodeError> {
        match keys.iter().find(|key| self.map.contains_key(**key)) {
            Some(key) => self.required(key),
            None => Err(DecodeError::MissingRequiredField {
                path: self.path.clone(),
                field: keys.first().copied().unwrap_or_default().to_string(),
            }),
        }
    }

    /// Decode an optional field. Absent and `null` both yield `None`.
    pub fn optional<T: Decode>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::decode(value, &self.path.key(key)).map(Some),
        }
    }

    /// Resolve a tagged union encoded by key presence.
    ///
    /// `variants` is the dispatch table in priority order. The first key
    /// present in the object selects the variant and its decoder receives
    /// the value stored under that key. When several keys are present the
    /// earliest one in the table wins.
    pub fn decode_variant<T>(
        &self,
        variants: &[(&'static str, VariantDecoder<T>)],
    ) -> Result<T, DecodeError> {
        let mut present = variants.iter().filter_map(|(key, decode)| {
            self.map.get(*key).map(|payload| (*key, *decode, payload))
        });

        let Some((key, decode, payload)) = present.next() else {
            return Err(DecodeError::MissingDiscriminator {
                path: self.path.clone(),
                expected: variants.iter().map(|(key, _)| *key).collect(),
            });
        };

        let ignored: Vec<&str> = present.map(|(key, _, _)| key).collect();
        if !ignored.is_empty() {
            tracing::warn!(
                "{}: found keys {:?} alongside `{}`; using `{}`",
                self.path,
                ignored,
                key,
                key
            );
        }

        decode(payload, &self.path.key(key))
    }
}

/// Decode the payload wrapped in a one-element array.
///
/// The value must be an array with at least one element; the first element
/// is decoded and any further elements are ignored.
pub fn unwrap_single<T: Decode>(value: &Value, path: &CodingPath) -> Result<T, DecodeError> {
    let items = value.as_array().ok_or_else(|| DecodeError::MalformedPayload {
        path: path.clone(),
        message: format!(
            "expected a one-element array wrapping the payload, found {}",
            json_type_name(value)
        ),
    })?;

    let first = items.first().ok_or_else(|| DecodeError::MalformedPayload {
        path: path.clone(),
        message: "payload array is empty".to_string(),
    })?;

    if items.len() > 1 {
        tracing::trace!(
            "{}: ignoring {} extra payload element(s)",
            path,
            items.len() - 1
        );
    }

    T::decode(first, &path.index(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::error::DecodeErrorKind;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Circle(String),
        Square,
    }

    const SHAPES: &[(&str, VariantDecoder<Shape>)] = &[
        ("circle", |value, path| unwrap_single(value, path).map(Shape::Circle)),
        ("square", |_, _| Ok(Shape::Square)),
    ];

    fn decode_shape(value: &Value) -> Result<Shape, DecodeError> {
        let root = CodingPath::root();
        Object::new(value, &root)?.decode_variant(SHAPES)
    }

    #[test]
    fn test_required_and_optional() {
        let value = json!({ "name": "core", "verb": null });
        let root = CodingPath::root();
        let object = Object::new(&value, &root).unwrap();

        assert_eq!(object.required::<String>("name").unwrap(), "core");
        assert_eq!(object.optional::<String>("verb").unwrap(), None);
        assert_eq!(object.optional::<String>("missing").unwrap(), None);

        let err = object.required::<String>("path").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                path: CodingPath::root(),
                field: "path".to_string(),
            }
        );
    }

    #[test]
    fn test_required_null_is_type_mismatch() {
        let value = json!({ "name": null });
        let root = CodingPath::root();
        let object = Object::new(&value, &root).unwrap();

        let err = object.required::<String>("name").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert!(err.to_string().contains("expected string, found null"));
    }

    #[test]
    fn test_optional_wrong_type_still_fails() {
        let value = json!({ "options": "not-a-list" });
        let root = CodingPath::root();
        let object = Object::new(&value, &root).unwrap();

        let err = object.optional::<Vec<String>>("options").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert_eq!(err.path().unwrap().to_string(), "options");
    }

    #[test]
    fn test_required_any_prefers_first_key() {
        let value = json!({ "location": "b", "url": "a" });
        let root = CodingPath::root();
        let object = Object::new(&value, &root).unwrap();
        assert_eq!(object.required_any::<String>(&["url", "location"]).unwrap(), "a");

        let value = json!({});
        let object = Object::new(&value, &root).unwrap();
        let err = object.required_any::<String>(&["url", "location"]).unwrap_err();
        assert!(err.to_string().contains("missing required field `url`"));
    }

    #[test]
    fn test_variant_selection() {
        assert_eq!(
            decode_shape(&json!({ "circle": ["red"] })).unwrap(),
            Shape::Circle("red".to_string())
        );
        assert_eq!(decode_shape(&json!({ "square": null })).unwrap(), Shape::Square);
    }

    #[test]
    fn test_variant_first_declared_key_wins() {
        let shape = decode_shape(&json!({ "square": {}, "circle": ["blue"] })).unwrap();
        assert_eq!(shape, Shape::Circle("blue".to_string()));
    }

    #[test]
    fn test_variant_missing_discriminator() {
        let err = decode_shape(&json!({ "triangle": [] })).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingDiscriminator {
                path: CodingPath::root(),
                expected: vec!["circle", "square"],
            }
        );
    }

    #[test]
    fn test_unwrap_single_ignores_extra_elements() {
        let root = CodingPath::root();
        let value = json!(["first", "second"]);
        assert_eq!(unwrap_single::<String>(&value, &root).unwrap(), "first");
    }

    #[test]
    fn test_unwrap_single_rejects_non_arrays_and_empty() {
        let root = CodingPath::root().key("exact");

        let err = unwrap_single::<String>(&json!("1.0.0"), &root).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MalformedPayload);

        let err = unwrap_single::<String>(&json!([]), &root).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MalformedPayload);
        assert!(err.to_string().contains("payload array is empty"));
    }

    #[test]
    fn test_unwrap_single_reports_element_path() {
        let root = CodingPath::root().key("exact");
        let err = unwrap_single::<String>(&json!([42]), &root).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "exact[0]");
    }

    #[test]
    fn test_vec_reports_index() {
        let root = CodingPath::root().key("sources");
        let err = Vec::<String>::decode(&json!(["a.swift", 3]), &root).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "sources[1]");
    }

    #[test]
    fn test_integer_values() {
        let root = CodingPath::root();
        assert_eq!(i64::decode(&json!(8080), &root).unwrap(), 8080);
        assert_eq!(i64::decode(&json!(70000), &root).unwrap(), 70000);
        assert_eq!(i64::decode(&json!(-1), &root).unwrap(), -1);

        let err = i64::decode(&json!(1.5), &root).unwrap_err();
        assert_eq!(err.to_string(), "<root>: expected integer, found number");
    }
}
