use crate::classifier::ClassificationError;
use crate::model::{Method, ParamKind};
use serde_json::{Map, Value};

/// Typed, by-name access to a notification's params.
///
/// A bundle that is not a JSON object is read as if it were empty, so every
/// lookup on it reports the field as missing.
pub struct ParamReader<'a> {
    method: Method,
    params: Option<&'a Map<String, Value>>,
}

impl<'a> ParamReader<'a> {
    pub fn new(method: Method, params: &'a Value) -> Self {
        Self {
            method,
            params: params.as_object(),
        }
    }

    pub fn string(&self, name: &str) -> Result<String, ClassificationError> {
        self.get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| self.mistyped(name, ParamKind::String))
    }

    /// Reads a JSON integer that fits in `T`. Floats are rejected even when
    /// they carry no fractional part.
    pub fn integer<T: TryFrom<i64>>(&self, name: &str) -> Result<T, ClassificationError> {
        self.get(name)
            .and_then(Value::as_i64)
            .and_then(|n| T::try_from(n).ok())
            .ok_or_else(|| self.mistyped(name, ParamKind::Integer))
    }

    /// Reads an array of objects and collects `item_field` from each one,
    /// keeping array order.
    pub fn object_strings(
        &self,
        name: &str,
        item_field: &'static str,
    ) -> Result<Vec<String>, ClassificationError> {
        let items = self
            .get(name)
            .and_then(Value::as_array)
            .ok_or_else(|| self.mistyped(name, ParamKind::ObjectArray { item_field }))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.get(item_field)
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        self.mistyped(format!("{}[{}].{}", name, i, item_field), ParamKind::String)
                    })
            })
            .collect()
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.params?.get(name)
    }

    fn mistyped(&self, field: impl Into<String>, expected: ParamKind) -> ClassificationError {
        ClassificationError::MissingOrMistypedField {
            method: self.method,
            field: field.into(),
            expected,
        }
    }
}
