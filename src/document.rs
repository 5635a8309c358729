// src/document.rs
//! Raw document access.
//!
//! The document reader itself is deliberately thin: `serde_yaml` owns syntax,
//! this module owns shape. [`Section`] pairs a mapping value with the label it
//! was found under, so decoders report which section a failure belongs to
//! without threading labels through every call.

use serde_yaml::Value;

use crate::error::{ConfigError, Result};

/// The generic, untyped tree produced by parsing configuration text, prior to
/// schema validation.
pub type RawDocument = Value;

/// Parse raw configuration text into an untyped document.
///
/// Malformed input fails with [`ConfigError::DocumentSyntax`]; the failure is
/// fatal and propagates unchanged.
pub fn parse_document(text: &str) -> Result<RawDocument> {
    Ok(serde_yaml::from_str(text)?)
}

/// Human-readable name for a value's kind, used in mismatch errors.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// A mapping value paired with the section label used in error messages.
pub(crate) struct Section<'a> {
    label: &'a str,
    value: &'a Value,
}

impl<'a> Section<'a> {
    /// Wrap `value`, failing unless it is a mapping. `parent` names the
    /// enclosing section for the mismatch error.
    pub fn new(value: &'a Value, label: &'a str, parent: &str) -> Result<Self> {
        if value.is_mapping() {
            Ok(Self { label, value })
        } else {
            Err(ConfigError::type_mismatch(
                label,
                parent,
                "mapping",
                value_kind(value),
            ))
        }
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.value.get(field)
    }

    /// String keys of this section, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.value
            .as_mapping()
            .into_iter()
            .flat_map(|mapping| mapping.keys())
            .filter_map(Value::as_str)
    }

    fn require(&self, field: &str) -> Result<&'a Value> {
        self.get(field)
            .ok_or_else(|| ConfigError::missing_field(field, self.label))
    }

    pub fn require_str(&self, field: &str) -> Result<String> {
        let value = self.require(field)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(field, "string", value))
    }

    /// Required TCP port: an integer in 1..=65535.
    pub fn require_port(&self, field: &str) -> Result<u16> {
        let value = self.require(field)?;
        let n = value
            .as_i64()
            .ok_or_else(|| self.mismatch(field, "integer", value))?;
        u16::try_from(n)
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| {
                ConfigError::type_mismatch(field, self.label, "integer in 1..=65535", n.to_string())
            })
    }

    /// Optional byte count, falling back to `default` when absent.
    pub fn size_or(&self, field: &str, default: usize) -> Result<usize> {
        match self.get(field) {
            None => Ok(default),
            Some(value) => {
                let n = value
                    .as_u64()
                    .ok_or_else(|| self.mismatch(field, "non-negative integer", value))?;
                usize::try_from(n).map_err(|_| {
                    ConfigError::type_mismatch(
                        field,
                        self.label,
                        "non-negative integer",
                        n.to_string(),
                    )
                })
            }
        }
    }

    /// Optional boolean, falling back to `default` when absent.
    pub fn bool_or(&self, field: &str, default: bool) -> Result<bool> {
        match self.get(field) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.mismatch(field, "boolean", value)),
        }
    }

    /// Optional string; absence is not an error.
    pub fn opt_str(&self, field: &str) -> Result<Option<String>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_owned()))
                .ok_or_else(|| self.mismatch(field, "string", value)),
        }
    }

    fn mismatch(&self, field: &str, expected: &str, value: &Value) -> ConfigError {
        ConfigError::type_mismatch(field, self.label, expected, value_kind(value))
    }
}
