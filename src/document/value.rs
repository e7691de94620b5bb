use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value stored in a node's open data bag.
///
/// Editor payloads carry loosely-typed attachments (labels, descriptions,
/// icon names, numeric settings). Keeping them as an owned enum instead of a
/// raw JSON value means a document stays encodable with non-self-describing
/// codecs such as the binary artifact format.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Converts a JSON value into a bag value. Arrays and objects have no
    /// scalar representation and degrade to `Null`.
    pub fn from_json(value: &serde_json::Value) -> Self {
        if let Some(n) = value.as_f64() {
            Value::Number(n)
        } else if let Some(b) = value.as_bool() {
            Value::Bool(b)
        } else if let Some(s) = value.as_str() {
            Value::Text(s.to_string())
        } else {
            Value::Null
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
        }
    }
}

// Human-readable formats (JSON) see plain scalars so documents interchange
// directly with editor wire payloads; binary formats get the tagged encoding
// they need to decode without a schema.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::Number(n) => serializer.serialize_f64(*n),
                Value::Text(s) => serializer.serialize_str(s),
            }
        } else {
            match self {
                Value::Null => serializer.serialize_unit_variant("Value", 0, "Null"),
                Value::Bool(b) => serializer.serialize_newtype_variant("Value", 1, "Bool", b),
                Value::Number(n) => serializer.serialize_newtype_variant("Value", 2, "Number", n),
                Value::Text(s) => serializer.serialize_newtype_variant("Value", 3, "Text", s),
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let raw = serde_json::Value::deserialize(deserializer)?;
            if raw.is_array() || raw.is_object() {
                return Err(D::Error::custom("expected a scalar data-bag value"));
            }
            Ok(Value::from_json(&raw))
        } else {
            #[derive(Deserialize)]
            enum Tagged {
                Null,
                Bool(bool),
                Number(f64),
                Text(String),
            }

            Ok(match Tagged::deserialize(deserializer)? {
                Tagged::Null => Value::Null,
                Tagged::Bool(b) => Value::Bool(b),
                Tagged::Number(n) => Value::Number(n),
                Tagged::Text(s) => Value::Text(s),
            })
        }
    }
}
