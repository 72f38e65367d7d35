use std::fmt;

use crate::error::{MarshalError, SchemaError};

/// Upper bound on the number of values a `[]` argument accepts.
pub const MAX_ARRAY_VALUES: usize = 10;

/// Value type of a schema element. Each kind knows its schema suffix, its
/// arity and how to turn captured tokens into a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    String,
    StringArray,
}

impl Kind {
    /// Looks up the kind registered for a schema type suffix.
    pub fn from_suffix(suffix: &str) -> Result<Kind, SchemaError> {
        let res = match suffix {
            "" => Kind::Boolean,
            "*" => Kind::String,
            "#" => Kind::Integer,
            "[]" => Kind::StringArray,
            _ => return Err(SchemaError::InvalidSuffix(suffix.to_string())),
        };
        Ok(res)
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Kind::Boolean => "",
            Kind::String => "*",
            Kind::Integer => "#",
            Kind::StringArray => "[]",
        }
    }

    /// Inclusive `(min, max)` number of values this kind accepts.
    pub fn arity(self) -> (usize, usize) {
        match self {
            Kind::Boolean => (0, 0),
            Kind::Integer | Kind::String => (1, 1),
            Kind::StringArray => (0, MAX_ARRAY_VALUES),
        }
    }

    /// The value an argument holds when its flag never shows up.
    pub fn zero(self) -> Value {
        match self {
            Kind::Boolean => Value::Boolean(false),
            Kind::Integer => Value::Integer(0),
            Kind::String => Value::String(String::new()),
            Kind::StringArray => Value::StringArray(Vec::new()),
        }
    }

    /// Converts the values captured after a flag.
    ///
    /// Booleans are set by the flag alone: whatever was captured is
    /// discarded and the arity is not checked.
    pub fn marshal(self, values: &[String]) -> Result<Value, MarshalError> {
        if self == Kind::Boolean {
            return Ok(Value::Boolean(true));
        }

        let (min, max) = self.arity();
        if values.len() < min || values.len() > max {
            return Err(MarshalError::Arity { min, max, found: values.len() });
        }

        let res = match self {
            Kind::Boolean => Value::Boolean(true),
            Kind::Integer => {
                let value = &values[0];
                let int = value.parse::<i32>().map_err(|source| {
                    MarshalError::NotAnInteger { value: value.clone(), source }
                })?;
                Value::Integer(int)
            }
            Kind::String => Value::String(values[0].clone()),
            Kind::StringArray => Value::StringArray(values.to_vec()),
        };
        Ok(res)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::String => "string",
            Kind::StringArray => "string array",
        };
        f.write_str(name)
    }
}

/// A decoded argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Boolean(bool),
    Integer(i32),
    String(String),
    StringArray(Vec<String>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::String(_) => Kind::String,
            Value::StringArray(_) => Kind::StringArray,
        }
    }
}
