use std::num::ParseIntError;

use thiserror::Error;

use crate::Kind;

/// Everything that can go wrong while compiling a schema, scanning the
/// arguments, or reading a value back.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid schema element #{index}: {cause}")]
    Schema {
        index: usize,
        #[source]
        cause: SchemaError,
    },

    #[error("can't parse `{token}`: {cause}")]
    Parse {
        token: String,
        #[source]
        cause: ParseError,
    },

    #[error("unknown argument: `-{0}`")]
    UnknownArgument(char),

    #[error("argument `-{id}` is declared as {declared}, not {requested}")]
    TypeMismatch { id: char, declared: Kind, requested: Kind },
}

impl Error {
    /// 0-based index of the offending schema element.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Schema { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Literal text of the offending argument token.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::Parse { token, .. } => Some(token),
            _ => None,
        }
    }

    pub(crate) fn schema(index: usize, cause: SchemaError) -> Error {
        Error::Schema { index, cause }
    }

    pub(crate) fn parse(token: impl Into<String>, cause: impl Into<ParseError>) -> Error {
        Error::Parse { token: token.into(), cause: cause.into() }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("no value provided for argument")]
    ElementEmpty,

    #[error("argument must be a letter: `{0}`")]
    NonLetterIdentifier(char),

    #[error("argument must be unique: `{0}`")]
    DuplicateIdentifier(char),

    #[error("unknown type suffix: `{0}`")]
    InvalidSuffix(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("argument must be prefixed with `{}`", crate::FLAG_PREFIX)]
    NotAFlag,

    #[error("argument name must be a single character")]
    InvalidIdentifierFormat,

    #[error("unknown argument: `-{0}`")]
    UnknownArgument(char),

    #[error("invalid utf8")]
    InvalidUtf8,

    #[error(transparent)]
    Marshal(#[from] MarshalError),
}

#[derive(Debug, Error)]
pub enum MarshalError {
    #[error("expected {} value(s), found {found}", arity(.min, .max))]
    Arity { min: usize, max: usize, found: usize },

    #[error("expected an integer, found `{value}`")]
    NotAnInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

fn arity(min: &usize, max: &usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{}..={}", min, max)
    }
}
