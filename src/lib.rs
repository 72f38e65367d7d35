//! Schema-driven command line arguments parser.
//!
//! A schema is a comma separated list of single letter identifiers, each
//! followed by a type suffix:
//!
//! | suffix | type          | values   |
//! |--------|---------------|----------|
//! |        | boolean       | none     |
//! | `*`    | string        | one      |
//! | `#`    | integer       | one      |
//! | `[]`   | string array  | up to 10 |
//!
//! ```
//! let args = argschema::Args::parse("b,s*,i#", ["-b", "-s", "Hello World!", "-i", "10"])?;
//! assert!(args.get_boolean('b')?);
//! assert_eq!(args.get_string('s')?, "Hello World!");
//! assert_eq!(args.get_integer('i')?, 10);
//! # Ok::<(), argschema::Error>(())
//! ```
//!
//! Flags that do not show up hold the zero value of their type. The parsed
//! [`Args`] are never mutated afterwards, so sharing them across threads is
//! fine.
use std::ffi::OsString;

mod builder;
mod error;
mod marshal;
mod rt;
mod schema;

pub use crate::{
    builder::Builder,
    error::{Error, MarshalError, ParseError, SchemaError},
    marshal::{Kind, Value, MAX_ARRAY_VALUES},
    schema::Schema,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Character every flag token starts with.
pub const FLAG_PREFIX: char = '-';

/// Arguments parsed against a [`Schema`].
#[derive(Debug, Clone)]
pub struct Args {
    schema: Schema,
    values: Vec<(Value, bool)>,
}

impl Args {
    /// Compiles `schema` and scans `args` against it.
    pub fn parse<I>(schema: &str, args: I) -> Result<Args>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let schema = Schema::parse(schema)?;
        Args::with_schema(schema, args)
    }

    /// Scans `args` against an already compiled schema.
    pub fn with_schema<I>(schema: Schema, args: I) -> Result<Args>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args = args.into_iter().map(Into::into).collect();
        let mut p = rt::Parser::new(args);
        Args::scan(schema, &mut p)
    }

    /// Like [`Args::parse`], for the arguments of the current process.
    pub fn from_env(schema: &str) -> Result<Args> {
        let schema = Schema::parse(schema)?;
        let mut p = rt::Parser::new_from_env();
        Args::scan(schema, &mut p)
    }

    fn scan(schema: Schema, p: &mut rt::Parser) -> Result<Args> {
        let values = rt::scan(&schema, p)?;
        Ok(Args { schema, values })
    }

    /// The schema the arguments were scanned against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Whether the flag for `id` appeared in the arguments.
    pub fn is_present(&self, id: char) -> Result<bool> {
        let (_, seen) = self.slot(id)?;
        Ok(*seen)
    }

    /// Untyped value of `id`; the zero value if its flag never appeared.
    pub fn value(&self, id: char) -> Result<&Value> {
        let (value, _) = self.slot(id)?;
        Ok(value)
    }

    /// Reads the value of `id` as `T`. Fails if `id` was declared with a
    /// different type; nothing is ever converted.
    pub fn get<'a, T: FromValue<'a>>(&'a self, id: char) -> Result<T> {
        let value = self.value(id)?;
        T::from_value(value).ok_or(Error::TypeMismatch {
            id,
            declared: value.kind(),
            requested: T::KIND,
        })
    }

    /// Value of a boolean (`x`) argument.
    pub fn get_boolean(&self, id: char) -> Result<bool> {
        self.get(id)
    }

    /// Value of an integer (`x#`) argument.
    pub fn get_integer(&self, id: char) -> Result<i32> {
        self.get(id)
    }

    /// Value of a string (`x*`) argument.
    pub fn get_string(&self, id: char) -> Result<&str> {
        self.get(id)
    }

    /// Values of a string array (`x[]`) argument.
    pub fn get_array(&self, id: char) -> Result<&[String]> {
        self.get(id)
    }

    fn slot(&self, id: char) -> Result<&(Value, bool)> {
        let (idx, _) = self.schema.lookup(id).ok_or(Error::UnknownArgument(id))?;
        Ok(&self.values[idx])
    }
}

/// Types [`Args::get`] can hand out.
pub trait FromValue<'a>: Sized {
    const KIND: Kind;

    fn from_value(value: &'a Value) -> Option<Self>;
}

macro_rules! from_value {
    ($($ty:ty => $kind:ident($it:ident) => $conv:expr;)*) => {$(
        impl<'a> FromValue<'a> for $ty {
            const KIND: Kind = Kind::$kind;

            fn from_value(value: &'a Value) -> Option<Self> {
                match value {
                    Value::$kind($it) => Some($conv),
                    _ => None,
                }
            }
        }
    )*};
}

from_value! {
    bool => Boolean(it) => *it;
    i32 => Integer(it) => *it;
    &'a str => String(it) => it.as_str();
    String => String(it) => it.clone();
    &'a [String] => StringArray(it) => it.as_slice();
    Vec<String> => StringArray(it) => it.clone();
}
