use std::ffi::OsString;

use crate::{Args, Error, Kind, Result, Schema};

/// Declares a schema one argument at a time.
///
/// ```
/// let args = argschema::Builder::new()
///     .with_boolean('b')
///     .with_integer('i')
///     .with_string('s')
///     .with_array('a')
///     .build(["-b", "-i", "10", "-a", "Hello", "World"])?;
/// assert_eq!(args.get_array('a')?, ["Hello", "World"]);
/// assert_eq!(args.get_string('s')?, "");
/// # Ok::<(), argschema::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Builder {
    elements: Vec<(char, Kind)>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    pub fn with_boolean(self, id: char) -> Builder {
        self.with(id, Kind::Boolean)
    }

    pub fn with_integer(self, id: char) -> Builder {
        self.with(id, Kind::Integer)
    }

    pub fn with_string(self, id: char) -> Builder {
        self.with(id, Kind::String)
    }

    pub fn with_array(self, id: char) -> Builder {
        self.with(id, Kind::StringArray)
    }

    pub fn with(mut self, id: char, kind: Kind) -> Builder {
        self.elements.push((id, kind));
        self
    }

    /// Compiles the declarations. Identifiers must be letters and unique;
    /// failures carry the index of the offending declaration.
    pub fn schema(&self) -> Result<Schema> {
        let mut res = Schema::empty();
        for (index, &(id, kind)) in self.elements.iter().enumerate() {
            res.declare(id, kind).map_err(|cause| Error::schema(index, cause))?;
        }
        log::debug!("built schema `{}`", res);
        Ok(res)
    }

    /// Compiles the declarations and scans `args` against them.
    pub fn build<I>(&self, args: I) -> Result<Args>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Args::with_schema(self.schema()?, args)
    }
}
