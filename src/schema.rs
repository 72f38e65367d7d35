use std::fmt;

use crate::{error::SchemaError, Error, Kind, Result};

/// Compiled schema: single letter identifiers mapped to their [`Kind`], in
/// declaration order.
///
/// ```
/// let schema = argschema::Schema::parse(" b, s* ,i#,a[]").unwrap();
/// assert_eq!(schema.to_string(), "b,s*,i#,a[]");
/// assert_eq!(schema.kind('i'), Some(argschema::Kind::Integer));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    elements: Vec<(char, Kind)>,
}

impl Schema {
    /// Compiles `b,s*,i#,a[]`-style schema text.
    ///
    /// Every failure is reported against the 0-based index of the element
    /// that caused it.
    pub fn parse(text: &str) -> Result<Schema> {
        let mut res = Schema::empty();
        for (index, element) in text.split(',').enumerate() {
            let (id, kind) = res.element(element).map_err(|cause| Error::schema(index, cause))?;
            res.elements.push((id, kind));
        }
        log::debug!("compiled schema `{}`", res);
        Ok(res)
    }

    pub(crate) fn empty() -> Schema {
        Schema { elements: Vec::new() }
    }

    fn element(&self, element: &str) -> Result<(char, Kind), SchemaError> {
        let element = element.trim();
        let mut chars = element.chars();
        let id = chars.next().ok_or(SchemaError::ElementEmpty)?;
        self.check_id(id)?;
        let kind = Kind::from_suffix(chars.as_str())?;
        Ok((id, kind))
    }

    fn check_id(&self, id: char) -> Result<(), SchemaError> {
        if !id.is_alphabetic() {
            return Err(SchemaError::NonLetterIdentifier(id));
        }
        if self.kind(id).is_some() {
            return Err(SchemaError::DuplicateIdentifier(id));
        }
        Ok(())
    }

    /// Appends an already typed element, with the identifier rules of
    /// [`Schema::parse`].
    pub(crate) fn declare(&mut self, id: char, kind: Kind) -> Result<(), SchemaError> {
        self.check_id(id)?;
        self.elements.push((id, kind));
        Ok(())
    }

    pub fn kind(&self, id: char) -> Option<Kind> {
        self.lookup(id).map(|(_, kind)| kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Kind)> + '_ {
        self.elements.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Position and kind of `id`.
    pub(crate) fn lookup(&self, id: char) -> Option<(usize, Kind)> {
        self.elements.iter().position(|&(it, _)| it == id).map(|idx| (idx, self.elements[idx].1))
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, kind)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}{}", id, kind.suffix())?;
        }
        Ok(())
    }
}
