use std::ffi::OsString;

use crate::{error::ParseError, Error, Result, Schema, Value, FLAG_PREFIX};

/// Token stream over the raw arguments. Kept reversed so that the next token
/// is always at the end.
pub(crate) struct Parser {
    rargs: Vec<OsString>,
}

impl Parser {
    pub(crate) fn new(mut args: Vec<OsString>) -> Self {
        args.reverse();
        Self { rargs: args }
    }

    pub(crate) fn new_from_env() -> Self {
        let mut args = std::env::args_os().collect::<Vec<_>>();
        args.reverse();
        args.pop();
        Self { rargs: args }
    }

    /// Next token, trimmed, if it is a flag.
    pub(crate) fn peek_flag(&self) -> Option<&str> {
        self.rargs.last().and_then(|it| it.to_str()).map(str::trim).filter(|it| is_flag(it))
    }

    /// Whether the next token can be captured as a value. Unlike
    /// `peek_flag`, the token is not trimmed: `" -b"` is a value.
    fn at_value(&self) -> bool {
        match self.rargs.last() {
            Some(it) => !it.to_str().map_or(false, is_flag),
            None => false,
        }
    }

    /// Pops the next token: `Ok` with the trimmed text for a flag token,
    /// `Err` with the raw token otherwise.
    pub(crate) fn pop_flag(&mut self) -> Option<Result<String, OsString>> {
        if let Some(flag) = self.peek_flag() {
            let flag = flag.to_string();
            self.next();
            Some(Ok(flag))
        } else {
            self.next().map(Err)
        }
    }

    fn next(&mut self) -> Option<OsString> {
        self.rargs.pop()
    }

    /// Captures the run of non-flag tokens up to the next flag or the end.
    pub(crate) fn values(&mut self, flag: &str) -> Result<Vec<String>> {
        let mut res = Vec::new();
        while self.at_value() {
            let value = match self.next() {
                Some(it) => it,
                None => break,
            };
            let value =
                value.into_string().map_err(|_| Error::parse(flag, ParseError::InvalidUtf8))?;
            res.push(value);
        }
        Ok(res)
    }
}

fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Identifier named by a flag token: exactly one character after the prefix.
fn flag_id(flag: &str) -> Result<char> {
    let mut chars = flag.strip_prefix(FLAG_PREFIX).unwrap_or(flag).chars();
    match (chars.next(), chars.next()) {
        (Some(id), None) => Ok(id),
        _ => Err(Error::parse(flag, ParseError::InvalidIdentifierFormat)),
    }
}

/// Scans `p` against `schema`, producing one value slot per schema element
/// and whether its flag was seen.
pub(crate) fn scan(schema: &Schema, p: &mut Parser) -> Result<Vec<(Value, bool)>> {
    let mut slots = schema.iter().map(|(_, kind)| (kind.zero(), false)).collect::<Vec<_>>();

    while let Some(arg) = p.pop_flag() {
        let flag = match arg {
            Ok(flag) => flag,
            Err(arg) => {
                let token = arg.to_string_lossy().trim().to_string();
                let cause = if arg.to_str().is_some() {
                    ParseError::NotAFlag
                } else {
                    ParseError::InvalidUtf8
                };
                return Err(Error::parse(token, cause));
            }
        };
        let id = flag_id(&flag)?;
        let values = p.values(&flag)?;

        let (idx, kind) = schema
            .lookup(id)
            .ok_or_else(|| Error::parse(flag.as_str(), ParseError::UnknownArgument(id)))?;
        log::trace!("`{}`: {} {} value(s)", flag, kind, values.len());

        let value = kind.marshal(&values).map_err(|err| Error::parse(flag.as_str(), err))?;
        slots[idx] = (value, true);
    }

    log::debug!("scanned {} flag(s)", slots.iter().filter(|(_, seen)| *seen).count());
    Ok(slots)
}
