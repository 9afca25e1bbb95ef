//! # Tokenizer
//!
//! Splits a validated sentence body into its header and positional data fields.

use heapless::Vec;
use nom::{Parser, bytes::complete::take_till, character::complete::char, sequence::preceded};

use crate::{IResult, Rejection};

/// Maximum number of comma-separated tokens, header included.
///
/// A standard sentence is at most 82 characters long, which bounds it to 41
/// tokens. The extra room accommodates receivers that exceed the limit.
pub const MAX_FIELDS: usize = 64;

/// The tokens of a sentence body.
///
/// Empty fields are preserved: `"GPRMC,,A"` has the header `GPRMC` and the
/// data fields `["", "A"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    header: &'a str,
    data: Vec<&'a str, { MAX_FIELDS - 1 }>,
}

impl<'a> Fields<'a> {
    /// Tokenizes `body` on `,`.
    ///
    /// No trimming or conversion takes place.
    ///
    /// ```rust
    /// use nmea0183_decoder::Fields;
    ///
    /// let fields = Fields::tokenize("GPDTM,W84,,0.0").unwrap();
    /// assert_eq!(fields.header(), "GPDTM");
    /// assert_eq!(fields.data(), &["W84", "", "0.0"]);
    /// ```
    pub fn tokenize(body: &'a str) -> Result<Self, Rejection> {
        let first: IResult<_, _> = field(body);
        let (mut i, header) = first.map_err(|_| Rejection::TooManyFields)?;

        let mut data = Vec::new();
        while !i.is_empty() {
            let next: IResult<_, _> = preceded(char(','), field).parse(i);
            let (rest, value) = next.map_err(|_| Rejection::TooManyFields)?;

            data.push(value).map_err(|_| Rejection::TooManyFields)?;
            i = rest;
        }

        Ok(Self { header, data })
    }

    /// The first token, e.g. `GPRMC`.
    pub fn header(&self) -> &'a str {
        self.header
    }

    /// The positional data fields following the header.
    pub fn data(&self) -> &[&'a str] {
        &self.data
    }

    /// Number of data fields.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sentence consists of the header only.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn field(i: &str) -> IResult<&str, &str> {
    take_till(|c| c == ',').parse(i)
}
